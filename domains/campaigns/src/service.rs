//! Campaign service
//!
//! Use cases exposed to the HTTP boundary. Results are the raw campaign
//! aggregates; shaping them for output is left to the caller.

use std::sync::Arc;

use serde::Deserialize;
use validator::Validate;

use crate::domain::entities::Campaign;
use crate::domain::error::CampaignError;
use crate::domain::retrieval;
use crate::repository::CampaignStore;

/// Input for a single-campaign lookup
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
pub struct GetCampaignDetailInput {
    #[validate(range(min = 1))]
    pub id: i32,
}

#[derive(Clone)]
pub struct CampaignService {
    store: Arc<dyn CampaignStore>,
}

impl CampaignService {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self { store }
    }

    /// Campaigns owned by `owner_id`, or the full catalog when it is absent or non-positive
    pub async fn get_campaigns(
        &self,
        owner_id: Option<i32>,
    ) -> Result<Vec<Campaign>, CampaignError> {
        retrieval::list_campaigns(self.store.as_ref(), owner_id).await
    }

    /// One campaign with images and owner profile
    pub async fn get_campaign_by_id(
        &self,
        input: GetCampaignDetailInput,
    ) -> Result<Campaign, CampaignError> {
        retrieval::get_campaign_detail(self.store.as_ref(), input.id).await
    }
}
