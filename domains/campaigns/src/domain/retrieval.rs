//! Campaign retrieval policy
//!
//! Decides which campaigns a caller sees and performs single-campaign lookup.
//! Store failures abort the whole call: no retries, no partial results.

use crate::domain::entities::Campaign;
use crate::domain::error::CampaignError;
use crate::repository::CampaignStore;

/// Which slice of the catalog a listing covers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CampaignScope {
    /// Campaigns owned by one user
    Owner(i32),
    /// Full catalog (browse / unauthenticated)
    All,
}

impl CampaignScope {
    /// A positive owner id scopes the listing; absent or non-positive ids browse everything.
    pub fn for_owner(owner_id: Option<i32>) -> Self {
        match owner_id {
            Some(id) if id > 0 => Self::Owner(id),
            _ => Self::All,
        }
    }
}

/// List the campaigns visible for `owner_id`, in store order
pub async fn list_campaigns(
    store: &dyn CampaignStore,
    owner_id: Option<i32>,
) -> Result<Vec<Campaign>, CampaignError> {
    let campaigns = match CampaignScope::for_owner(owner_id) {
        CampaignScope::Owner(id) => {
            tracing::debug!(owner_id = id, "Listing campaigns for owner");
            store.find_by_owner(id).await?
        }
        CampaignScope::All => {
            tracing::debug!("Listing full campaign catalog");
            store.find_all().await?
        }
    };

    Ok(campaigns)
}

/// Look up one campaign with its images and owner profile
pub async fn get_campaign_detail(
    store: &dyn CampaignStore,
    campaign_id: i32,
) -> Result<Campaign, CampaignError> {
    tracing::debug!(campaign_id, "Looking up campaign detail");

    store
        .find_by_id(campaign_id)
        .await?
        .ok_or(CampaignError::NotFound(campaign_id))
}
