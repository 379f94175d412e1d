//! Campaigns domain state

use std::sync::Arc;

use crate::repository::CampaignStore;
use crate::service::CampaignService;

/// Application state for the Campaigns domain
#[derive(Clone)]
pub struct CampaignsState {
    pub campaigns: CampaignService,
}

impl CampaignsState {
    pub fn new(store: Arc<dyn CampaignStore>) -> Self {
        Self {
            campaigns: CampaignService::new(store),
        }
    }
}
