//! In-memory campaign store
//!
//! Backs tests and the `mock` store provider:
//! - campaigns are kept in insertion order, which is the store order
//! - seeding enforces the entity invariants and slug uniqueness
//! - an outage switch makes every read fail like a lost connection

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use crowdfund_common::RepositoryError;

use super::CampaignStore;
use crate::domain::entities::Campaign;

#[derive(Debug, Clone, Default)]
pub struct MockCampaignStore {
    campaigns: Arc<RwLock<Vec<Campaign>>>,
    unavailable: Arc<AtomicBool>,
}

fn poisoned() -> RepositoryError {
    RepositoryError::InvalidData("campaign store lock poisoned".to_string())
}

impl MockCampaignStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with `campaigns`, in order
    pub fn with_campaigns(campaigns: Vec<Campaign>) -> Result<Self, RepositoryError> {
        let store = Self::new();
        for campaign in campaigns {
            store.insert(campaign)?;
        }
        Ok(store)
    }

    /// Append a campaign
    pub fn insert(&self, campaign: Campaign) -> Result<(), RepositoryError> {
        campaign
            .validate()
            .map_err(|e| RepositoryError::InvalidData(e.to_string()))?;

        let mut campaigns = self.campaigns.write().map_err(|_| poisoned())?;

        if campaigns.iter().any(|c| c.id == campaign.id) {
            return Err(RepositoryError::AlreadyExists(format!(
                "campaign id {}",
                campaign.id
            )));
        }
        if campaigns.iter().any(|c| c.slug == campaign.slug) {
            return Err(RepositoryError::AlreadyExists(format!(
                "campaign slug {}",
                campaign.slug
            )));
        }

        campaigns.push(campaign);
        Ok(())
    }

    /// Simulate a store outage for every subsequent read
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn len(&self) -> Result<usize, RepositoryError> {
        Ok(self.campaigns.read().map_err(|_| poisoned())?.len())
    }

    #[mutants::skip] // Delegates to len()
    pub fn is_empty(&self) -> Result<bool, RepositoryError> {
        Ok(self.len()? == 0)
    }

    fn snapshot<F>(&self, keep: F) -> Result<Vec<Campaign>, RepositoryError>
    where
        F: Fn(&Campaign) -> bool,
    {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(RepositoryError::Connection(sqlx::Error::PoolTimedOut));
        }

        let campaigns = self.campaigns.read().map_err(|_| poisoned())?;
        Ok(campaigns.iter().filter(|c| keep(c)).cloned().collect())
    }
}

#[async_trait::async_trait]
impl CampaignStore for MockCampaignStore {
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Campaign>, RepositoryError> {
        self.snapshot(|c| c.user_id == owner_id)
    }

    async fn find_all(&self) -> Result<Vec<Campaign>, RepositoryError> {
        self.snapshot(|_| true)
    }

    async fn find_by_id(&self, campaign_id: i32) -> Result<Option<Campaign>, RepositoryError> {
        Ok(self.snapshot(|c| c.id == campaign_id)?.into_iter().next())
    }
}
