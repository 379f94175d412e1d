//! Repository implementations for the Campaigns domain

pub mod campaigns;
pub mod mock;

use crowdfund_common::RepositoryError;

use crate::domain::entities::Campaign;

pub use campaigns::CampaignRepository;
pub use mock::MockCampaignStore;

/// Read access to campaigns, their images, and owner profiles.
///
/// Every returned campaign carries its images in store order and, where the
/// owner row exists, the owner profile.
#[async_trait::async_trait]
pub trait CampaignStore: Send + Sync {
    /// Campaigns owned by `owner_id`
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Campaign>, RepositoryError>;

    /// Every campaign
    async fn find_all(&self) -> Result<Vec<Campaign>, RepositoryError>;

    /// One campaign, `None` if no campaign has that id
    async fn find_by_id(&self, campaign_id: i32) -> Result<Option<Campaign>, RepositoryError>;
}
