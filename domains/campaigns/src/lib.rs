//! Campaigns domain: retrieval policy, presentation formatting, campaign store

pub mod api;
pub mod domain;
pub mod repository;
pub mod service;

// Re-export domain types at the crate root for convenience
pub use domain::entities::{Campaign, CampaignImage, CampaignOwner, PRIMARY_IMAGE_MARKER};
pub use domain::error::CampaignError;
pub use domain::formatter::{
    format_campaign, format_campaign_detail, format_campaigns, parse_perks, CampaignDetail,
    CampaignImageView, CampaignSummary, CampaignUser,
};
pub use domain::retrieval::{get_campaign_detail, list_campaigns, CampaignScope};

// Re-export repository types
pub use repository::{CampaignRepository, CampaignStore, MockCampaignStore};

// Re-export service types
pub use service::{CampaignService, GetCampaignDetailInput};

// Re-export API types
pub use api::routes;
pub use api::CampaignsState;
