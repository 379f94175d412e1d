//! Presentation shapes for campaigns
//!
//! Pure mappings from the [`Campaign`] aggregate into the summary (listing)
//! and detail views. Sparse input never fails: a campaign without images gets
//! an empty `image_url`, a missing owner profile renders as empty strings.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Campaign, CampaignImage};

/// Listing view of a campaign
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignSummary {
    pub id: i32,
    pub name: String,
    pub short_description: String,
    pub image_url: String,
    pub goal_amount: i64,
    pub current_amount: i64,
    pub slug: String,
    pub user_id: i32,
}

/// Owner block of the detail view
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignUser {
    pub name: String,
    pub image_url: String,
}

/// One image entry of the detail view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignImageView {
    pub image_url: String,
    pub is_primary: bool,
}

/// Single-campaign view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignDetail {
    pub id: i32,
    pub name: String,
    pub short_description: String,
    pub description: String,
    pub image_url: String,
    pub goal_amount: i64,
    pub current_amount: i64,
    pub user_id: i32,
    pub slug: String,
    pub perks: Vec<String>,
    pub user: CampaignUser,
    pub images: Vec<CampaignImageView>,
}

/// First image in store order, or empty. The primary marker is not consulted.
fn cover_image_url(campaign: &Campaign) -> String {
    campaign
        .cover_image()
        .map(|image| image.file_name.clone())
        .unwrap_or_default()
}

/// Split the stored perks string on commas, trimming each piece.
///
/// Empty pieces are kept, so `"A,B,"` yields `["A", "B", ""]` and `""`
/// yields `[""]`.
pub fn parse_perks(perks: &str) -> Vec<String> {
    perks.split(',').map(|perk| perk.trim().to_string()).collect()
}

impl From<&Campaign> for CampaignSummary {
    fn from(campaign: &Campaign) -> Self {
        Self {
            id: campaign.id,
            name: campaign.name.clone(),
            short_description: campaign.short_description.clone(),
            image_url: cover_image_url(campaign),
            goal_amount: campaign.goal_amount,
            current_amount: campaign.current_amount,
            slug: campaign.slug.clone(),
            user_id: campaign.user_id,
        }
    }
}

impl From<&CampaignImage> for CampaignImageView {
    fn from(image: &CampaignImage) -> Self {
        Self {
            image_url: image.file_name.clone(),
            is_primary: image.is_primary(),
        }
    }
}

impl From<&Campaign> for CampaignDetail {
    fn from(campaign: &Campaign) -> Self {
        let user = campaign
            .owner
            .as_ref()
            .map(|owner| CampaignUser {
                name: owner.name.clone(),
                image_url: owner.avatar_file_name.clone().unwrap_or_default(),
            })
            .unwrap_or_default();

        Self {
            id: campaign.id,
            name: campaign.name.clone(),
            short_description: campaign.short_description.clone(),
            description: campaign.description.clone(),
            image_url: cover_image_url(campaign),
            goal_amount: campaign.goal_amount,
            current_amount: campaign.current_amount,
            user_id: campaign.user_id,
            slug: campaign.slug.clone(),
            perks: parse_perks(&campaign.perks),
            user,
            images: campaign.images.iter().map(Into::into).collect(),
        }
    }
}

pub fn format_campaign(campaign: &Campaign) -> CampaignSummary {
    campaign.into()
}

pub fn format_campaigns(campaigns: &[Campaign]) -> Vec<CampaignSummary> {
    campaigns.iter().map(format_campaign).collect()
}

pub fn format_campaign_detail(campaign: &Campaign) -> CampaignDetail {
    campaign.into()
}
