//! Domain entities for the Campaigns domain
//!
//! Campaigns, their images, and the read-only owner profile joined onto them.
//! Rows are written by the campaign-management and upload flows; this crate
//! only reads and reshapes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crowdfund_common::{Error, Result};

/// Stored `is_primary` value that marks an image as the campaign's primary image
pub const PRIMARY_IMAGE_MARKER: i32 = 1;

/// Image attached to a campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(default)]
pub struct CampaignImage {
    pub id: i32,
    pub campaign_id: i32,
    pub file_name: String,
    /// Raw primary marker; only [`PRIMARY_IMAGE_MARKER`] means primary.
    /// More than one image per campaign may carry it.
    #[sqlx(rename = "is_primary")]
    pub primary_marker: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl CampaignImage {
    pub fn is_primary(&self) -> bool {
        self.primary_marker == PRIMARY_IMAGE_MARKER
    }
}

/// Owner profile as seen from a campaign
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CampaignOwner {
    pub id: i32,
    pub name: String,
    pub avatar_file_name: Option<String>,
}

/// Campaign aggregate: the campaign row plus its images and owner profile
///
/// Missing fields deserialize to their defaults, so seed files may omit
/// timestamps, counters and images.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Campaign {
    pub id: i32,
    /// Owner's user id
    pub user_id: i32,
    pub name: String,
    pub short_description: String,
    pub description: String,
    /// Comma-separated perk titles
    pub perks: String,
    pub perk_count: i32,
    pub backer_count: i32,
    pub goal_amount: i64,
    pub current_amount: i64,
    pub slug: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Images in store order
    pub images: Vec<CampaignImage>,
    /// `None` when the owner row could not be joined
    pub owner: Option<CampaignOwner>,
}

impl Campaign {
    /// Image shown as the campaign's cover: the first one in store order
    pub fn cover_image(&self) -> Option<&CampaignImage> {
        self.images.first()
    }

    /// Validate per-row invariants.
    ///
    /// Slug uniqueness spans campaigns and is left to the store.
    pub fn validate(&self) -> Result<()> {
        if self.goal_amount <= 0 {
            return Err(Error::Validation(
                "Campaign goal_amount must be positive".to_string(),
            ));
        }

        if self.current_amount < 0 {
            return Err(Error::Validation(
                "Campaign current_amount cannot be negative".to_string(),
            ));
        }

        if self.backer_count < 0 {
            return Err(Error::Validation(
                "Campaign backer_count cannot be negative".to_string(),
            ));
        }

        if self.slug.trim().is_empty() {
            return Err(Error::Validation("Campaign slug is required".to_string()));
        }

        if let Some(image) = self.images.iter().find(|i| i.campaign_id != self.id) {
            return Err(Error::Validation(format!(
                "Image {} belongs to campaign {}, not {}",
                image.id, image.campaign_id, self.id
            )));
        }

        Ok(())
    }
}
