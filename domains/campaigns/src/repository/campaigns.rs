//! PostgreSQL campaign repository

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use crowdfund_common::RepositoryError;
use sqlx::PgPool;

use super::CampaignStore;
use crate::domain::entities::{Campaign, CampaignImage, CampaignOwner};

/// Campaign columns plus the joined owner profile, used by every campaign SELECT.
const CAMPAIGN_COLUMNS: &str = "\
    c.id, c.user_id, c.name, c.short_description, c.description, \
    c.perks, c.perk_count, c.backer_count, c.goal_amount, c.current_amount, \
    c.slug, c.created_at, c.updated_at, \
    u.id AS owner_id, u.name AS owner_name, u.avatar_file_name AS owner_avatar_file_name";

const CAMPAIGN_FROM: &str = "FROM campaigns c LEFT JOIN users u ON u.id = c.user_id";

const IMAGE_COLUMNS: &str = "id, campaign_id, file_name, is_primary, created_at, updated_at";

/// Flat campaign row as returned by the owner join
#[derive(Debug, Clone, sqlx::FromRow)]
struct CampaignRow {
    id: i32,
    user_id: i32,
    name: String,
    short_description: String,
    description: String,
    perks: String,
    perk_count: i32,
    backer_count: i32,
    goal_amount: i64,
    current_amount: i64,
    slug: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
    owner_id: Option<i32>,
    owner_name: Option<String>,
    owner_avatar_file_name: Option<String>,
}

impl CampaignRow {
    fn into_campaign(self, images: Vec<CampaignImage>) -> Campaign {
        let owner = self.owner_id.map(|id| CampaignOwner {
            id,
            name: self.owner_name.unwrap_or_default(),
            avatar_file_name: self.owner_avatar_file_name,
        });

        Campaign {
            id: self.id,
            user_id: self.user_id,
            name: self.name,
            short_description: self.short_description,
            description: self.description,
            perks: self.perks,
            perk_count: self.perk_count,
            backer_count: self.backer_count,
            goal_amount: self.goal_amount,
            current_amount: self.current_amount,
            slug: self.slug,
            created_at: self.created_at,
            updated_at: self.updated_at,
            images,
            owner,
        }
    }
}

/// Attach images to their campaigns, keeping row order and image order.
fn assemble(rows: Vec<CampaignRow>, images: Vec<CampaignImage>) -> Vec<Campaign> {
    let mut by_campaign: HashMap<i32, Vec<CampaignImage>> = HashMap::new();
    for image in images {
        by_campaign.entry(image.campaign_id).or_default().push(image);
    }

    rows.into_iter()
        .map(|row| {
            let images = by_campaign.remove(&row.id).unwrap_or_default();
            row.into_campaign(images)
        })
        .collect()
}

#[derive(Clone)]
pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Load images for the given campaigns, ordered by image id
    async fn images_for(
        &self,
        campaign_ids: &[i32],
    ) -> Result<Vec<CampaignImage>, RepositoryError> {
        if campaign_ids.is_empty() {
            return Ok(Vec::new());
        }

        let query = format!(
            "SELECT {IMAGE_COLUMNS} FROM campaign_images \
             WHERE campaign_id = ANY($1) ORDER BY id"
        );
        let images = sqlx::query_as::<_, CampaignImage>(&query)
            .bind(campaign_ids)
            .fetch_all(&self.pool)
            .await?;

        Ok(images)
    }

    async fn with_images(&self, rows: Vec<CampaignRow>) -> Result<Vec<Campaign>, RepositoryError> {
        let ids: Vec<i32> = rows.iter().map(|r| r.id).collect();
        let images = self.images_for(&ids).await?;
        Ok(assemble(rows, images))
    }
}

#[async_trait::async_trait]
impl CampaignStore for CampaignRepository {
    async fn find_by_owner(&self, owner_id: i32) -> Result<Vec<Campaign>, RepositoryError> {
        let query =
            format!("SELECT {CAMPAIGN_COLUMNS} {CAMPAIGN_FROM} WHERE c.user_id = $1 ORDER BY c.id");
        let rows = sqlx::query_as::<_, CampaignRow>(&query)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await?;

        self.with_images(rows).await
    }

    async fn find_all(&self) -> Result<Vec<Campaign>, RepositoryError> {
        let query = format!("SELECT {CAMPAIGN_COLUMNS} {CAMPAIGN_FROM} ORDER BY c.id");
        let rows = sqlx::query_as::<_, CampaignRow>(&query)
            .fetch_all(&self.pool)
            .await?;

        self.with_images(rows).await
    }

    async fn find_by_id(&self, campaign_id: i32) -> Result<Option<Campaign>, RepositoryError> {
        let query = format!("SELECT {CAMPAIGN_COLUMNS} {CAMPAIGN_FROM} WHERE c.id = $1");
        let row = sqlx::query_as::<_, CampaignRow>(&query)
            .bind(campaign_id)
            .fetch_optional(&self.pool)
            .await?;

        match row {
            Some(row) => {
                let images = self.images_for(&[row.id]).await?;
                Ok(Some(row.into_campaign(images)))
            }
            None => Ok(None),
        }
    }
}
