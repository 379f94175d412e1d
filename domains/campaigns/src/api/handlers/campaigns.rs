//! Campaign API handlers
//!
//! - GET /api/v1/campaigns?user_id= - List campaigns, optionally for one owner
//! - GET /api/v1/campaigns/{id} - Campaign detail

use axum::{extract::State, Json};
use crowdfund_common::{empty_string_as_none, ApiResponse, Result, ValidatedPath, ValidatedQuery};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::CampaignsState;
use crate::domain::formatter::{
    format_campaign_detail, format_campaigns, CampaignDetail, CampaignSummary,
};
use crate::service::GetCampaignDetailInput;

/// Query parameters for the campaign listing
#[derive(Debug, Deserialize, Validate)]
pub struct ListCampaignsQuery {
    /// Owner to scope the listing to; absent, empty or non-positive lists everything
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub user_id: Option<i32>,
}

/// GET /api/v1/campaigns
pub async fn list_campaigns(
    State(state): State<CampaignsState>,
    ValidatedQuery(query): ValidatedQuery<ListCampaignsQuery>,
) -> Result<Json<ApiResponse<Vec<CampaignSummary>>>> {
    let campaigns = state.campaigns.get_campaigns(query.user_id).await?;

    Ok(Json(ApiResponse::success(
        "List of campaigns",
        format_campaigns(&campaigns),
    )))
}

/// GET /api/v1/campaigns/{id}
pub async fn get_campaign(
    State(state): State<CampaignsState>,
    ValidatedPath(input): ValidatedPath<GetCampaignDetailInput>,
) -> Result<Json<ApiResponse<CampaignDetail>>> {
    let campaign = state.campaigns.get_campaign_by_id(input).await?;

    Ok(Json(ApiResponse::success(
        "Campaign detail",
        format_campaign_detail(&campaign),
    )))
}
