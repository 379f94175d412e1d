//! Route definitions for Campaigns domain API

use axum::{routing::get, Router};

use super::handlers::campaigns;
use super::middleware::CampaignsState;

/// Create all Campaigns domain API routes
pub fn routes() -> Router<CampaignsState> {
    Router::new()
        .route("/api/v1/campaigns", get(campaigns::list_campaigns))
        .route("/api/v1/campaigns/{id}", get(campaigns::get_campaign))
}
