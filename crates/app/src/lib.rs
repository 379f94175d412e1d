//! Crowdfund application composition root
//!
//! Selects the campaign store and composes domain routers into a single application.

use std::sync::Arc;

use axum::{
    http::{header::CONTENT_TYPE, HeaderValue, Method},
    Router,
};
use crowdfund_campaigns::{
    Campaign, CampaignRepository, CampaignStore, CampaignsState, MockCampaignStore,
};
use crowdfund_common::{Config, StoreProvider};
use sqlx::postgres::PgPoolOptions;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    limit::RequestBodyLimitLayer,
};

/// Maximum accepted request body size (1MB)
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the campaign store selected by configuration
pub async fn create_store(config: &Config) -> Result<Arc<dyn CampaignStore>, anyhow::Error> {
    match config.store {
        StoreProvider::Postgres => {
            let database_url = config
                .database_url
                .as_deref()
                .ok_or_else(|| anyhow::anyhow!("DATABASE_URL is required for the postgres store"))?;

            let pool = PgPoolOptions::new()
                .max_connections(config.database_max_connections)
                .acquire_timeout(config.database_acquire_timeout())
                .connect(database_url)
                .await
                .map_err(|e| anyhow::anyhow!("Database connection failed: {}", e))?;

            tracing::info!("Database connection established");
            Ok(Arc::new(CampaignRepository::new(pool)))
        }
        StoreProvider::Mock => {
            let store = match config.campaign_seed_file.as_deref() {
                Some(path) => {
                    let campaigns = load_seed(path).await?;
                    tracing::info!(
                        path = %path,
                        count = campaigns.len(),
                        "Seeding mock campaign store"
                    );
                    MockCampaignStore::with_campaigns(campaigns)
                        .map_err(|e| anyhow::anyhow!("Invalid campaign seed {}: {}", path, e))?
                }
                None => {
                    tracing::info!("Creating empty mock campaign store");
                    MockCampaignStore::new()
                }
            };
            Ok(Arc::new(store))
        }
    }
}

/// Parse a JSON array of campaigns for the mock store
pub fn parse_seed(json: &str) -> Result<Vec<Campaign>, anyhow::Error> {
    serde_json::from_str(json).map_err(|e| anyhow::anyhow!("Invalid campaign seed: {}", e))
}

async fn load_seed(path: &str) -> Result<Vec<Campaign>, anyhow::Error> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to read campaign seed {}: {}", path, e))?;
    parse_seed(&json)
}

/// Compose all routes around an existing store
pub fn build_router(store: Arc<dyn CampaignStore>) -> Router {
    Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "Crowdfund API v0.0.1-SNAPSHOT" }),
        )
        .merge(crowdfund_campaigns::routes().with_state(CampaignsState::new(store)))
}

/// Create the main application router from configuration
pub async fn create_app(config: &Config) -> Result<Router, anyhow::Error> {
    let store = create_store(config).await?;
    Ok(build_router(store))
}

/// CORS layer for a comma-separated list of allowed origins.
///
/// Origins that are not valid header values are skipped.
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::OPTIONS])
        .allow_headers([CONTENT_TYPE])
}

pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
