//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Which campaign store backs the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreProvider {
    Postgres,
    Mock,
}

impl std::str::FromStr for StoreProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" => Ok(Self::Postgres),
            "mock" => Ok(Self::Mock),
            other => Err(anyhow::anyhow!(
                "Unknown campaign store: {}. Supported stores: postgres, mock",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Campaign store backend
    pub store: StoreProvider,

    /// Database connection URL, required for the postgres store
    pub database_url: Option<String>,
    pub database_max_connections: u32,
    pub database_acquire_timeout_secs: u64,

    /// JSON file of campaigns to preload into the mock store
    pub campaign_seed_file: Option<String>,

    /// Comma-separated list of allowed CORS origins
    pub cors_allowed_origins: Option<String>,

    /// Runtime configuration
    pub rust_log: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let store = match lookup("CAMPAIGN_STORE") {
            Some(value) => value.parse()?,
            None => StoreProvider::Postgres,
        };

        let database_url = lookup("DATABASE_URL");
        if store == StoreProvider::Postgres && database_url.is_none() {
            return Err(anyhow::anyhow!(
                "DATABASE_URL is required when CAMPAIGN_STORE=postgres"
            ));
        }

        let config = Self {
            store,
            database_url,
            database_max_connections: lookup("DATABASE_MAX_CONNECTIONS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            database_acquire_timeout_secs: lookup("DATABASE_ACQUIRE_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(5),
            campaign_seed_file: lookup("CAMPAIGN_SEED_FILE"),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS"),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "crowdfund=debug".to_string()),
            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(3000),
        };

        Ok(config)
    }

    pub fn database_acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.database_acquire_timeout_secs)
    }
}
