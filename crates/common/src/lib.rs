//! Shared utilities, configuration, and error handling for Crowdfund
//!
//! This crate provides common functionality used across the Crowdfund services:
//! - Configuration management following 12-factor principles
//! - Error types and their HTTP mapping
//! - The `{status, message, data}` response envelope
//! - Validating axum extractors

pub mod config;
pub mod db;
pub mod error;
pub mod extractors;
pub mod response;

pub use config::{Config, StoreProvider};
pub use db::RepositoryError;
pub use error::{Error, Result};
pub use extractors::{empty_string_as_none, ValidatedPath, ValidatedQuery};
pub use response::{ApiResponse, ErrorPayload};
