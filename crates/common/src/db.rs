//! Shared database types for Crowdfund
//!
//! This module provides the error type returned by every store adapter.

use crate::error::Error;
use thiserror::Error;

/// Store-level error types
#[derive(Error, Debug)]
pub enum RepositoryError {
    #[error("Record already exists: {0}")]
    AlreadyExists(String),

    #[error("Database connection error: {0}")]
    Connection(#[from] sqlx::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

impl From<RepositoryError> for Error {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::AlreadyExists(msg) => Error::Conflict(msg),
            RepositoryError::Connection(e) => Error::Database(e),
            // Stored rows that break invariants are a server-side problem
            RepositoryError::InvalidData(msg) => Error::Internal(msg),
        }
    }
}
