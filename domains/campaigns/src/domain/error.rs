//! Campaign retrieval errors

use crowdfund_common::{Error, RepositoryError};
use thiserror::Error;

/// Errors surfaced by campaign retrieval.
///
/// The two variants stay distinct so the boundary can answer 404 and 500
/// respectively.
#[derive(Debug, Error)]
pub enum CampaignError {
    #[error("Campaign {0} not found")]
    NotFound(i32),

    #[error("Failed to retrieve campaigns: {0}")]
    RetrievalFailed(#[from] RepositoryError),
}

impl From<CampaignError> for Error {
    fn from(err: CampaignError) -> Self {
        match err {
            CampaignError::NotFound(id) => Error::NotFound(format!("Campaign {} not found", id)),
            CampaignError::RetrievalFailed(e) => e.into(),
        }
    }
}
