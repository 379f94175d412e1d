//! Response envelope shared by every HTTP endpoint
//!
//! Bodies always serialize as `{"status": "success"|"error", "message", "data"}`.

use serde::Serialize;

/// Payload carried in `data` when `status` is `error`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorPayload {
    pub code: String,
    pub errors: Vec<String>,
}

/// Discriminated response envelope
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ApiResponse<T> {
    Success { message: String, data: T },
    Error { message: String, data: ErrorPayload },
}

impl<T> ApiResponse<T> {
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self::Success {
            message: message.into(),
            data,
        }
    }

    pub fn error(message: impl Into<String>, payload: ErrorPayload) -> Self {
        Self::Error {
            message: message.into(),
            data: payload,
        }
    }
}
