//! The JSON envelope every endpoint answers with.
//!
//! ```json
//! {"status": "success", "message": "items fetched", "data": [...]}
//! ```
//!
//! `status` is `"success"`, `"fail"` (caller mistake) or `"error"` (server
//! fault). `data` is always present and `null` on failure.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Uniform response envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: String,
    pub message: String,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// A successful outcome carrying a payload.
    pub fn success(message: impl Into<String>, data: T) -> Self {
        Self {
            status: "success".to_owned(),
            message: message.into(),
            data: Some(data),
        }
    }

    /// The request was understood but refused; the caller can correct it.
    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            status: "fail".to_owned(),
            message: message.into(),
            data: None,
        }
    }

    /// The server failed; retrying may help, fixing the request will not.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_owned(),
            message: message.into(),
            data: None,
        }
    }
}
