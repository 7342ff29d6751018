//! Read-only port over persisted session records.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::AuthToken;

/// Persistence errors raised by session store adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionStoreError {
    /// Query failed during execution.
    #[error("session store query failed: {message}")]
    Query { message: String },
}

impl SessionStoreError {
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port consulted by the auth gate to confirm a token is still live.
///
/// Absence means "logged out or never issued", independent of whether the
/// token itself decodes successfully. This indirection is what lets a logout
/// invalidate a still-cryptographically-valid token immediately.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Find the active session record matching this subject and exact token.
    async fn find_active_token(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<AuthToken>, SessionStoreError>;
}
