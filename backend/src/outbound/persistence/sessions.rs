//! In-memory [`SessionStore`].

use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ports::{SessionStore, SessionStoreError};
use crate::domain::AuthToken;

/// Session records behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    tokens: RwLock<Vec<AuthToken>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a freshly issued token as an active session.
    pub fn insert(&self, user_id: Uuid, token: impl Into<String>) -> Result<(), SessionStoreError> {
        let mut guard = self
            .tokens
            .write()
            .map_err(|_| SessionStoreError::query("session store lock poisoned"))?;
        guard.push(AuthToken {
            user_id,
            token: token.into(),
            created_at: Utc::now(),
        });
        Ok(())
    }

    /// Drop every session for a user, ending their logins.
    pub fn remove_for_user(&self, user_id: Uuid) -> Result<(), SessionStoreError> {
        let mut guard = self
            .tokens
            .write()
            .map_err(|_| SessionStoreError::query("session store lock poisoned"))?;
        guard.retain(|session| session.user_id != user_id);
        Ok(())
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn find_active_token(
        &self,
        user_id: Uuid,
        token: &str,
    ) -> Result<Option<AuthToken>, SessionStoreError> {
        let guard = self
            .tokens
            .read()
            .map_err(|_| SessionStoreError::query("session store lock poisoned"))?;
        Ok(guard
            .iter()
            .find(|session| session.user_id == user_id && session.token == token)
            .cloned())
    }
}
