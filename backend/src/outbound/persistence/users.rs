//! In-memory [`UserDirectory`].

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::ports::{UserDirectory, UserDirectoryError};
use crate::domain::User;

/// User records behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryUserDirectory {
    users: RwLock<HashMap<Uuid, User>>,
}

impl InMemoryUserDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a user record.
    pub fn insert(&self, user: User) -> Result<(), UserDirectoryError> {
        let mut guard = self
            .users
            .write()
            .map_err(|_| UserDirectoryError::query("user directory lock poisoned"))?;
        guard.insert(user.id, user);
        Ok(())
    }
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, UserDirectoryError> {
        let guard = self
            .users
            .read()
            .map_err(|_| UserDirectoryError::query("user directory lock poisoned"))?;
        Ok(guard.get(&id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolves_registered_users_only() {
        let directory = InMemoryUserDirectory::new();
        let user = User {
            id: Uuid::new_v4(),
            name: "Admin".into(),
            email: "admin@example.com".into(),
        };
        directory.insert(user.clone()).expect("insert");

        let found = directory.find_by_id(user.id).await.expect("lookup");
        assert_eq!(found.as_ref().map(|u| u.email.as_str()), Some("admin@example.com"));
        assert!(directory
            .find_by_id(Uuid::new_v4())
            .await
            .expect("lookup")
            .is_none());
    }
}
