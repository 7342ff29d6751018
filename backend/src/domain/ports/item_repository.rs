//! Persistence port for inventory items.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Item, ItemDraft};

/// Persistence errors raised by item repository adapters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ItemRepositoryError {
    /// Query or mutation failed during execution.
    #[error("item repository query failed: {message}")]
    Query { message: String },
}

impl ItemRepositoryError {
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Port for item persistence.
///
/// The adapter owns identity generation and `created_at`/`updated_at`
/// stamping: `insert` assigns a fresh id and both timestamps (and the default
/// status when the draft has none), `update` refreshes `updated_at` and must
/// never change `created_at`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persist a new item and return it with identity and timestamps set.
    async fn insert(&self, draft: ItemDraft) -> Result<Item, ItemRepositoryError>;

    /// Persist changes to an existing item and return the stored row.
    async fn update(&self, item: Item) -> Result<Item, ItemRepositoryError>;

    /// Fetch an item by identifier.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, ItemRepositoryError>;

    /// Remove an item row. Unknown ids are not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), ItemRepositoryError>;

    /// All items owned by `owner_id`, newest intake first.
    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Owned items with a matching status, newest intake first.
    async fn list_for_owner_with_status(
        &self,
        owner_id: Uuid,
        status: &str,
    ) -> Result<Vec<Item>, ItemRepositoryError>;

    /// Owned items with a matching category, newest intake first.
    async fn list_for_owner_with_category(
        &self,
        owner_id: Uuid,
        category: &str,
    ) -> Result<Vec<Item>, ItemRepositoryError>;
}
