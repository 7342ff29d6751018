//! Use-case port for inventory orchestration, consumed by HTTP handlers.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{Item, ItemChanges, ItemDraft};

use super::{FileStoreError, FileUpload, ItemRepositoryError};

/// Failures surfaced by inventory operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InventoryError {
    /// The item repository failed.
    #[error("inventory persistence failed: {message}")]
    Repository { message: String },
    /// Storing a photo failed. Only store failures surface here; delete
    /// failures are swallowed by the file store.
    #[error("photo storage failed: {message}")]
    Storage { message: String },
}

impl From<ItemRepositoryError> for InventoryError {
    fn from(err: ItemRepositoryError) -> Self {
        Self::Repository {
            message: err.to_string(),
        }
    }
}

impl From<FileStoreError> for InventoryError {
    fn from(err: FileStoreError) -> Self {
        Self::Storage {
            message: err.to_string(),
        }
    }
}

/// Optional list filters; a status filter takes precedence when both are set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFilter {
    pub status: Option<String>,
    pub category: Option<String>,
}

/// Port for the item use-cases.
///
/// Not-found is reported as an absent value (`None`), never an error; the
/// inbound adapter decides what that means for its protocol.
#[async_trait]
pub trait InventoryService: Send + Sync {
    /// Items owned by `owner_id`, filtered and ordered newest intake first.
    async fn list(&self, owner_id: Uuid, filter: &ListFilter) -> Result<Vec<Item>, InventoryError>;

    /// Fetch one item.
    async fn get(&self, id: Uuid) -> Result<Option<Item>, InventoryError>;

    /// Persist a new item, then store and attach the photo if one was
    /// supplied.
    async fn create(
        &self,
        draft: ItemDraft,
        photo: Option<FileUpload>,
    ) -> Result<Item, InventoryError>;

    /// Overwrite an item's text fields and optionally replace its photo.
    async fn update(
        &self,
        id: Uuid,
        changes: ItemChanges,
        photo: Option<FileUpload>,
    ) -> Result<Option<Item>, InventoryError>;

    /// Store a status string verbatim.
    async fn update_status(&self, id: Uuid, status: &str)
        -> Result<Option<Item>, InventoryError>;

    /// Remove an item and its photo. Unknown ids are a no-op.
    async fn delete(&self, id: Uuid) -> Result<(), InventoryError>;
}
