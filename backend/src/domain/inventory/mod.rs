//! Inventory orchestration: couples the item repository with the file store.
//!
//! The two stores are kept consistent under partial failure by ordering:
//! an item row always exists before its photo is written, a photo reference
//! is only persisted after the file write succeeded, and a photo file is
//! removed before its item row. Store failures surface to the caller; delete
//! failures do not (a stale or already-missing file must never block a
//! metadata change). Concurrent edits to the same item can interleave; there
//! is no locking or versioning.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;
use uuid::Uuid;

use super::ports::{
    FileStore, FileUpload, InventoryError, InventoryService, ItemRepository, ListFilter,
};
use super::{Item, ItemChanges, ItemDraft};


/// Concrete implementation of [`InventoryService`].
pub struct InventoryServiceImpl<R, F> {
    items: Arc<R>,
    files: Arc<F>,
}

impl<R, F> InventoryServiceImpl<R, F>
where
    R: ItemRepository,
    F: FileStore,
{
    /// Build the service from its two ports.
    pub fn new(items: Arc<R>, files: Arc<F>) -> Self {
        Self { items, files }
    }

    /// Delete a stored photo, logging instead of propagating failure.
    async fn delete_photo_best_effort(&self, item_id: Uuid, filename: &str) {
        if !self.files.delete(filename).await {
            warn!(%item_id, filename, "stale photo could not be removed");
        }
    }
}

#[async_trait]
impl<R, F> InventoryService for InventoryServiceImpl<R, F>
where
    R: ItemRepository,
    F: FileStore,
{
    async fn list(&self, owner_id: Uuid, filter: &ListFilter) -> Result<Vec<Item>, InventoryError> {
        let items = match (&filter.status, &filter.category) {
            (Some(status), _) => self.items.list_for_owner_with_status(owner_id, status).await?,
            (None, Some(category)) => {
                self.items
                    .list_for_owner_with_category(owner_id, category)
                    .await?
            }
            (None, None) => self.items.list_for_owner(owner_id).await?,
        };
        Ok(items)
    }

    async fn get(&self, id: Uuid) -> Result<Option<Item>, InventoryError> {
        Ok(self.items.find_by_id(id).await?)
    }

    async fn create(
        &self,
        draft: ItemDraft,
        photo: Option<FileUpload>,
    ) -> Result<Item, InventoryError> {
        // Insert first: the stored filename is derived from the generated id.
        let mut item = self.items.insert(draft).await?;

        match photo {
            Some(upload) if !upload.is_empty() => {
                // A store failure leaves the row in place without a photo;
                // the caller needs to hear about the failed upload.
                let filename = self.files.store(&upload, item.id).await?;
                item.photo = Some(filename);
                item = self.items.update(item).await?;
                Ok(item)
            }
            _ => Ok(item),
        }
    }

    async fn update(
        &self,
        id: Uuid,
        changes: ItemChanges,
        photo: Option<FileUpload>,
    ) -> Result<Option<Item>, InventoryError> {
        let Some(mut item) = self.items.find_by_id(id).await? else {
            return Ok(None);
        };

        item.name = changes.name;
        item.category = changes.category;
        item.description = changes.description;
        item.intake_at = changes.intake_at;

        if let Some(upload) = photo.filter(|upload| !upload.is_empty()) {
            if let Some(old) = item.photo.take() {
                self.delete_photo_best_effort(item.id, &old).await;
            }
            let filename = self.files.store(&upload, item.id).await?;
            item.photo = Some(filename);
        }

        let item = self.items.update(item).await?;
        Ok(Some(item))
    }

    async fn update_status(
        &self,
        id: Uuid,
        status: &str,
    ) -> Result<Option<Item>, InventoryError> {
        let Some(mut item) = self.items.find_by_id(id).await? else {
            return Ok(None);
        };
        // Stored verbatim: the READY/SOLD pair is convention, not a contract.
        item.status = status.to_owned();
        let item = self.items.update(item).await?;
        Ok(Some(item))
    }

    async fn delete(&self, id: Uuid) -> Result<(), InventoryError> {
        let Some(item) = self.items.find_by_id(id).await? else {
            return Ok(());
        };
        if let Some(photo) = &item.photo {
            self.delete_photo_best_effort(item.id, photo).await;
        }
        self.items.delete_by_id(item.id).await?;
        Ok(())
    }
}
