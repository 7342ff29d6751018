//! In-memory [`ItemRepository`].

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::ports::{ItemRepository, ItemRepositoryError};
use crate::domain::{Item, ItemDraft, STATUS_READY};

/// Item store backed by a `HashMap` behind a read-write lock.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<HashMap<Uuid, Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<std::sync::RwLockReadGuard<'_, HashMap<Uuid, Item>>, ItemRepositoryError> {
        self.items
            .read()
            .map_err(|_| ItemRepositoryError::query("item store lock poisoned"))
    }

    fn write(
        &self,
    ) -> Result<std::sync::RwLockWriteGuard<'_, HashMap<Uuid, Item>>, ItemRepositoryError> {
        self.items
            .write()
            .map_err(|_| ItemRepositoryError::query("item store lock poisoned"))
    }

    fn sorted<F>(&self, owner_id: Uuid, keep: F) -> Result<Vec<Item>, ItemRepositoryError>
    where
        F: Fn(&Item) -> bool,
    {
        let guard = self.read()?;
        let mut items: Vec<Item> = guard
            .values()
            .filter(|item| item.owner_id == owner_id && keep(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| b.intake_at.cmp(&a.intake_at));
        Ok(items)
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn insert(&self, draft: ItemDraft) -> Result<Item, ItemRepositoryError> {
        let now = Utc::now();
        let item = Item {
            id: Uuid::new_v4(),
            name: draft.name,
            category: draft.category,
            description: draft.description,
            intake_at: draft.intake_at,
            photo: None,
            status: draft.status.unwrap_or_else(|| STATUS_READY.to_owned()),
            owner_id: draft.owner_id,
            created_at: now,
            updated_at: now,
        };
        self.write()?.insert(item.id, item.clone());
        Ok(item)
    }

    async fn update(&self, mut item: Item) -> Result<Item, ItemRepositoryError> {
        let mut guard = self.write()?;
        // created_at is immutable once stamped; an update cannot rewrite it.
        if let Some(stored) = guard.get(&item.id) {
            item.created_at = stored.created_at;
        }
        item.updated_at = Utc::now();
        guard.insert(item.id, item.clone());
        Ok(item)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Item>, ItemRepositoryError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ItemRepositoryError> {
        self.write()?.remove(&id);
        Ok(())
    }

    async fn list_for_owner(&self, owner_id: Uuid) -> Result<Vec<Item>, ItemRepositoryError> {
        self.sorted(owner_id, |_| true)
    }

    async fn list_for_owner_with_status(
        &self,
        owner_id: Uuid,
        status: &str,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        self.sorted(owner_id, |item| item.status == status)
    }

    async fn list_for_owner_with_category(
        &self,
        owner_id: Uuid,
        category: &str,
    ) -> Result<Vec<Item>, ItemRepositoryError> {
        self.sorted(owner_id, |item| item.category == category)
    }
}
