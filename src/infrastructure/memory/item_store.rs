//! In-Memory Item Store Implementation

use std::sync::{Arc, RwLock};

use crate::application::ports::{ItemStorePort, StoreError};
use crate::domain::{Item, ItemId, NewItem};

/// 内存物品存储
///
/// ID 分配与追加在同一把写锁内完成
pub struct InMemoryItemStore {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemStore {
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStorePort for InMemoryItemStore {
    fn append(&self, item: NewItem) -> Result<(Item, Vec<Item>), StoreError> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::LockPoisoned("items"))?;

        let item = item.into_item(ItemId::from_position(items.len()));
        items.push(item.clone());
        tracing::debug!(item_id = %item.id, total = items.len(), "Item appended");
        Ok((item, items.clone()))
    }

    fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::LockPoisoned("items"))?;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    fn find_by_id_and_name(&self, id: ItemId, name: &str) -> Result<Option<Item>, StoreError> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::LockPoisoned("items"))?;
        Ok(items
            .iter()
            .find(|item| item.id == id && item.name == name)
            .cloned())
    }

    fn list(&self) -> Result<Vec<Item>, StoreError> {
        self.items
            .read()
            .map(|items| items.clone())
            .map_err(|_| StoreError::LockPoisoned("items"))
    }

    fn len(&self) -> Result<usize, StoreError> {
        self.items
            .read()
            .map(|items| items.len())
            .map_err(|_| StoreError::LockPoisoned("items"))
    }
}
