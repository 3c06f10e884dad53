//! Item Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ItemStorePort;
use crate::application::queries::{GetItem, GetItemByName};
use crate::domain::{Item, ItemId};

const RESOURCE: &str = "Item";

/// GetItem Handler
pub struct GetItemHandler {
    item_store: Arc<dyn ItemStorePort>,
}

impl GetItemHandler {
    pub fn new(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    pub async fn handle(&self, query: GetItem) -> Result<Item, ApplicationError> {
        self.item_store
            .get(query.item_id)?
            .ok_or_else(|| ApplicationError::not_found(RESOURCE, query.item_id.value()))
    }
}

/// GetItemByName Handler
pub struct GetItemByNameHandler {
    item_store: Arc<dyn ItemStorePort>,
}

impl GetItemByNameHandler {
    pub fn new(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    pub async fn handle(&self, query: GetItemByName) -> Result<Item, ApplicationError> {
        let Some(item_id) = ItemId::new(query.item_id) else {
            return Err(ApplicationError::not_found(RESOURCE, query.item_id));
        };

        self.item_store
            .find_by_id_and_name(item_id, &query.name)?
            .ok_or_else(|| ApplicationError::not_found(RESOURCE, query.item_id))
    }
}
