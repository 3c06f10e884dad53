//! Item Command Handlers

use std::sync::Arc;

use crate::application::commands::CreateItem;
use crate::application::error::ApplicationError;
use crate::application::ports::ItemStorePort;
use crate::domain::{Item, NewItem};

// ============================================================================
// CreateItem
// ============================================================================

/// 创建物品响应
///
/// 同时返回新建记录与创建后的完整列表，由 HTTP 层按配置选择输出形式
#[derive(Debug, Clone)]
pub struct CreateItemResponse {
    pub created: Item,
    pub items: Vec<Item>,
}

/// CreateItem Handler
pub struct CreateItemHandler {
    item_store: Arc<dyn ItemStorePort>,
}

impl CreateItemHandler {
    pub fn new(item_store: Arc<dyn ItemStorePort>) -> Self {
        Self { item_store }
    }

    pub async fn handle(&self, command: CreateItem) -> Result<CreateItemResponse, ApplicationError> {
        let (created, items) = self.item_store.append(NewItem {
            name: command.name,
            age: command.age,
        })?;

        tracing::info!(
            item_id = %created.id,
            name = %created.name,
            "Item created"
        );

        Ok(CreateItemResponse { created, items })
    }
}
