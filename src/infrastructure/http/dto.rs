//! Data Transfer Objects

use serde::{Deserialize, Serialize};

use crate::domain::Item;

/// 消息响应 `{"message": ...}`
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

// ============================================================================
// Item DTOs
// ============================================================================

/// 新建物品回显
#[derive(Debug, Serialize)]
pub struct CreatedItemResponse {
    pub item: Item,
    pub name: String,
    pub age: i64,
}

impl From<Item> for CreatedItemResponse {
    fn from(item: Item) -> Self {
        Self {
            name: item.name.clone(),
            age: item.age,
            item,
        }
    }
}

/// `POST /items` 响应
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum CreateItemResponseBody {
    Collection(Vec<Item>),
    Created(CreatedItemResponse),
}

/// `GET /get-by-name/{item_id}` 查询参数
#[derive(Debug, Deserialize)]
pub struct ItemNameQuery {
    pub name: String,
}
