//! Item Queries

use crate::domain::ItemId;

/// 按 ID 获取物品
#[derive(Debug, Clone)]
pub struct GetItem {
    pub item_id: ItemId,
}

/// 按 ID + 名称获取物品
///
/// `item_id` 不做正数校验，非正数直接视为未找到
#[derive(Debug, Clone)]
pub struct GetItemByName {
    pub item_id: i64,
    pub name: String,
}
