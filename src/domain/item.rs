//! Item Context - 物品记录

use serde::{Deserialize, Serialize};

/// 物品唯一标识
///
/// 取值从 1 开始，等于创建时的 `已有物品数 + 1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(i64);

impl ItemId {
    /// 创建物品 ID，非正数返回 None
    pub fn new(raw: i64) -> Option<Self> {
        if raw > 0 {
            Some(Self(raw))
        } else {
            None
        }
    }

    /// 第 `position` 个（从 0 开始）物品对应的 ID
    pub fn from_position(position: usize) -> Self {
        Self(position as i64 + 1)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 物品记录
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub age: i64,
}

/// 待创建的物品（请求体）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewItem {
    pub name: String,
    pub age: i64,
}

impl NewItem {
    pub fn into_item(self, id: ItemId) -> Item {
        Item {
            id,
            name: self.name,
            age: self.age,
        }
    }
}
