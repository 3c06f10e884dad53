//! Item Store Port - 物品存储
//!
//! 按创建顺序保存物品，具体实现在 infrastructure/memory 层

use crate::domain::{Item, ItemId, NewItem};

use super::StoreError;

/// Item Store Port
pub trait ItemStorePort: Send + Sync {
    /// 追加物品，ID 为追加前的物品数 + 1
    ///
    /// 同时返回追加完成时的完整列表，二者取自同一把锁
    fn append(&self, item: NewItem) -> Result<(Item, Vec<Item>), StoreError>;

    /// 按 ID 获取物品
    fn get(&self, id: ItemId) -> Result<Option<Item>, StoreError>;

    /// 线性查找 ID 与名称同时匹配的第一个物品
    fn find_by_id_and_name(&self, id: ItemId, name: &str) -> Result<Option<Item>, StoreError>;

    /// 按创建顺序列出所有物品
    fn list(&self) -> Result<Vec<Item>, StoreError>;

    /// 物品数量
    fn len(&self) -> Result<usize, StoreError>;
}
