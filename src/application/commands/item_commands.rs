//! Item Commands

/// 创建物品命令
#[derive(Debug, Clone)]
pub struct CreateItem {
    pub name: String,
    pub age: i64,
}
