//! Application Ports - 出站端口定义
//!
//! 定义应用层与基础设施层之间的存储抽象

mod client_registry;
mod item_store;
mod store_error;
mod student_store;

pub use client_registry::{ClientRegistryPort, ConnectedClient};
pub use item_store::ItemStorePort;
pub use store_error::StoreError;
pub use student_store::StudentStorePort;
