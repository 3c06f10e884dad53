//! Memory Layer - In-Memory State Management
//!
//! 物品、学生与 WebSocket 连接的进程内存储，生命周期与进程相同

mod client_registry;
mod item_store;
mod student_store;

pub use client_registry::InMemoryClientRegistry;
pub use item_store::InMemoryItemStore;
pub use student_store::InMemoryStudentStore;
