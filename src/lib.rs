//! Rollcall - 物品与学生的内存 CRUD 服务
//!
//! 领域层 (domain/):
//! - Item: 服务端分配 ID 的物品记录
//! - Student: 调用方指定 ID 的学生记录
//!
//! 应用层 (application/):
//! - Ports: ItemStore, StudentStore, ClientRegistry
//! - Commands / Queries: CQRS 处理器
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API + WebSocket + 请求日志中间件
//! - Memory: 进程内存储实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
