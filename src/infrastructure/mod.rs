//! Infrastructure Layer - 基础设施层
//!
//! - http: Axum 路由、处理器、中间件
//! - memory: 进程内存储

pub mod http;
pub mod memory;
