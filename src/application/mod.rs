//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 存储端口定义（ItemStore、StudentStore、ClientRegistry）
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    // Item commands
    CreateItem,
    // Student commands
    CreateStudent,
    DeleteStudent,
    UpdateStudent,
    // Handlers
    handlers::{
        CreateItemHandler, CreateItemResponse, CreateStudentHandler, DeleteStudentHandler,
        UpdateStudentHandler,
    },
};

pub use error::ApplicationError;

pub use ports::{
    ClientRegistryPort, ConnectedClient, ItemStorePort, StoreError, StudentStorePort,
};

pub use queries::{
    GetItem,
    GetItemByName,
    handlers::{GetItemByNameHandler, GetItemHandler},
};
