//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::StoreError;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 资源已存在
    #[error("{resource_type} already exists: {id}")]
    AlreadyExists {
        resource_type: &'static str,
        id: i64,
    },

    /// 存储错误
    #[error("Store error: {0}")]
    StoreError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建 AlreadyExists 错误
    pub fn already_exists(resource_type: &'static str, id: i64) -> Self {
        Self::AlreadyExists { resource_type, id }
    }
}

impl From<StoreError> for ApplicationError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { resource_type, id } => Self::NotFound { resource_type, id },
            StoreError::AlreadyExists { resource_type, id } => {
                Self::AlreadyExists { resource_type, id }
            }
            StoreError::LockPoisoned(_) => Self::StoreError(err.to_string()),
        }
    }
}
