//! Store Error - 内存存储错误

use thiserror::Error;

/// 存储层错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    #[error("{resource_type} already exists: {id}")]
    AlreadyExists {
        resource_type: &'static str,
        id: i64,
    },

    #[error("Store lock poisoned: {0}")]
    LockPoisoned(&'static str),
}
