//! Client Registry Port - WebSocket 连接登记
//!
//! 只登记连接，不做广播

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// 已连接的 WebSocket 客户端
#[derive(Debug, Clone)]
pub struct ConnectedClient {
    pub id: Uuid,
    pub connected_at: DateTime<Utc>,
}

impl ConnectedClient {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            connected_at: Utc::now(),
        }
    }
}

impl Default for ConnectedClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Client Registry Port
pub trait ClientRegistryPort: Send + Sync {
    /// 登记新连接，返回客户端 ID
    fn register(&self) -> Uuid;

    /// 注销连接，返回该连接是否存在
    fn unregister(&self, id: Uuid) -> bool;

    /// 连接是否仍在登记中
    fn contains(&self, id: Uuid) -> bool;

    /// 当前连接数
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// 所有连接
    fn list_all(&self) -> Vec<ConnectedClient>;
}
