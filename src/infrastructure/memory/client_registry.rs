//! In-Memory Client Registry Implementation

use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::ports::{ClientRegistryPort, ConnectedClient};

/// 内存 WebSocket 连接登记表
pub struct InMemoryClientRegistry {
    clients: DashMap<Uuid, ConnectedClient>,
}

impl InMemoryClientRegistry {
    pub fn new() -> Self {
        Self {
            clients: DashMap::new(),
        }
    }

    pub fn arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

impl Default for InMemoryClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ClientRegistryPort for InMemoryClientRegistry {
    fn register(&self) -> Uuid {
        let client = ConnectedClient::new();
        let client_id = client.id;
        self.clients.insert(client_id, client);
        tracing::debug!(client_id = %client_id, total = self.clients.len(), "Client registered");
        client_id
    }

    fn unregister(&self, id: Uuid) -> bool {
        let removed = self.clients.remove(&id).is_some();
        if removed {
            tracing::debug!(client_id = %id, total = self.clients.len(), "Client unregistered");
        }
        removed
    }

    fn contains(&self, id: Uuid) -> bool {
        self.clients.contains_key(&id)
    }

    fn len(&self) -> usize {
        self.clients.len()
    }

    fn list_all(&self) -> Vec<ConnectedClient> {
        self.clients.iter().map(|e| e.value().clone()).collect()
    }
}
