//! WebSocket Handler
//!
//! `/ws/data`：登记连接，读取并丢弃入站消息，断开后注销

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::IntoResponse,
};
use futures_util::{Stream, StreamExt};
use std::sync::Arc;

use crate::application::ClientRegistryPort;
use crate::infrastructure::http::state::AppState;

/// 连接结束原因
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Disconnect {
    /// 客户端发送 Close 帧
    ClosedByClient { code: Option<u16> },
    /// 入站流结束（未收到 Close 帧）
    StreamEnded,
    /// 传输错误
    TransportError(String),
}

/// `/ws/data` WebSocket 升级
pub async fn data_websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_data_socket(socket, state))
}

async fn handle_data_socket(socket: WebSocket, state: Arc<AppState>) {
    serve_client(state.client_registry.as_ref(), socket).await;
}

/// 登记连接并持续读取入站消息，连接结束后注销
pub async fn serve_client<S>(registry: &dyn ClientRegistryPort, inbound: S) -> Disconnect
where
    S: Stream<Item = Result<Message, axum::Error>>,
{
    let client_id = registry.register();
    tracing::info!(client_id = %client_id, clients = registry.len(), "WebSocket connected");

    let reason = drain_inbound(inbound).await;
    registry.unregister(client_id);

    match &reason {
        Disconnect::ClosedByClient { code } => {
            tracing::info!(client_id = %client_id, code = ?code, "WebSocket closed by client");
        }
        Disconnect::StreamEnded => {
            tracing::info!(client_id = %client_id, "WebSocket stream ended");
        }
        Disconnect::TransportError(error) => {
            tracing::debug!(client_id = %client_id, error = %error, "WebSocket error");
        }
    }
    tracing::info!(client_id = %client_id, clients = registry.len(), "WebSocket disconnected");

    reason
}

/// 读取入站消息直到连接结束，消息内容不做处理
async fn drain_inbound<S>(inbound: S) -> Disconnect
where
    S: Stream<Item = Result<Message, axum::Error>>,
{
    futures_util::pin_mut!(inbound);

    while let Some(msg) = inbound.next().await {
        match msg {
            Ok(Message::Close(frame)) => {
                return Disconnect::ClosedByClient {
                    code: frame.map(|f| f.code),
                };
            }
            Ok(Message::Text(text)) => {
                tracing::trace!(len = text.len(), "WebSocket text frame ignored");
            }
            Ok(_) => {
                // Ping/Pong 由 axum 处理，Binary 忽略
            }
            Err(e) => return Disconnect::TransportError(e.to_string()),
        }
    }

    Disconnect::StreamEnded
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::ws::CloseFrame;
    use futures_util::stream;

    use crate::infrastructure::memory::InMemoryClientRegistry;

    #[tokio::test]
    async fn test_client_removed_after_close_frame() {
        let registry = InMemoryClientRegistry::new();
        let other = registry.register();

        let frames: Vec<Result<Message, axum::Error>> = vec![
            Ok(Message::Text("hello".to_string())),
            Ok(Message::Binary(vec![1, 2, 3])),
            Ok(Message::Close(Some(CloseFrame {
                code: 1000,
                reason: "bye".into(),
            }))),
        ];

        let reason = serve_client(&registry, stream::iter(frames)).await;

        assert_eq!(reason, Disconnect::ClosedByClient { code: Some(1000) });
        assert_eq!(registry.len(), 1);
        assert!(registry.contains(other));
    }

    #[tokio::test]
    async fn test_client_removed_after_transport_error() {
        let registry = InMemoryClientRegistry::new();

        let frames: Vec<Result<Message, axum::Error>> = vec![
            Ok(Message::Text("hello".to_string())),
            Err(axum::Error::new(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "reset",
            ))),
            Ok(Message::Text("never read".to_string())),
        ];

        let reason = serve_client(&registry, stream::iter(frames)).await;

        assert!(matches!(reason, Disconnect::TransportError(_)));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn test_client_removed_when_stream_ends() {
        let registry = InMemoryClientRegistry::new();

        let inbound = stream::iter(Vec::<Result<Message, axum::Error>>::new());
        let reason = serve_client(&registry, inbound).await;

        assert_eq!(reason, Disconnect::StreamEnded);
        assert!(registry.is_empty());
    }
}
