//! HTTP Server
//!
//! Axum HTTP 服务器启动和配置

use std::sync::Arc;

use axum::middleware;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use super::middleware::request_logging_middleware;
use super::routes::create_routes;
use super::state::AppState;
use crate::config::ServerConfig;

/// 构建带中间件和状态的 Router
///
/// `auth_router` 为外部提供的认证路由，挂载在 `/auth` 下
pub fn build_router(state: Arc<AppState>, auth_router: Option<Router<Arc<AppState>>>) -> Router {
    // CORS 配置 - 镜像请求来源并允许携带凭证
    let cors = CorsLayer::very_permissive();

    // 日志中间件在最外层，CORS 预检响应同样经过
    create_routes(auth_router)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state)
}

/// HTTP 服务器
pub struct HttpServer {
    config: ServerConfig,
    state: Arc<AppState>,
    auth_router: Option<Router<Arc<AppState>>>,
}

impl HttpServer {
    /// 创建新的 HTTP 服务器
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
            auth_router: None,
        }
    }

    /// 挂载外部认证路由到 `/auth`
    pub fn with_auth_router(mut self, auth_router: Router<Arc<AppState>>) -> Self {
        self.auth_router = Some(auth_router);
        self
    }

    /// 启动服务器（带优雅关闭）
    pub async fn run_with_shutdown<F>(self, shutdown_signal: F) -> Result<(), std::io::Error>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let router = build_router(self.state, self.auth_router);
        let addr = self.config.addr();

        info!("Starting HTTP server on {} (with graceful shutdown)", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal)
            .await?;

        Ok(())
    }
}
