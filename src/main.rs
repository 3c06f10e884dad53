//! Rollcall - 物品与学生的内存 CRUD 服务
//!
//! - HTTP: items / students 接口
//! - WebSocket: /ws/data 连接登记
//! - Middleware: 请求日志 + 固定响应头

use rollcall::config::{load_config, print_config, LogConfig};
use rollcall::infrastructure::http::{AppState, HttpServer};

/// 初始化日志（RUST_LOG 优先于配置）
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},rollcall={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);
    print_config(&config);

    tracing::info!("Starting up...");

    let state = AppState::in_memory(config.items.create_response);
    let server = HttpServer::new(config.server.clone(), state);

    server
        .run_with_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for ctrl-c");
                std::future::pending::<()>().await;
            }
            tracing::info!("Received shutdown signal");
        })
        .await?;

    tracing::info!("Shutting down...");

    Ok(())
}
