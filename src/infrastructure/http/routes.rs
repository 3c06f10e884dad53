//! HTTP Routes
//!
//! API Endpoints:
//! - /                          GET     欢迎消息
//! - /items                     POST    创建物品
//! - /items/{item_id}           GET     按 ID 获取物品（ID > 0）
//! - /get-by-name/{item_id}     GET     按 ID + 名称获取物品（?name=）
//! - /students/{student_id}     POST    创建学生
//! - /students/{student_id}     PUT     部分更新学生
//! - /students/{student_id}     DELETE  删除学生
//! - /ws/data                   WS      数据 WebSocket（仅登记连接）
//! - /auth/...                  *       外部认证路由（可选）

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes(auth_router: Option<Router<Arc<AppState>>>) -> Router<Arc<AppState>> {
    let router = Router::new()
        .route("/", get(handlers::read_root))
        .merge(item_routes())
        .merge(student_routes())
        .route("/ws/data", get(handlers::data_websocket_handler));

    match auth_router {
        Some(auth) => router.nest("/auth", auth),
        None => router,
    }
}

/// Item 路由
fn item_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/items", post(handlers::create_item))
        .route("/items/:item_id", get(handlers::get_item))
        .route("/get-by-name/:item_id", get(handlers::get_item_by_name))
}

/// Student 路由
fn student_routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/students/:student_id",
        post(handlers::create_student)
            .put(handlers::update_student)
            .delete(handlers::delete_student),
    )
}
