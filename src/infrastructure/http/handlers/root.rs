//! Root Handler

use axum::Json;

use crate::infrastructure::http::dto::MessageResponse;

/// `GET /`
pub async fn read_root() -> Json<MessageResponse> {
    Json(MessageResponse::new("Hello World"))
}
