//! HTTP Error Handling
//!
//! 领域错误（未找到 / 已存在）沿用 HTTP 200 + `{"message": ...}` 的返回方式，
//! 参数校验失败返回 422 + `{"detail": [...]}`

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use super::dto::MessageResponse;
use crate::application::ApplicationError;

/// 单条校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl ValidationDetail {
    pub fn new(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.into(),
        }
    }
}

/// 校验错误响应格式
#[derive(Debug, Serialize)]
pub struct ValidationErrorResponse {
    pub detail: Vec<ValidationDetail>,
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Conflict(String),
    Validation(Vec<ValidationDetail>),
    Internal(String),
}

impl ApiError {
    /// 单字段校验错误
    pub fn validation(loc: &[&str], msg: impl Into<String>, kind: impl Into<String>) -> Self {
        ApiError::Validation(vec![ValidationDetail::new(loc, msg, kind)])
    }

    /// 路径参数解析失败
    pub fn invalid_path(name: &str, rejection: PathRejection) -> Self {
        Self::validation(&["path", name], rejection.body_text(), "int_parsing")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::NotFound(msg) => {
                tracing::warn!(error = %msg, "Resource not found");
                (StatusCode::OK, Json(MessageResponse::new(msg))).into_response()
            }
            ApiError::Conflict(msg) => {
                tracing::warn!(error = %msg, "Resource conflict");
                (StatusCode::OK, Json(MessageResponse::new(msg))).into_response()
            }
            ApiError::Validation(detail) => {
                tracing::warn!(errors = detail.len(), "Request validation failed");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    Json(ValidationErrorResponse { detail }),
                )
                    .into_response()
            }
            ApiError::Internal(msg) => {
                tracing::error!(error = %msg, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(MessageResponse::new(msg)),
                )
                    .into_response()
            }
        }
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { resource_type, .. } => {
                ApiError::NotFound(format!("{} not found", resource_type))
            }
            ApplicationError::AlreadyExists { resource_type, .. } => {
                ApiError::Conflict(format!("{} ID already exists", resource_type))
            }
            ApplicationError::StoreError(msg) => ApiError::Internal(msg),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        let kind = match &rejection {
            JsonRejection::JsonDataError(_) => "value_error",
            JsonRejection::JsonSyntaxError(_) => "json_invalid",
            JsonRejection::MissingJsonContentType(_) => "content_type",
            _ => "body_error",
        };
        Self::validation(&["body"], rejection.body_text(), kind)
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::validation(&["query"], rejection.body_text(), "missing")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_not_found_is_message_payload_with_ok_status() {
        let err: ApiError = ApplicationError::not_found("Student", 99).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Student not found"})
        );
    }

    #[tokio::test]
    async fn test_already_exists_message() {
        let err: ApiError = ApplicationError::already_exists("Student", 1).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"message": "Student ID already exists"})
        );
    }

    #[tokio::test]
    async fn test_validation_error_shape() {
        let err = ApiError::validation(
            &["path", "item_id"],
            "Input should be greater than 0",
            "greater_than",
        );
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(
            body_json(response).await,
            serde_json::json!({"detail": [{
                "loc": ["path", "item_id"],
                "msg": "Input should be greater than 0",
                "type": "greater_than"
            }]})
        );
    }

    #[tokio::test]
    async fn test_store_error_is_internal() {
        let err: ApiError = ApplicationError::StoreError("poisoned".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
