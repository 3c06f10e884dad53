//! HTTP Middleware
//!
//! 请求日志中间件

use axum::{
    extract::Request,
    http::{HeaderName, HeaderValue},
    middleware::Next,
    response::Response,
};

/// 每个响应附带的固定响应头
pub const CUSTOM_HEADER_NAME: &str = "x-custom-header";
pub const CUSTOM_HEADER_VALUE: &str = "CustomValue";

/// 请求日志中间件
///
/// 分发前记录 method + URI，分发后记录状态码，并写入 `X-Custom-Header`
pub async fn request_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    tracing::info!(method = %method, uri = %uri, "Request");

    let mut response = next.run(request).await;

    tracing::info!(
        method = %method,
        uri = %uri,
        status = %response.status().as_u16(),
        "Response"
    );

    response
        .headers_mut()
        .insert(
            HeaderName::from_static(CUSTOM_HEADER_NAME),
            HeaderValue::from_static(CUSTOM_HEADER_VALUE),
        );

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request as HttpRequest, StatusCode},
        routing::get,
        Router,
    };
    use tower::util::ServiceExt;

    async fn ok_handler() -> &'static str {
        "OK"
    }

    async fn error_handler() -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(ok_handler))
            .route("/error", get(error_handler))
            .layer(axum::middleware::from_fn(request_logging_middleware))
    }

    #[tokio::test]
    async fn test_header_added_to_ok_response() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/ok")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get("x-custom-header").unwrap(),
            "CustomValue"
        );
    }

    #[tokio::test]
    async fn test_header_added_to_error_response() {
        let app = create_test_router();
        let request = HttpRequest::builder()
            .uri("/error")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.headers().get("x-custom-header").unwrap(),
            "CustomValue"
        );
    }
}
