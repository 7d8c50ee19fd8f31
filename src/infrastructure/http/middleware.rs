//! HTTP Middleware
//!
//! HTTP 状态码错误日志中间件、请求超时错误处理

use axum::{extract::Request, middleware::Next, response::Response, BoxError};
use std::time::Instant;
use tower::timeout::error::Elapsed;

use super::error::ApiError;

/// 将超时层的错误转换为 JSON 错误信封
///
/// 与 `HandleErrorLayer` 配合使用：超时返回 408，其余错误返回 500
pub async fn handle_timeout_error(err: BoxError) -> ApiError {
    if err.is::<Elapsed>() {
        ApiError::RequestTimeout
    } else {
        ApiError::Internal(format!("unhandled middleware error: {}", err))
    }
}

/// HTTP 状态码错误日志中间件
///
/// 4xx 记录 warn，5xx 记录 error；内部错误的原因在 ApiError::into_response() 中记录
pub async fn error_logging_middleware(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = started.elapsed().as_millis() as u64;

    if status.is_server_error() {
        tracing::error!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP server error"
        );
    } else if status.is_client_error() {
        tracing::warn!(
            method = %method,
            uri = %uri,
            status = status.as_u16(),
            elapsed_ms,
            "HTTP client error"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        error_handling::HandleErrorLayer,
        http::{Request as HttpRequest, StatusCode},
        response::IntoResponse,
        routing::get,
        Router,
    };
    use std::time::Duration;
    use tower::{util::ServiceExt, ServiceBuilder};

    fn create_test_router() -> Router {
        Router::new()
            .route("/ok", get(|| async { "OK" }))
            .route("/conflict", get(|| async { StatusCode::CONFLICT }))
            .route("/error", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .layer(axum::middleware::from_fn(error_logging_middleware))
    }

    async fn status_of(uri: &str) -> StatusCode {
        let request = HttpRequest::builder().uri(uri).body(Body::empty()).unwrap();
        create_test_router().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_middleware_passes_responses_through() {
        assert_eq!(status_of("/ok").await, StatusCode::OK);
        assert_eq!(status_of("/conflict").await, StatusCode::CONFLICT);
        assert_eq!(
            status_of("/error").await,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_timed_out_request_gets_error_envelope() {
        let app = Router::new()
            .route(
                "/slow",
                get(|| async {
                    tokio::time::sleep(Duration::from_millis(100)).await;
                    "done"
                }),
            )
            .layer(
                ServiceBuilder::new()
                    .layer(HandleErrorLayer::new(handle_timeout_error))
                    .timeout(Duration::from_millis(10)),
            );

        let request = HttpRequest::builder().uri("/slow").body(Body::empty()).unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::REQUEST_TIMEOUT);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            body,
            serde_json::json!({ "error": "the request took too long to process" })
        );
    }

    #[tokio::test]
    async fn test_other_layer_errors_are_internal() {
        let err: BoxError = "connection reset".into();
        let response = handle_timeout_error(err).await.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
