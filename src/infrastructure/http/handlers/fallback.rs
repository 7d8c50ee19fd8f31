//! Fallback Handlers - 未匹配路由

use axum::http::Method;

use crate::infrastructure::http::error::ApiError;

/// 未匹配任何路径
pub async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// 路径存在但方法不受支持
pub async fn method_not_allowed(method: Method) -> ApiError {
    ApiError::MethodNotAllowed(method)
}
