//! HTTP Error Handling
//!
//! 错误响应与成功响应共用同一信封格式：`{"error": ...}`

use axum::{
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::application::ApplicationError;
use crate::domain::ValidationErrors;
use crate::infrastructure::http::dto::Envelope;

/// 错误信封内容：普通信息或字段错误表
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ErrorBody {
    Message(String),
    Fields(ValidationErrors),
}

/// API 错误
#[derive(Debug)]
pub enum ApiError {
    BadRequest(String),
    NotFound,
    MethodNotAllowed(Method),
    FailedValidation(ValidationErrors),
    EditConflict,
    /// 请求处理超过时限
    RequestTimeout,
    /// 内部原因只记录日志，不返回给客户端
    Internal(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::FailedValidation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::EditConflict => StatusCode::CONFLICT,
            ApiError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(self) -> ErrorBody {
        match self {
            ApiError::BadRequest(msg) => ErrorBody::Message(msg),
            ApiError::NotFound => {
                ErrorBody::Message("the requested resource could not be found".to_string())
            }
            ApiError::MethodNotAllowed(method) => ErrorBody::Message(format!(
                "the {} method is not supported for this resource",
                method
            )),
            ApiError::FailedValidation(errors) => ErrorBody::Fields(errors),
            ApiError::EditConflict => ErrorBody::Message(
                "unable to update the record due to an edit conflict, please try again"
                    .to_string(),
            ),
            ApiError::RequestTimeout => {
                ErrorBody::Message("the request took too long to process".to_string())
            }
            ApiError::Internal(_) => ErrorBody::Message(
                "the server encountered a problem and could not process your request".to_string(),
            ),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Internal(cause) => {
                tracing::error!(status = status.as_u16(), error = %cause, "Internal server error");
            }
            ApiError::FailedValidation(errors) => {
                tracing::debug!(status = status.as_u16(), errors = ?errors, "Validation failed");
            }
            ApiError::BadRequest(msg) => {
                tracing::debug!(status = status.as_u16(), error = %msg, "Bad request");
            }
            _ => {}
        }

        (status, Json(Envelope::Error(self.body()))).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(e: ApplicationError) -> Self {
        match e {
            ApplicationError::NotFound { .. } => ApiError::NotFound,
            ApplicationError::FailedValidation(errors) => ApiError::FailedValidation(errors),
            ApplicationError::EditConflict { .. } => ApiError::EditConflict,
            ApplicationError::RepositoryError(msg) => ApiError::Internal(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn render(err: ApiError) -> (StatusCode, Value) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_internal_error_hides_cause() {
        let (status, body) = render(ApiError::Internal("disk on fire".to_string())).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            body["error"],
            "the server encountered a problem and could not process your request"
        );
    }

    #[tokio::test]
    async fn test_validation_errors_are_field_map() {
        let mut errors = ValidationErrors::new();
        errors.insert("module_name".to_string(), "must be provided".to_string());

        let (status, body) = render(ApiError::FailedValidation(errors)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(body["error"]["module_name"], "must be provided");
    }

    #[tokio::test]
    async fn test_method_not_allowed_names_method() {
        let (status, body) = render(ApiError::MethodNotAllowed(Method::PUT)).await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
        assert_eq!(
            body["error"],
            "the PUT method is not supported for this resource"
        );
    }

    #[test]
    fn test_application_error_mapping() {
        assert!(matches!(
            ApiError::from(ApplicationError::not_found("ModuleInfo", 1)),
            ApiError::NotFound
        ));
        assert!(matches!(
            ApiError::from(ApplicationError::edit_conflict("ModuleInfo", 1)),
            ApiError::EditConflict
        ));
        assert!(matches!(
            ApiError::from(ApplicationError::RepositoryError("disk I/O error".to_string())),
            ApiError::Internal(_)
        ));
    }
}
