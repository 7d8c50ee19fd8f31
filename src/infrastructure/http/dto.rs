//! Data Transfer Objects
//!
//! 所有响应体都是只有一个顶层 key 的 JSON 对象：
//! `model` / `message` / `system_info` / `error`

use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, PathRejection};
use axum::extract::Path;
use axum::http::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::error::Category;

use crate::domain::module_info::ModuleDuration;
use crate::infrastructure::http::error::ApiError;

// ============================================================================
// 统一响应结构
// ============================================================================

/// 统一 API 响应信封
#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Envelope<T: Serialize> {
    Model(T),
    Message(T),
    SystemInfo(T),
    Error(T),
}

/// 健康检查信息
#[derive(Debug, Serialize)]
pub struct SystemInfo {
    pub status: &'static str,
    pub environment: String,
    pub version: &'static str,
}

// ============================================================================
// ModuleInfo DTOs
// ============================================================================

/// 缺失或为 null 的字段解码为空值/零值，交给校验规则报告
///
/// exam_type 保留 None，以区分“未提供”与“空数组”
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CreateModuleRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub module_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub module_duration: ModuleDuration,
    pub exam_type: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UpdateModuleRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub module_name: String,
    #[serde(deserialize_with = "null_as_default")]
    pub module_duration: ModuleDuration,
    pub exam_type: Option<Vec<String>>,
    /// 客户端最后观察到的版本
    pub version: Option<i32>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

// ============================================================================
// 请求解析
// ============================================================================

/// 严格解码 JSON 请求体
///
/// 任何解码失败都转换为带可读信息的 BadRequest
pub fn read_json<T: DeserializeOwned>(
    body: Result<Bytes, BytesRejection>,
    max_bytes: usize,
) -> Result<T, ApiError> {
    let bytes = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::BadRequest(format!("body must not be larger than {} bytes", max_bytes))
        } else {
            ApiError::BadRequest(rejection.body_text())
        }
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(ApiError::BadRequest("body must not be empty".to_string()));
    }

    let mut de = serde_json::Deserializer::from_slice(&bytes);
    let value = T::deserialize(&mut de).map_err(describe_json_error)?;
    de.end().map_err(|_| {
        ApiError::BadRequest("body must only contain a single JSON value".to_string())
    })?;

    Ok(value)
}

fn describe_json_error(err: serde_json::Error) -> ApiError {
    let message = match err.classify() {
        Category::Syntax => format!(
            "body contains badly-formed JSON (at line {} column {})",
            err.line(),
            err.column()
        ),
        Category::Eof => "body contains badly-formed JSON".to_string(),
        Category::Data => {
            let text = err.to_string();
            match text
                .strip_prefix("unknown field `")
                .and_then(|rest| rest.split('`').next())
            {
                Some(field) => format!("body contains unknown key \"{}\"", field),
                None => format!("body contains incorrect JSON type ({})", text),
            }
        }
        Category::Io => format!("failed to read body: {}", err),
    };
    ApiError::BadRequest(message)
}

/// 从路径提取器结果中读取 id
///
/// 无法解码的路径段（例如非法的百分号编码）同样按 404 处理
pub fn id_from_path(path: Result<Path<String>, PathRejection>) -> Result<i64, ApiError> {
    match path {
        Ok(Path(raw)) => read_id_param(&raw),
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Rejected id path segment");
            Err(ApiError::NotFound)
        }
    }
}

/// 解析路径中的 id；无效 id 与不存在的资源同样按 404 处理
pub fn read_id_param(raw: &str) -> Result<i64, ApiError> {
    match raw.parse::<i64>() {
        Ok(id) if id >= 1 => Ok(id),
        _ => Err(ApiError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decode(body: &str) -> Result<UpdateModuleRequest, ApiError> {
        read_json(Ok(Bytes::from(body.to_string())), 1024)
    }

    fn bad_request_message(result: Result<UpdateModuleRequest, ApiError>) -> String {
        match result {
            Err(ApiError::BadRequest(msg)) => msg,
            other => panic!("expected bad request, got {other:?}"),
        }
    }

    #[test]
    fn test_envelope_shape() {
        let json = serde_json::to_value(Envelope::Message("done")).unwrap();
        assert_eq!(json, serde_json::json!({ "message": "done" }));

        let json = serde_json::to_value(Envelope::SystemInfo(SystemInfo {
            status: "available",
            environment: "test".to_string(),
            version: "0.1.0",
        }))
        .unwrap();
        assert_eq!(json["system_info"]["status"], "available");
    }

    #[test]
    fn test_decode_full_body() {
        let req = decode(
            r#"{"module_name":"Intro","module_duration":60,"exam_type":["core"],"version":3}"#,
        )
        .unwrap();
        assert_eq!(req.module_name, "Intro");
        assert_eq!(req.module_duration.minutes(), 60);
        assert_eq!(req.exam_type, Some(vec!["core".to_string()]));
        assert_eq!(req.version, Some(3));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req = decode(r#"{"exam_type":["core"]}"#).unwrap();
        assert!(req.module_name.is_empty());
        assert_eq!(req.module_duration.minutes(), 0);
        assert_eq!(req.version, None);

        let req = decode("{}").unwrap();
        assert_eq!(req.exam_type, None);
    }

    #[test]
    fn test_null_fields_decode_as_empty() {
        let req = decode(
            r#"{"module_name":null,"module_duration":null,"exam_type":null,"version":null}"#,
        )
        .unwrap();
        assert!(req.module_name.is_empty());
        assert_eq!(req.module_duration.minutes(), 0);
        assert_eq!(req.exam_type, None);
        assert_eq!(req.version, None);
    }

    #[test]
    fn test_decode_errors() {
        assert_eq!(bad_request_message(decode("")), "body must not be empty");
        assert_eq!(
            bad_request_message(decode(r#"{"module_name": }"#)),
            "body contains badly-formed JSON (at line 1 column 17)"
        );
        assert_eq!(
            bad_request_message(decode(r#"{"module_name": "x""#)),
            "body contains badly-formed JSON"
        );
        assert_eq!(
            bad_request_message(decode(r#"{"rating": 5}"#)),
            "body contains unknown key \"rating\""
        );
        assert!(bad_request_message(decode(r#"{"module_duration": "60"}"#))
            .starts_with("body contains incorrect JSON type"));
        assert_eq!(
            bad_request_message(decode(r#"{"module_name": "x"} {}"#)),
            "body must only contain a single JSON value"
        );
    }

    #[test]
    fn test_read_id_param() {
        assert_eq!(read_id_param("7").unwrap(), 7);
        assert!(matches!(read_id_param("0"), Err(ApiError::NotFound)));
        assert!(matches!(read_id_param("-2"), Err(ApiError::NotFound)));
        assert!(matches!(read_id_param("abc"), Err(ApiError::NotFound)));
    }
}
