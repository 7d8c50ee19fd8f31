//! 应用层错误定义
//!
//! 统一的命令/查询错误类型

use thiserror::Error;

use crate::application::ports::RepositoryError;
use crate::domain::ValidationErrors;

/// 应用层错误
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// 资源未找到
    #[error("{resource_type} not found: {id}")]
    NotFound {
        resource_type: &'static str,
        id: i64,
    },

    /// 字段校验失败
    #[error("Validation failed: {0:?}")]
    FailedValidation(ValidationErrors),

    /// 乐观并发冲突
    #[error("Edit conflict on {resource_type} {id}")]
    EditConflict {
        resource_type: &'static str,
        id: i64,
    },

    /// 仓储错误
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl ApplicationError {
    /// 创建 NotFound 错误
    pub fn not_found(resource_type: &'static str, id: i64) -> Self {
        Self::NotFound { resource_type, id }
    }

    /// 创建 EditConflict 错误
    pub fn edit_conflict(resource_type: &'static str, id: i64) -> Self {
        Self::EditConflict { resource_type, id }
    }

    /// 将仓储错误归类到具体资源
    pub fn from_repository(err: RepositoryError, resource_type: &'static str, id: i64) -> Self {
        match err {
            RepositoryError::NotFound => Self::not_found(resource_type, id),
            RepositoryError::EditConflict => Self::edit_conflict(resource_type, id),
            other => Self::RepositoryError(other.to_string()),
        }
    }
}

impl From<RepositoryError> for ApplicationError {
    fn from(err: RepositoryError) -> Self {
        Self::RepositoryError(err.to_string())
    }
}
