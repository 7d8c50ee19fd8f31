//! Repository Ports - 出站端口
//!
//! 定义数据持久化的抽象接口
//! 具体实现在 infrastructure 层（SQLite / 内存）

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::module_info::ModuleInfo;

/// Repository 错误
///
/// 驱动层错误在存储边界上只分类一次：
/// NotFound / EditConflict 之外的错误一律视为不透明的数据库错误
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,

    #[error("edit conflict")]
    EditConflict,

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// ModuleInfo Repository Port
///
/// 乐观并发：update 只在 id 与调用方提供的 version 同时匹配时生效
#[async_trait]
pub trait ModuleInfoRepositoryPort: Send + Sync {
    /// 插入记录，返回填充了 id / created_at / version 的记录
    async fn insert(&self, module: ModuleInfo) -> Result<ModuleInfo, RepositoryError>;

    /// 按 id 查询；id < 1 直接返回 NotFound，不访问数据库
    async fn get(&self, id: i64) -> Result<ModuleInfo, RepositoryError>;

    /// 以 `module.version` 作为期望版本执行条件更新
    ///
    /// 未匹配任何行（id 不存在或版本过期）时返回 EditConflict
    async fn update(&self, module: ModuleInfo) -> Result<ModuleInfo, RepositoryError>;

    /// 按 id 删除；id < 1 或未删除任何行时返回 NotFound
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
