//! modinfo - 课程模块信息 JSON API
//!
//! 架构设计: DDD + CQRS + Hexagonal Architecture
//!
//! 领域层 (domain/):
//! - ModuleInfo Context: 模块记录、时长值对象、校验规则
//! - Validator: 通用字段校验器
//!
//! 应用层 (application/):
//! - Ports: 端口定义（ModuleInfoRepository）
//! - Commands: 创建 / 更新 / 删除
//! - Queries: 按 id 查询
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful JSON API
//! - Persistence: SQLite 存储（乐观并发）
//! - Memory: 内存存储（测试用）

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
