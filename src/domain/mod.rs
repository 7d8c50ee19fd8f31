//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - ModuleInfo Context: 课程模块信息管理
//!
//! 以及与领域无关的字段校验器

pub mod module_info;

mod validator;

pub use validator::{unique, ValidationErrors, Validator};
