//! ModuleInfo Context - 课程模块限界上下文
//!
//! 职责:
//! - 模块记录实体与值对象
//! - 字段校验规则

mod entity;
mod rules;
mod value_objects;

pub use entity::ModuleInfo;
pub use rules::{validate_module, validate_module_input, MAX_EXAM_TYPES, MAX_MODULE_NAME_BYTES};
pub use value_objects::ModuleDuration;
