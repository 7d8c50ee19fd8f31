//! ModuleInfo Commands

use crate::domain::module_info::ModuleDuration;

/// 创建模块命令
#[derive(Debug, Clone)]
pub struct CreateModule {
    pub module_name: String,
    pub module_duration: ModuleDuration,
    /// None 表示客户端未提供（缺失或为 null）
    pub exam_type: Option<Vec<String>>,
}

/// 更新模块命令（三个可变字段整体替换）
#[derive(Debug, Clone)]
pub struct UpdateModule {
    pub module_name: String,
    pub module_duration: ModuleDuration,
    /// None 表示客户端未提供（缺失或为 null）
    pub exam_type: Option<Vec<String>>,
    /// 客户端最后观察到的版本；None 时使用刚读取到的版本
    pub expected_version: Option<i32>,
}

/// 删除模块命令
#[derive(Debug, Clone)]
pub struct DeleteModule {
    pub id: i64,
}
