//! ModuleInfo Context - Entity

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::ModuleDuration;

/// 课程模块记录
///
/// 不变量:
/// - id / created_at 由存储层生成，创建后不可变
/// - version 从 1 开始，每次成功更新恰好加 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInfo {
    pub id: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub module_name: String,
    pub module_duration: ModuleDuration,
    pub exam_type: Vec<String>,
    pub version: i32,
}

impl ModuleInfo {
    /// 创建尚未持久化的记录
    ///
    /// id 和 version 保持为 0，由存储层在插入时填充
    pub fn draft(
        module_name: impl Into<String>,
        module_duration: ModuleDuration,
        exam_type: Vec<String>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: 0,
            created_at: now,
            updated_at: now,
            module_name: module_name.into(),
            module_duration,
            exam_type,
            version: 0,
        }
    }

    /// 整体替换三个可变字段（不做按字段合并）
    pub fn replace_content(
        &mut self,
        module_name: String,
        module_duration: ModuleDuration,
        exam_type: Vec<String>,
    ) {
        self.module_name = module_name;
        self.module_duration = module_duration;
        self.exam_type = exam_type;
    }
}
