//! ModuleInfo Context - Value Objects

use serde::{Deserialize, Serialize};

/// 模块时长（分钟）
///
/// JSON 中序列化为普通整数。反序列化接受任意 i32，
/// 是否为正数由校验规则负责。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleDuration(i32);

impl ModuleDuration {
    pub fn new(minutes: i32) -> Self {
        Self(minutes)
    }

    pub fn minutes(&self) -> i32 {
        self.0
    }

    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }
}
