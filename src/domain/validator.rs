//! 通用字段校验器
//!
//! 按字段名收集错误信息，不包含任何领域知识。
//! 同一字段只保留第一条错误信息（first write wins）。

use std::collections::{BTreeMap, HashSet};
use std::hash::Hash;

/// 字段名 -> 错误信息
pub type ValidationErrors = BTreeMap<String, String>;

/// 字段校验器
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Validator {
    errors: ValidationErrors,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 没有记录任何错误时为 true
    pub fn valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// 记录错误；字段已有错误时保持原信息不变
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors
            .entry(field.into())
            .or_insert_with(|| message.into());
    }

    /// 条件不成立时记录错误
    pub fn check(&mut self, ok: bool, field: &str, message: &str) {
        if !ok {
            self.add_error(field, message);
        }
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn into_errors(self) -> ValidationErrors {
        self.errors
    }
}

/// 序列中没有重复元素时为 true
pub fn unique<T: Eq + Hash>(values: &[T]) -> bool {
    let mut seen = HashSet::with_capacity(values.len());
    values.iter().all(|v| seen.insert(v))
}
