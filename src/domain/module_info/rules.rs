//! ModuleInfo Context - 校验规则

use crate::domain::{unique, Validator};

use super::ModuleInfo;

pub const MAX_MODULE_NAME_BYTES: usize = 500;
pub const MAX_EXAM_TYPES: usize = 5;

/// 校验客户端输入
///
/// 未提供（缺失或为 null）的 exam_type 报告为 "must be provided"，
/// 其余规则与 [`validate_module`] 相同
pub fn validate_module_input(v: &mut Validator, module: &ModuleInfo, exam_type_provided: bool) {
    v.check(exam_type_provided, "exam_type", "must be provided");
    validate_module(v, module);
}

/// 校验模块记录的用户字段
pub fn validate_module(v: &mut Validator, module: &ModuleInfo) {
    v.check(!module.module_name.is_empty(), "module_name", "must be provided");
    v.check(
        module.module_name.len() <= MAX_MODULE_NAME_BYTES,
        "module_name",
        "must not be more than 500 bytes long",
    );

    v.check(
        module.module_duration.minutes() != 0,
        "module_duration",
        "must be provided",
    );
    v.check(
        module.module_duration.is_positive(),
        "module_duration",
        "must be a positive integer",
    );

    v.check(
        !module.exam_type.is_empty(),
        "exam_type",
        "must contain at least 1 entry",
    );
    v.check(
        module.exam_type.len() <= MAX_EXAM_TYPES,
        "exam_type",
        "must not contain more than 5 entries",
    );
    v.check(
        unique(&module.exam_type),
        "exam_type",
        "must not contain duplicate values",
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::module_info::ModuleDuration;
    use chrono::Utc;

    fn module(name: &str, minutes: i32, exam_type: &[&str]) -> ModuleInfo {
        ModuleInfo::draft(
            name,
            ModuleDuration::new(minutes),
            exam_type.iter().map(|s| s.to_string()).collect(),
            Utc::now(),
        )
    }

    fn errors_for(module: &ModuleInfo) -> Validator {
        let mut v = Validator::new();
        validate_module(&mut v, module);
        v
    }

    #[test]
    fn test_valid_module() {
        let v = errors_for(&module("Intro to Systems", 60, &["core", "year1"]));
        assert!(v.valid());
    }

    #[test]
    fn test_empty_name() {
        let v = errors_for(&module("", 60, &["core"]));
        assert_eq!(v.errors().get("module_name").unwrap(), "must be provided");
        assert_eq!(v.errors().len(), 1);
    }

    #[test]
    fn test_name_too_long() {
        let name = "a".repeat(MAX_MODULE_NAME_BYTES + 1);
        let v = errors_for(&module(&name, 60, &["core"]));
        assert_eq!(
            v.errors().get("module_name").unwrap(),
            "must not be more than 500 bytes long"
        );

        let name = "a".repeat(MAX_MODULE_NAME_BYTES);
        assert!(errors_for(&module(&name, 60, &["core"])).valid());
    }

    #[test]
    fn test_name_length_counts_bytes() {
        // 每个字符 3 字节
        let name = "模".repeat(167);
        let v = errors_for(&module(&name, 60, &["core"]));
        assert!(v.errors().contains_key("module_name"));
    }

    #[test]
    fn test_duration_zero_and_negative() {
        let v = errors_for(&module("Systems", 0, &["core"]));
        assert_eq!(v.errors().get("module_duration").unwrap(), "must be provided");

        let v = errors_for(&module("Systems", -10, &["core"]));
        assert_eq!(
            v.errors().get("module_duration").unwrap(),
            "must be a positive integer"
        );
    }

    #[test]
    fn test_exam_type_rules() {
        let v = errors_for(&module("Systems", 60, &[]));
        assert_eq!(
            v.errors().get("exam_type").unwrap(),
            "must contain at least 1 entry"
        );

        let v = errors_for(&module("Systems", 60, &["a", "b", "c", "d", "e", "f"]));
        assert_eq!(
            v.errors().get("exam_type").unwrap(),
            "must not contain more than 5 entries"
        );

        let v = errors_for(&module("Systems", 60, &["core", "year1", "core"]));
        assert_eq!(
            v.errors().get("exam_type").unwrap(),
            "must not contain duplicate values"
        );
    }

    #[test]
    fn test_exam_type_not_provided() {
        let mut v = Validator::new();
        validate_module_input(&mut v, &module("Systems", 60, &[]), false);
        assert_eq!(v.errors().get("exam_type").unwrap(), "must be provided");

        let mut v = Validator::new();
        validate_module_input(&mut v, &module("Systems", 60, &[]), true);
        assert_eq!(
            v.errors().get("exam_type").unwrap(),
            "must contain at least 1 entry"
        );
    }

    #[test]
    fn test_reports_every_failing_field() {
        let v = errors_for(&module("", -1, &[]));
        assert_eq!(v.errors().len(), 3);
    }
}
