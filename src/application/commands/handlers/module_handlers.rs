//! ModuleInfo Command Handlers

use chrono::Utc;
use std::sync::Arc;

use crate::application::commands::{CreateModule, DeleteModule, UpdateModule};
use crate::application::error::ApplicationError;
use crate::application::ports::ModuleInfoRepositoryPort;
use crate::domain::module_info::{validate_module_input, ModuleInfo};
use crate::domain::Validator;

const RESOURCE: &str = "ModuleInfo";

fn ensure_valid(module: &ModuleInfo, exam_type_provided: bool) -> Result<(), ApplicationError> {
    let mut v = Validator::new();
    validate_module_input(&mut v, module, exam_type_provided);
    if v.valid() {
        Ok(())
    } else {
        Err(ApplicationError::FailedValidation(v.into_errors()))
    }
}

// ============================================================================
// CreateModule
// ============================================================================

/// CreateModule Handler
pub struct CreateModuleHandler {
    module_repo: Arc<dyn ModuleInfoRepositoryPort>,
}

impl CreateModuleHandler {
    pub fn new(module_repo: Arc<dyn ModuleInfoRepositoryPort>) -> Self {
        Self { module_repo }
    }

    pub async fn handle(&self, command: CreateModule) -> Result<ModuleInfo, ApplicationError> {
        let exam_type_provided = command.exam_type.is_some();
        let draft = ModuleInfo::draft(
            command.module_name,
            command.module_duration,
            command.exam_type.unwrap_or_default(),
            Utc::now(),
        );
        ensure_valid(&draft, exam_type_provided)?;

        let module = self.module_repo.insert(draft).await?;

        tracing::info!(
            module_id = module.id,
            name = %module.module_name,
            "Module created"
        );

        Ok(module)
    }
}

// ============================================================================
// UpdateModule
// ============================================================================

/// UpdateModule Handler
///
/// 分两步：先 `load` 读取当前记录，再 `apply` 替换字段并执行条件更新。
/// HTTP 层在两步之间解码请求体，保证不存在的记录先于坏请求体被报告。
pub struct UpdateModuleHandler {
    module_repo: Arc<dyn ModuleInfoRepositoryPort>,
}

impl UpdateModuleHandler {
    pub fn new(module_repo: Arc<dyn ModuleInfoRepositoryPort>) -> Self {
        Self { module_repo }
    }

    /// 读取待更新的记录
    pub async fn load(&self, id: i64) -> Result<ModuleInfo, ApplicationError> {
        self.module_repo
            .get(id)
            .await
            .map_err(|e| ApplicationError::from_repository(e, RESOURCE, id))
    }

    /// 替换可变字段、校验并以乐观并发方式写回
    pub async fn apply(
        &self,
        mut module: ModuleInfo,
        command: UpdateModule,
    ) -> Result<ModuleInfo, ApplicationError> {
        let id = module.id;
        let exam_type_provided = command.exam_type.is_some();
        module.replace_content(
            command.module_name,
            command.module_duration,
            command.exam_type.unwrap_or_default(),
        );
        ensure_valid(&module, exam_type_provided)?;

        if let Some(expected) = command.expected_version {
            module.version = expected;
        }
        module.updated_at = Utc::now();
        let expected_version = module.version;

        let updated = self.module_repo.update(module).await.map_err(|e| {
            let err = ApplicationError::from_repository(e, RESOURCE, id);
            if matches!(err, ApplicationError::EditConflict { .. }) {
                tracing::warn!(
                    module_id = id,
                    expected_version = expected_version,
                    "Module update rejected by version check"
                );
            }
            err
        })?;

        tracing::info!(
            module_id = id,
            version = updated.version,
            "Module updated"
        );

        Ok(updated)
    }
}

// ============================================================================
// DeleteModule
// ============================================================================

/// DeleteModule Handler
pub struct DeleteModuleHandler {
    module_repo: Arc<dyn ModuleInfoRepositoryPort>,
}

impl DeleteModuleHandler {
    pub fn new(module_repo: Arc<dyn ModuleInfoRepositoryPort>) -> Self {
        Self { module_repo }
    }

    pub async fn handle(&self, command: DeleteModule) -> Result<(), ApplicationError> {
        let id = command.id;

        self.module_repo
            .delete(id)
            .await
            .map_err(|e| ApplicationError::from_repository(e, RESOURCE, id))?;

        tracing::info!(module_id = id, "Module deleted");

        Ok(())
    }
}
