//! ModuleInfo Query Handlers

use std::sync::Arc;

use crate::application::error::ApplicationError;
use crate::application::ports::ModuleInfoRepositoryPort;
use crate::application::queries::GetModule;
use crate::domain::module_info::ModuleInfo;

/// GetModule Handler
pub struct GetModuleHandler {
    module_repo: Arc<dyn ModuleInfoRepositoryPort>,
}

impl GetModuleHandler {
    pub fn new(module_repo: Arc<dyn ModuleInfoRepositoryPort>) -> Self {
        Self { module_repo }
    }

    pub async fn handle(&self, query: GetModule) -> Result<ModuleInfo, ApplicationError> {
        self.module_repo
            .get(query.id)
            .await
            .map_err(|e| ApplicationError::from_repository(e, "ModuleInfo", query.id))
    }
}
