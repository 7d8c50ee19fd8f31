//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateModuleHandler, DeleteModuleHandler, UpdateModuleHandler,
    // Query handlers
    GetModuleHandler,
    // Ports
    ModuleInfoRepositoryPort,
};

/// 默认请求体上限 1 MiB
pub const DEFAULT_MAX_BODY_BYTES: usize = 1024 * 1024;

/// 应用状态
///
/// 仓储通过构造函数注入，测试时可替换为内存实现
pub struct AppState {
    // ========== Command Handlers ==========
    pub create_module_handler: CreateModuleHandler,
    pub update_module_handler: UpdateModuleHandler,
    pub delete_module_handler: DeleteModuleHandler,

    // ========== Query Handlers ==========
    pub get_module_handler: GetModuleHandler,

    // ========== Settings ==========
    /// 部署环境标签（健康检查返回）
    pub environment: String,
    /// 请求体字节上限
    pub max_body_bytes: usize,
}

impl AppState {
    /// 创建应用状态
    pub fn new(module_repo: Arc<dyn ModuleInfoRepositoryPort>, environment: impl Into<String>) -> Self {
        Self {
            create_module_handler: CreateModuleHandler::new(module_repo.clone()),
            update_module_handler: UpdateModuleHandler::new(module_repo.clone()),
            delete_module_handler: DeleteModuleHandler::new(module_repo.clone()),

            get_module_handler: GetModuleHandler::new(module_repo),

            environment: environment.into(),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }

    /// 设置请求体字节上限
    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
