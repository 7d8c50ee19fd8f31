//! ModuleInfo Queries

/// 按 id 获取模块
#[derive(Debug, Clone)]
pub struct GetModule {
    pub id: i64,
}
