//! In-Memory ModuleInfo Repository

use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::application::ports::{ModuleInfoRepositoryPort, RepositoryError};
use crate::domain::module_info::ModuleInfo;

/// 内存模块仓储
///
/// 与 SQLite 实现保持相同的语义：自增 id、version 从 1 开始、
/// 条件更新在 id 与 version 同时匹配时才生效
pub struct InMemoryModuleInfoRepository {
    modules: DashMap<i64, ModuleInfo>,
    next_id: AtomicI64,
}

impl InMemoryModuleInfoRepository {
    pub fn new() -> Self {
        Self {
            modules: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    pub fn len(&self) -> usize {
        self.modules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }
}

impl Default for InMemoryModuleInfoRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ModuleInfoRepositoryPort for InMemoryModuleInfoRepository {
    async fn insert(&self, mut module: ModuleInfo) -> Result<ModuleInfo, RepositoryError> {
        module.id = self.next_id.fetch_add(1, Ordering::SeqCst);
        module.version = 1;
        self.modules.insert(module.id, module.clone());
        tracing::debug!(module_id = module.id, "Module inserted (memory)");
        Ok(module)
    }

    async fn get(&self, id: i64) -> Result<ModuleInfo, RepositoryError> {
        if id < 1 {
            return Err(RepositoryError::NotFound);
        }
        self.modules
            .get(&id)
            .map(|m| m.clone())
            .ok_or(RepositoryError::NotFound)
    }

    async fn update(&self, mut module: ModuleInfo) -> Result<ModuleInfo, RepositoryError> {
        // 持有分片写锁期间完成比较与写入
        let mut stored = self
            .modules
            .get_mut(&module.id)
            .ok_or(RepositoryError::EditConflict)?;
        if stored.version != module.version {
            return Err(RepositoryError::EditConflict);
        }

        module.version = stored.version.checked_add(1).ok_or_else(|| {
            RepositoryError::SerializationError(format!(
                "version out of range: {} + 1",
                stored.version
            ))
        })?;
        module.created_at = stored.created_at;
        *stored = module.clone();
        Ok(module)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        if id < 1 {
            return Err(RepositoryError::NotFound);
        }
        self.modules
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound)
    }
}
