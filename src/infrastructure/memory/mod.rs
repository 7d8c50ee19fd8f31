//! In-Memory Implementations
//!
//! 内存实现，用于测试及无数据库运行

mod module_repo;

pub use module_repo::InMemoryModuleInfoRepository;
