//! SQLite Persistence - SQLite 数据库持久化实现

mod database;
mod module_repo;

pub use database::*;
pub use module_repo::*;
