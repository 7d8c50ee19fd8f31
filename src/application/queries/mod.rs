//! CQRS Queries - 读操作

pub mod handlers;
mod module_queries;

pub use module_queries::GetModule;
