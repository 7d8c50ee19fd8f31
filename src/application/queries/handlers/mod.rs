//! Query Handlers

mod module_handlers;

pub use module_handlers::GetModuleHandler;
