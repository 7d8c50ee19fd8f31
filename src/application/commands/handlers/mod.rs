//! Command Handlers

mod module_handlers;

pub use module_handlers::{CreateModuleHandler, DeleteModuleHandler, UpdateModuleHandler};
