//! CQRS Commands - 写操作

pub mod handlers;
mod module_commands;

pub use module_commands::{CreateModule, DeleteModule, UpdateModule};
