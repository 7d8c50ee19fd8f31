//! HTTP Handlers

mod fallback;
mod healthcheck;
mod module;

pub use fallback::*;
pub use healthcheck::*;
pub use module::*;
