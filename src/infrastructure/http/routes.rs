//! HTTP Routes
//!
//! API Endpoints:
//! - /v1/healthcheck    GET     健康检查
//! - /v1/movies         POST    创建模块
//! - /v1/movies/:id     GET     获取模块
//! - /v1/movies/:id     PATCH   更新模块（乐观并发）
//! - /v1/movies/:id     DELETE  删除模块
//!
//! 未匹配的路径返回 404，路径存在但方法不支持返回 405

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/v1/healthcheck",
            get(handlers::healthcheck).fallback(handlers::method_not_allowed),
        )
        .merge(module_routes())
        .fallback(handlers::not_found)
}

/// ModuleInfo 路由
fn module_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            handlers::MODULES_PATH,
            post(handlers::create_module).fallback(handlers::method_not_allowed),
        )
        .route(
            "/v1/movies/:id",
            get(handlers::show_module)
                .patch(handlers::update_module)
                .delete(handlers::delete_module)
                .fallback(handlers::method_not_allowed),
        )
}
