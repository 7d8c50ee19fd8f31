//! Healthcheck Handler

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::infrastructure::http::dto::{Envelope, SystemInfo};
use crate::infrastructure::http::state::AppState;

/// 健康检查
pub async fn healthcheck(State(state): State<Arc<AppState>>) -> Json<Envelope<SystemInfo>> {
    Json(Envelope::SystemInfo(SystemInfo {
        status: "available",
        environment: state.environment.clone(),
        version: env!("CARGO_PKG_VERSION"),
    }))
}
