//! ModuleInfo HTTP Handlers
//!
//! 每个请求只走一条分支：解码 -> 校验 -> 存储 -> 编码

use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, PathRejection},
        Path, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::application::{CreateModule, DeleteModule, GetModule, UpdateModule};
use crate::domain::module_info::ModuleInfo;
use crate::infrastructure::http::dto::{
    id_from_path, read_json, CreateModuleRequest, Envelope, UpdateModuleRequest,
};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 资源路径前缀
pub const MODULES_PATH: &str = "/v1/movies";

/// 创建模块
pub async fn create_module(
    State(state): State<Arc<AppState>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let input: CreateModuleRequest = read_json(body, state.max_body_bytes)?;

    let module = state
        .create_module_handler
        .handle(CreateModule {
            module_name: input.module_name,
            module_duration: input.module_duration,
            exam_type: input.exam_type,
        })
        .await?;

    let location = format!("{}/{}", MODULES_PATH, module.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(Envelope::Model(module)),
    )
        .into_response())
}

/// 获取模块详情
pub async fn show_module(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<ModuleInfo>>, ApiError> {
    let id = id_from_path(path)?;

    let module = state.get_module_handler.handle(GetModule { id }).await?;

    Ok(Json(Envelope::Model(module)))
}

/// 更新模块（三个可变字段整体替换）
pub async fn update_module(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope<ModuleInfo>>, ApiError> {
    let id = id_from_path(path)?;

    let existing = state.update_module_handler.load(id).await?;

    let input: UpdateModuleRequest = read_json(body, state.max_body_bytes)?;

    let module = state
        .update_module_handler
        .apply(
            existing,
            UpdateModule {
                module_name: input.module_name,
                module_duration: input.module_duration,
                exam_type: input.exam_type,
                expected_version: input.version,
            },
        )
        .await?;

    Ok(Json(Envelope::Model(module)))
}

/// 删除模块
pub async fn delete_module(
    State(state): State<Arc<AppState>>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<Envelope<&'static str>>, ApiError> {
    let id = id_from_path(path)?;

    state
        .delete_module_handler
        .handle(DeleteModule { id })
        .await?;

    Ok(Json(Envelope::Message("module successfully deleted")))
}
