//! Sync API handlers
//!
//! Loading flags bracket every flow so the UI can show per-resource
//! progress; the flag is cleared on both success and failure paths.

use axum::{Json, extract::State};
use serde::Serialize;
use shared::models::{Church, ImportReport, Member};

use crate::core::AppState;
use crate::sync::SyncOptions;
use crate::sync::import;
use crate::utils::{AppResponse, AppResult, ok_with_message};

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub last_sync: Option<String>,
    pub loading: std::collections::BTreeMap<String, bool>,
}

/// GET /api/sincronizacao/status
pub async fn status(State(state): State<AppState>) -> AppResult<Json<StatusResponse>> {
    Ok(Json(StatusResponse {
        last_sync: state.cache.get_last_sync()?,
        loading: state.loading.snapshot(),
    }))
}

/// POST /api/sincronizacao/membros - pull the member sheet and replace the
/// remote collection
pub async fn sync_members(State(state): State<AppState>) -> AppResult<Json<ImportReport>> {
    let conn = state.sheet_settings()?.members;
    state.loading.set("membros", true);
    let result = import::sync_members_from_sheet(
        state.sheet.as_ref(),
        &conn,
        state.remote.as_ref(),
        &state.members,
        &state.cache,
        SyncOptions::default(),
    )
    .await;
    state.loading.set("membros", false);
    Ok(Json(result?))
}

/// POST /api/sincronizacao/membros/importar - push a provided member list
/// to the remote collection
pub async fn import_members(
    State(state): State<AppState>,
    Json(members): Json<Vec<Member>>,
) -> AppResult<Json<ImportReport>> {
    state.loading.set("membros", true);
    let result = import::import_members_to_remote(
        state.remote.as_ref(),
        &state.members,
        &state.cache,
        members,
        SyncOptions::default(),
    )
    .await;
    state.loading.set("membros", false);
    Ok(Json(result?))
}

/// POST /api/sincronizacao/membros/exportar - append the working copy to
/// the member sheet
pub async fn export_members(
    State(state): State<AppState>,
) -> AppResult<Json<AppResponse<usize>>> {
    let conn = state.sheet_settings()?.members;
    let exported = import::export_members_to_sheet(
        state.sheet.as_ref(),
        &conn,
        &state.members,
        &state.cache,
        SyncOptions::default(),
    )
    .await?;
    Ok(ok_with_message(
        exported,
        format!("{exported} membros exportados"),
    ))
}

/// POST /api/sincronizacao/igrejas
pub async fn sync_churches(State(state): State<AppState>) -> AppResult<Json<ImportReport>> {
    let conn = state.sheet_settings()?.churches;
    state.loading.set("igrejas", true);
    let result = import::sync_churches_from_sheet(
        state.sheet.as_ref(),
        &conn,
        state.remote.as_ref(),
        &state.churches,
        &state.cache,
        SyncOptions::default(),
    )
    .await;
    state.loading.set("igrejas", false);
    Ok(Json(result?))
}

/// POST /api/sincronizacao/igrejas/importar
pub async fn import_churches(
    State(state): State<AppState>,
    Json(churches): Json<Vec<Church>>,
) -> AppResult<Json<ImportReport>> {
    state.loading.set("igrejas", true);
    let result = import::import_churches_to_remote(
        state.remote.as_ref(),
        &state.churches,
        &state.cache,
        churches,
        SyncOptions::default(),
    )
    .await;
    state.loading.set("igrejas", false);
    Ok(Json(result?))
}

/// POST /api/sincronizacao/igrejas/exportar
pub async fn export_churches(
    State(state): State<AppState>,
) -> AppResult<Json<AppResponse<usize>>> {
    let conn = state.sheet_settings()?.churches;
    let exported = import::export_churches_to_sheet(
        state.sheet.as_ref(),
        &conn,
        &state.churches,
        &state.cache,
        SyncOptions::default(),
    )
    .await?;
    Ok(ok_with_message(
        exported,
        format!("{exported} igrejas exportadas"),
    ))
}
