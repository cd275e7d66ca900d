//! Settings API handlers

use axum::{Json, extract::State};
use shared::models::{SheetSettings, TemplateSettings};

use crate::core::AppState;
use crate::utils::{AppResponse, AppResult, ok};

/// GET /api/configuracoes/planilha
pub async fn get_sheet_settings(State(state): State<AppState>) -> AppResult<Json<SheetSettings>> {
    Ok(Json(state.sheet_settings()?))
}

/// PUT /api/configuracoes/planilha
pub async fn put_sheet_settings(
    State(state): State<AppState>,
    Json(settings): Json<SheetSettings>,
) -> AppResult<Json<AppResponse<()>>> {
    state.save_sheet_settings(&settings)?;
    Ok(ok(()))
}

/// GET /api/configuracoes/modelos - templates with defaults filled in
pub async fn get_templates(State(state): State<AppState>) -> AppResult<Json<TemplateSettings>> {
    Ok(Json(state.template_settings()?))
}

/// PUT /api/configuracoes/modelos
pub async fn put_templates(
    State(state): State<AppState>,
    Json(settings): Json<TemplateSettings>,
) -> AppResult<Json<AppResponse<()>>> {
    state.save_template_settings(&settings)?;
    Ok(ok(()))
}
