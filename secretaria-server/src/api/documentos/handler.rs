//! Document API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Serialize;

use crate::core::AppState;
use crate::documents::{member_tokens, render_template};
use crate::utils::{AppError, AppResult};

#[derive(Serialize)]
pub struct DocumentResponse {
    pub tipo: String,
    pub conteudo: String,
}

/// GET /api/documentos/{tipo}/{membro_id}
///
/// `tipo` is one of `carta-batismo`, `carteirinha`, `contrato`.
pub async fn render(
    State(state): State<AppState>,
    Path((tipo, membro_id)): Path<(String, String)>,
) -> AppResult<Json<DocumentResponse>> {
    let member = state.members.get(&membro_id).await?;
    let templates = state.template_settings()?;

    let template = match tipo.as_str() {
        "carta-batismo" => templates.carta_batismo,
        "carteirinha" => templates.carteirinha,
        "contrato" => templates.contrato,
        other => {
            return Err(AppError::validation(format!(
                "Tipo de documento desconhecido: {other}"
            )));
        }
    };

    let conteudo = render_template(&template, &member_tokens(&member));
    Ok(Json(DocumentResponse { tipo, conteudo }))
}
