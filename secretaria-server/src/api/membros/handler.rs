//! Member API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Member, MemberCreate, MemberUpdate};

use crate::core::AppState;
use crate::utils::{AppResponse, AppResult, ok, ok_with_message};

/// GET /api/membros
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Member>>> {
    Ok(Json(state.members.list().await))
}

/// GET /api/membros/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Member>> {
    Ok(Json(state.members.get(&id).await?))
}

/// POST /api/membros
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<MemberCreate>,
) -> AppResult<Json<Member>> {
    Ok(Json(state.members.create(payload).await?))
}

/// PUT /api/membros/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<MemberUpdate>,
) -> AppResult<Json<Member>> {
    Ok(Json(state.members.update(&id, payload).await?))
}

/// DELETE /api/membros/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    state.members.delete(&id).await?;
    Ok(ok(()))
}

#[derive(serde::Deserialize)]
pub struct DeleteManyPayload {
    pub ids: Vec<String>,
}

/// POST /api/membros/excluir - batch delete
pub async fn delete_many(
    State(state): State<AppState>,
    Json(payload): Json<DeleteManyPayload>,
) -> AppResult<Json<AppResponse<usize>>> {
    let deleted = state.members.delete_many(&payload.ids).await?;
    Ok(ok_with_message(
        deleted,
        format!("{deleted} membros excluídos"),
    ))
}

/// PUT /api/membros/importados - replace the working copy with an imported
/// list (local only; use the sync routes to push it to the backend)
pub async fn save_imported(
    State(state): State<AppState>,
    Json(members): Json<Vec<Member>>,
) -> AppResult<Json<AppResponse<usize>>> {
    let total = members.len();
    state.members.replace_all(members).await?;
    Ok(ok_with_message(total, format!("{total} membros importados")))
}
