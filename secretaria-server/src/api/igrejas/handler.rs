//! Church API handlers

use axum::{
    Json,
    extract::{Path, State},
};
use shared::models::{Church, ChurchCreate, ChurchUpdate};

use crate::core::AppState;
use crate::utils::{AppResponse, AppResult, ok, ok_with_message};

/// GET /api/igrejas
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Church>>> {
    Ok(Json(state.churches.list().await))
}

/// GET /api/igrejas/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Church>> {
    Ok(Json(state.churches.get(&id).await?))
}

/// POST /api/igrejas
pub async fn create(
    State(state): State<AppState>,
    Json(payload): Json<ChurchCreate>,
) -> AppResult<Json<Church>> {
    Ok(Json(state.churches.create(payload).await?))
}

/// PUT /api/igrejas/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ChurchUpdate>,
) -> AppResult<Json<Church>> {
    Ok(Json(state.churches.update(&id, payload).await?))
}

/// DELETE /api/igrejas/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    state.churches.delete(&id).await?;
    Ok(ok(()))
}

/// PUT /api/igrejas/importadas - replace the working copy with an imported list
pub async fn save_imported(
    State(state): State<AppState>,
    Json(churches): Json<Vec<Church>>,
) -> AppResult<Json<AppResponse<usize>>> {
    let total = churches.len();
    state.churches.replace_all(churches).await?;
    Ok(ok_with_message(
        total,
        format!("{total} igrejas importadas"),
    ))
}
