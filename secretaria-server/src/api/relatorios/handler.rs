//! Report API handlers

use axum::extract::State;
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::core::AppState;
use crate::documents::reports;
use crate::utils::AppResult;

fn csv_response(filename: &str, body: String) -> Response {
    (
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        body,
    )
        .into_response()
}

/// GET /api/relatorios/membros.csv
pub async fn members_csv(State(state): State<AppState>) -> AppResult<Response> {
    let members = state.members.list().await;
    Ok(csv_response("membros.csv", reports::members_csv(&members)))
}

/// GET /api/relatorios/igrejas.csv
pub async fn churches_csv(State(state): State<AppState>) -> AppResult<Response> {
    let churches = state.churches.list().await;
    Ok(csv_response("igrejas.csv", reports::churches_csv(&churches)))
}
