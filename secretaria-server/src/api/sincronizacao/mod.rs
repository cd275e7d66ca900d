//! Sync API module

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/sincronizacao", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/status", get(handler::status))
        .route("/membros", post(handler::sync_members))
        .route("/membros/importar", post(handler::import_members))
        .route("/membros/exportar", post(handler::export_members))
        .route("/igrejas", post(handler::sync_churches))
        .route("/igrejas/importar", post(handler::import_churches))
        .route("/igrejas/exportar", post(handler::export_churches))
}
