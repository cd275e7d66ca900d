//! Report API module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/relatorios", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route("/membros.csv", get(handler::members_csv))
        .route("/igrejas.csv", get(handler::churches_csv))
}
