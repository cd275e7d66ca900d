//! Settings API module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/configuracoes", routes())
}

fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/planilha",
            get(handler::get_sheet_settings).put(handler::put_sheet_settings),
        )
        .route(
            "/modelos",
            get(handler::get_templates).put(handler::put_templates),
        )
}
