//! Document API module

mod handler;

use axum::{Router, routing::get};

use crate::core::AppState;

pub fn router() -> Router<AppState> {
    Router::new().nest("/api/documentos", routes())
}

fn routes() -> Router<AppState> {
    Router::new().route("/{tipo}/{membro_id}", get(handler::render))
}
