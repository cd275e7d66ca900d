//! API routes
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`membros`] - member CRUD
//! - [`igrejas`] - church CRUD
//! - [`sincronizacao`] - spreadsheet/remote sync flows
//! - [`configuracoes`] - spreadsheet and template settings
//! - [`documentos`] - rendered printable documents
//! - [`relatorios`] - CSV exports

pub mod configuracoes;
pub mod documentos;
pub mod health;
pub mod igrejas;
pub mod membros;
pub mod relatorios;
pub mod sincronizacao;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::core::AppState;

pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(health::router())
        .merge(membros::router())
        .merge(igrejas::router())
        .merge(sincronizacao::router())
        .merge(configuracoes::router())
        .merge(documentos::router())
        .merge(relatorios::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
