//! Secretaria Server - church secretariat sync service
//!
//! # Module structure
//!
//! ```text
//! secretaria-server/src/
//! ├── core/          # Config, application state
//! ├── cache/         # Local key-value cache (redb)
//! ├── remote/        # Relational backend adapter (PostgREST-style)
//! ├── sheets/        # Spreadsheet proxy adapter
//! ├── sync/          # Reconciliation orchestrator, retry, chunked writes
//! ├── stores/        # Member/church stores (in-memory + write-through)
//! ├── documents/     # Template rendering and CSV reports
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # Errors, logging
//! ```

pub mod api;
pub mod cache;
pub mod core;
pub mod documents;
pub mod remote;
pub mod sheets;
pub mod stores;
pub mod sync;
pub mod utils;

// Re-export common types
pub use crate::core::{AppState, Config};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
