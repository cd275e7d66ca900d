//! Sync Orchestrator
//!
//! Retry policy and bulk-import flows sit here, above the adapters: the
//! remote and spreadsheet services never retry on their own, so a failed
//! operation surfaces exactly once and this layer decides whether to try
//! again.

pub mod import;
pub mod orchestrator;
pub mod saga;

pub use orchestrator::{SyncOptions, execute};
pub use saga::ChunkedWrite;
