//! Spreadsheet Adapter
//!
//! Reads/writes the tabular proxy endpoints that mirror the member and church
//! collections. Headers are human-edited free text; [`headers`] holds the
//! candidate vocabulary and detection logic, [`service`] the HTTP plumbing
//! and row parsing.

pub mod headers;
pub mod service;

pub use service::SheetSyncService;

use async_trait::async_trait;
use shared::models::{Church, Member, SheetConnection};

use crate::AppResult;

/// Seam over the spreadsheet proxy, implemented by [`SheetSyncService`] and
/// by in-memory fakes in orchestrator tests.
#[async_trait]
pub trait SheetStore: Send + Sync {
    async fn read_members(&self, conn: &SheetConnection) -> AppResult<Vec<Member>>;
    async fn write_members(&self, conn: &SheetConnection, members: &[Member]) -> AppResult<()>;
    async fn read_churches(&self, conn: &SheetConnection) -> AppResult<Vec<Church>>;
    async fn write_churches(&self, conn: &SheetConnection, churches: &[Church]) -> AppResult<()>;
}
