//! Remote Store Adapter
//!
//! CRUD bridge to the relational backend holding the `membros` and `igrejas`
//! tables. Column naming and null handling live in [`rows`]; the HTTP calls
//! live in [`service`].
//!
//! No method here retries internally; retry policy belongs to the sync
//! orchestrator.

pub mod offline;
pub mod rows;
pub mod service;

pub use offline::OfflineRemote;
pub use rows::{ChurchRow, MemberRow, church_update_columns, member_update_columns};
pub use service::RemoteStoreService;

use async_trait::async_trait;
use shared::models::{Church, ChurchUpdate, Member, MemberUpdate};

use crate::AppResult;

/// Rows per insert chunk in bulk writes
pub const CHUNK_SIZE: usize = 50;

/// Seam over the relational backend, implemented by [`RemoteStoreService`]
/// and by in-memory fakes in store tests.
#[async_trait]
pub trait RemoteStore: Send + Sync {
    // ===== Members =====
    async fn read_members(&self) -> AppResult<Vec<Member>>;
    async fn write_member(&self, member: &Member) -> AppResult<Member>;
    async fn update_member(&self, id: &str, update: &MemberUpdate) -> AppResult<Member>;
    async fn delete_member(&self, id: &str) -> AppResult<()>;
    async fn insert_members_chunk(&self, chunk: &[Member]) -> AppResult<()>;
    async fn clear_members(&self) -> AppResult<()>;

    // ===== Churches =====
    async fn read_churches(&self) -> AppResult<Vec<Church>>;
    async fn write_church(&self, church: &Church) -> AppResult<Church>;
    async fn update_church(&self, id: &str, update: &ChurchUpdate) -> AppResult<Church>;
    async fn delete_church(&self, id: &str) -> AppResult<()>;
    async fn insert_churches_chunk(&self, chunk: &[Church]) -> AppResult<()>;
    async fn clear_churches(&self) -> AppResult<()>;
}
