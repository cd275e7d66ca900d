//! Null remote used when the backend connection is not configured
//!
//! Every call fails with a configuration error, which is non-transient:
//! store init falls straight back to the cache instead of burning retries.

use async_trait::async_trait;
use shared::models::{Church, ChurchUpdate, Member, MemberUpdate};

use super::RemoteStore;
use crate::AppResult;
use crate::utils::AppError;

pub struct OfflineRemote;

fn unavailable<T>() -> AppResult<T> {
    Err(AppError::configuration(
        "Remote store is not configured (REMOTE_DB_URL / REMOTE_DB_KEY)",
    ))
}

#[async_trait]
impl RemoteStore for OfflineRemote {
    async fn read_members(&self) -> AppResult<Vec<Member>> {
        unavailable()
    }

    async fn write_member(&self, _member: &Member) -> AppResult<Member> {
        unavailable()
    }

    async fn update_member(&self, _id: &str, _update: &MemberUpdate) -> AppResult<Member> {
        unavailable()
    }

    async fn delete_member(&self, _id: &str) -> AppResult<()> {
        unavailable()
    }

    async fn insert_members_chunk(&self, _chunk: &[Member]) -> AppResult<()> {
        unavailable()
    }

    async fn clear_members(&self) -> AppResult<()> {
        unavailable()
    }

    async fn read_churches(&self) -> AppResult<Vec<Church>> {
        unavailable()
    }

    async fn write_church(&self, _church: &Church) -> AppResult<Church> {
        unavailable()
    }

    async fn update_church(&self, _id: &str, _update: &ChurchUpdate) -> AppResult<Church> {
        unavailable()
    }

    async fn delete_church(&self, _id: &str) -> AppResult<()> {
        unavailable()
    }

    async fn insert_churches_chunk(&self, _chunk: &[Church]) -> AppResult<()> {
        unavailable()
    }

    async fn clear_churches(&self) -> AppResult<()> {
        unavailable()
    }
}
