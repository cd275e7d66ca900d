//! In-memory [`RemoteStore`] fake shared by store and sync tests

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use shared::models::{Church, ChurchUpdate, Member, MemberUpdate};
use shared::util::now_iso;

use crate::AppResult;
use crate::remote::RemoteStore;
use crate::utils::AppError;

/// Remote backend fake: rows live in a `Mutex<Vec>`, ids are assigned
/// sequentially, and failures can be injected per call family.
#[derive(Default)]
pub struct FakeRemote {
    pub members: Mutex<Vec<Member>>,
    pub churches: Mutex<Vec<Church>>,
    next_id: AtomicUsize,
    pub fail_reads: AtomicBool,
    pub fail_writes: AtomicBool,
    /// When set, chunk inserts fail after this many successes
    pub fail_chunks_after: AtomicUsize,
    pub chunk_calls: AtomicUsize,
}

impl FakeRemote {
    pub fn with_members(members: Vec<Member>) -> Self {
        let fake = Self::default();
        *fake.members.lock().unwrap() = members;
        fake.fail_chunks_after.store(usize::MAX, Ordering::SeqCst);
        fake
    }

    pub fn new() -> Self {
        Self::with_members(Vec::new())
    }

    fn assign_id(&self) -> String {
        format!("remote-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1)
    }

    fn check_read(&self) -> AppResult<()> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(AppError::remote("connection refused"));
        }
        Ok(())
    }

    fn check_write(&self) -> AppResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(AppError::remote("connection refused"));
        }
        Ok(())
    }

    fn check_chunk(&self) -> AppResult<()> {
        let done = self.chunk_calls.fetch_add(1, Ordering::SeqCst);
        if done >= self.fail_chunks_after.load(Ordering::SeqCst) {
            return Err(AppError::remote("timeout"));
        }
        Ok(())
    }
}

#[async_trait]
impl RemoteStore for FakeRemote {
    async fn read_members(&self) -> AppResult<Vec<Member>> {
        self.check_read()?;
        Ok(self.members.lock().unwrap().clone())
    }

    async fn write_member(&self, member: &Member) -> AppResult<Member> {
        self.check_write()?;
        let mut stored = member.clone();
        stored.id = self.assign_id();
        stored.data_cadastro = now_iso();
        stored.data_atualizacao = stored.data_cadastro.clone();
        self.members.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update_member(&self, id: &str, update: &MemberUpdate) -> AppResult<Member> {
        self.check_write()?;
        let mut members = self.members.lock().unwrap();
        let member = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| AppError::not_found(format!("membros id {id}")))?;
        member.apply(update.clone());
        member.data_atualizacao = now_iso();
        Ok(member.clone())
    }

    async fn delete_member(&self, id: &str) -> AppResult<()> {
        self.check_write()?;
        self.members.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }

    async fn insert_members_chunk(&self, chunk: &[Member]) -> AppResult<()> {
        self.check_chunk()?;
        let mut members = self.members.lock().unwrap();
        for member in chunk {
            let mut stored = member.clone();
            stored.id = self.assign_id();
            members.push(stored);
        }
        Ok(())
    }

    async fn clear_members(&self) -> AppResult<()> {
        self.check_write()?;
        self.members.lock().unwrap().clear();
        Ok(())
    }

    async fn read_churches(&self) -> AppResult<Vec<Church>> {
        self.check_read()?;
        Ok(self.churches.lock().unwrap().clone())
    }

    async fn write_church(&self, church: &Church) -> AppResult<Church> {
        self.check_write()?;
        let mut stored = church.clone();
        stored.id = self.assign_id();
        stored.data_cadastro = now_iso();
        stored.data_atualizacao = stored.data_cadastro.clone();
        self.churches.lock().unwrap().push(stored.clone());
        Ok(stored)
    }

    async fn update_church(&self, id: &str, update: &ChurchUpdate) -> AppResult<Church> {
        self.check_write()?;
        let mut churches = self.churches.lock().unwrap();
        let church = churches
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| AppError::not_found(format!("igrejas id {id}")))?;
        church.apply(update.clone());
        church.data_atualizacao = now_iso();
        Ok(church.clone())
    }

    async fn delete_church(&self, id: &str) -> AppResult<()> {
        self.check_write()?;
        self.churches.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn insert_churches_chunk(&self, chunk: &[Church]) -> AppResult<()> {
        self.check_chunk()?;
        let mut churches = self.churches.lock().unwrap();
        for church in chunk {
            let mut stored = church.clone();
            stored.id = self.assign_id();
            churches.push(stored);
        }
        Ok(())
    }

    async fn clear_churches(&self) -> AppResult<()> {
        self.check_write()?;
        self.churches.lock().unwrap().clear();
        Ok(())
    }
}
