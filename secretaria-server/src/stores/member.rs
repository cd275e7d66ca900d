//! Member store: remote-first CRUD over the in-memory working copy

use std::sync::Arc;

use shared::models::{Member, MemberCreate, MemberUpdate, idade_from};
use shared::util::{entity_id, now_iso};
use tokio::sync::RwLock;
use tracing::{info, warn};

use super::seed;
use crate::AppResult;
use crate::cache::CacheStorage;
use crate::remote::RemoteStore;
use crate::sync::{SyncOptions, execute};
use crate::utils::AppError;

pub struct MemberStore {
    remote: Arc<dyn RemoteStore>,
    cache: CacheStorage,
    members: RwLock<Vec<Member>>,
}

impl MemberStore {
    pub fn new(remote: Arc<dyn RemoteStore>, cache: CacheStorage) -> Self {
        Self {
            remote,
            cache,
            members: RwLock::new(Vec::new()),
        }
    }

    /// Load the working copy: remote first (with retry), cache on failure,
    /// seed data when both come up empty.
    pub async fn init(&self, options: SyncOptions) -> AppResult<()> {
        match execute("load members", options, || self.remote.read_members()).await {
            Ok(members) => {
                info!(target: "stores", "Loaded {} members from remote", members.len());
                self.cache.put_members(&members)?;
                *self.members.write().await = members;
            }
            Err(e) => {
                warn!(target: "stores", "Remote member load failed, using cache: {e}");
                let mut members = self.cache.get_members()?.unwrap_or_default();
                if members.is_empty() {
                    members = seed::sample_members();
                    self.cache.put_members(&members)?;
                }
                *self.members.write().await = members;
            }
        }
        Ok(())
    }

    pub async fn list(&self) -> Vec<Member> {
        self.members.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> AppResult<Member> {
        self.members
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Membro {id}")))
    }

    /// Create a member. The local id is a placeholder; the remote-assigned
    /// id from the insert representation is what gets stored.
    pub async fn create(&self, payload: MemberCreate) -> AppResult<Member> {
        if payload.nome_completo.trim().is_empty() {
            return Err(AppError::validation("Nome completo é obrigatório"));
        }

        let member = member_from_create(payload);
        let member = self.remote.write_member(&member).await?;

        let mut members = self.members.write().await;
        members.push(member.clone());
        self.cache.put_members(&members)?;
        Ok(member)
    }

    pub async fn update(&self, id: &str, update: MemberUpdate) -> AppResult<Member> {
        if !self.members.read().await.iter().any(|m| m.id == id) {
            return Err(AppError::not_found(format!("Membro {id}")));
        }

        let updated = self.remote.update_member(id, &update).await?;

        let mut members = self.members.write().await;
        if let Some(slot) = members.iter_mut().find(|m| m.id == id) {
            *slot = updated.clone();
        }
        self.cache.put_members(&members)?;
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.members.read().await.iter().any(|m| m.id == id) {
            return Err(AppError::not_found(format!("Membro {id}")));
        }

        self.remote.delete_member(id).await?;

        let mut members = self.members.write().await;
        members.retain(|m| m.id != id);
        self.cache.put_members(&members)?;
        Ok(())
    }

    /// Delete several members, one remote call per id. Best-effort: a
    /// failed id is logged and skipped, the rest still go through.
    pub async fn delete_many(&self, ids: &[String]) -> AppResult<usize> {
        let mut deleted = 0usize;
        for id in ids {
            match self.delete(id).await {
                Ok(()) => deleted += 1,
                Err(e) => warn!(target: "stores", "Failed to delete member {id}: {e}"),
            }
        }
        Ok(deleted)
    }

    /// Replace the whole working copy (bulk import confirmations)
    pub async fn replace_all(&self, members: Vec<Member>) -> AppResult<()> {
        self.cache.put_members(&members)?;
        *self.members.write().await = members;
        Ok(())
    }
}

fn member_from_create(payload: MemberCreate) -> Member {
    let now = now_iso();
    Member {
        id: entity_id(),
        idade: idade_from(&payload.data_nascimento),
        nome_completo: payload.nome_completo,
        data_nascimento: payload.data_nascimento,
        rg: payload.rg,
        cpf: payload.cpf,
        telefone: payload.telefone,
        email: payload.email,
        endereco: payload.endereco,
        numero: payload.numero,
        bairro: payload.bairro,
        cidade: payload.cidade,
        estado: payload.estado,
        cep: payload.cep,
        cidade_nascimento: payload.cidade_nascimento,
        estado_nascimento: payload.estado_nascimento,
        estado_civil: payload.estado_civil,
        profissao: payload.profissao,
        cargo_ministerial: payload.cargo_ministerial,
        data_batismo: payload.data_batismo,
        data_ordenacao: payload.data_ordenacao,
        igreja_batismo: payload.igreja_batismo,
        observacoes: payload.observacoes,
        foto: payload.foto,
        link_ficha: payload.link_ficha,
        link_carteirinha: payload.link_carteirinha,
        ativo: true,
        data_cadastro: now.clone(),
        data_atualizacao: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::testing::FakeRemote;
    use std::sync::atomic::Ordering;

    fn store_with(remote: FakeRemote) -> (MemberStore, Arc<FakeRemote>) {
        let remote = Arc::new(remote);
        let cache = CacheStorage::open_in_memory().unwrap();
        (MemberStore::new(remote.clone(), cache), remote)
    }

    fn member(id: &str, nome: &str) -> Member {
        Member {
            id: id.into(),
            nome_completo: nome.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn init_mirrors_remote_into_cache() {
        let (store, _remote) =
            store_with(FakeRemote::with_members(vec![member("r1", "Ana Silva")]));

        store.init(SyncOptions::none()).await.unwrap();

        assert_eq!(store.list().await.len(), 1);
        let cached = store.cache.get_members().unwrap().unwrap();
        assert_eq!(cached[0].nome_completo, "Ana Silva");
    }

    #[tokio::test]
    async fn init_falls_back_to_cache_when_remote_is_down() {
        let (store, remote) = store_with(FakeRemote::with_members(vec![member("r1", "Ana")]));
        store
            .cache
            .put_members(&[member("c1", "Do Cache")])
            .unwrap();
        remote.fail_reads.store(true, Ordering::SeqCst);

        store.init(SyncOptions::none()).await.unwrap();

        let members = store.list().await;
        assert_eq!(members.len(), 1);
        assert_eq!(members[0].nome_completo, "Do Cache");
    }

    #[tokio::test]
    async fn init_seeds_when_remote_down_and_cache_empty() {
        let (store, remote) = store_with(FakeRemote::new());
        remote.fail_reads.store(true, Ordering::SeqCst);

        store.init(SyncOptions::none()).await.unwrap();

        let members = store.list().await;
        assert!(!members.is_empty());
        // Seed is persisted so the next offline start sees the same data
        assert_eq!(
            store.cache.get_members().unwrap().unwrap().len(),
            members.len()
        );
    }

    #[tokio::test]
    async fn create_adopts_remote_assigned_id() {
        let (store, _remote) = store_with(FakeRemote::new());
        store.init(SyncOptions::none()).await.unwrap();

        let created = store
            .create(MemberCreate {
                nome_completo: "Ana Silva".into(),
                data_nascimento: "1990-06-15".into(),
                ..Default::default()
            })
            .await
            .unwrap();

        assert_eq!(created.id, "remote-1");
        assert!(created.idade >= 30);
        assert!(created.ativo);
        assert!(!created.data_cadastro.is_empty());
        assert_eq!(store.list().await.len(), 1);
    }

    #[tokio::test]
    async fn create_rejects_blank_name() {
        let (store, _remote) = store_with(FakeRemote::new());

        let err = store
            .create(MemberCreate {
                nome_completo: "   ".into(),
                ..Default::default()
            })
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation(_)));
    }

    #[tokio::test]
    async fn create_leaves_local_state_untouched_when_remote_fails() {
        let (store, remote) = store_with(FakeRemote::new());
        store.init(SyncOptions::none()).await.unwrap();
        remote.fail_writes.store(true, Ordering::SeqCst);

        let result = store
            .create(MemberCreate {
                nome_completo: "Ana".into(),
                ..Default::default()
            })
            .await;

        assert!(result.is_err());
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn update_merges_and_persists() {
        let (store, _remote) =
            store_with(FakeRemote::with_members(vec![member("r1", "Ana Silva")]));
        store.init(SyncOptions::none()).await.unwrap();

        let updated = store
            .update(
                "r1",
                MemberUpdate {
                    telefone: Some("11 98888-1111".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.nome_completo, "Ana Silva");
        assert_eq!(updated.telefone, "11 98888-1111");
        let cached = store.cache.get_members().unwrap().unwrap();
        assert_eq!(cached[0].telefone, "11 98888-1111");
    }

    #[tokio::test]
    async fn update_unknown_id_is_not_found() {
        let (store, _remote) = store_with(FakeRemote::new());
        store.init(SyncOptions::none()).await.unwrap();

        let err = store
            .update("nope", MemberUpdate::default())
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[tokio::test]
    async fn delete_many_skips_failures_and_counts_the_rest() {
        let (store, _remote) = store_with(FakeRemote::with_members(vec![
            member("r1", "Ana"),
            member("r2", "Bia"),
        ]));
        store.init(SyncOptions::none()).await.unwrap();

        let deleted = store
            .delete_many(&["r1".into(), "missing".into(), "r2".into()])
            .await
            .unwrap();

        assert_eq!(deleted, 2);
        assert!(store.list().await.is_empty());
    }
}
