//! Church store: same remote-first shape as the member store, minus seeding

use std::sync::Arc;

use shared::models::{Church, ChurchCreate, ChurchUpdate};
use shared::util::{entity_id, now_iso};
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::AppResult;
use crate::cache::CacheStorage;
use crate::remote::RemoteStore;
use crate::sync::{SyncOptions, execute};
use crate::utils::AppError;

pub struct ChurchStore {
    remote: Arc<dyn RemoteStore>,
    cache: CacheStorage,
    churches: RwLock<Vec<Church>>,
}

impl ChurchStore {
    pub fn new(remote: Arc<dyn RemoteStore>, cache: CacheStorage) -> Self {
        Self {
            remote,
            cache,
            churches: RwLock::new(Vec::new()),
        }
    }

    /// Load the working copy: remote first (with retry), cache on failure.
    /// No seed data for churches; an empty list is a valid start.
    pub async fn init(&self, options: SyncOptions) -> AppResult<()> {
        match execute("load churches", options, || self.remote.read_churches()).await {
            Ok(churches) => {
                info!(target: "stores", "Loaded {} churches from remote", churches.len());
                self.cache.put_churches(&churches)?;
                *self.churches.write().await = churches;
            }
            Err(e) => {
                warn!(target: "stores", "Remote church load failed, using cache: {e}");
                let churches = self.cache.get_churches()?.unwrap_or_default();
                *self.churches.write().await = churches;
            }
        }
        Ok(())
    }

    pub async fn list(&self) -> Vec<Church> {
        self.churches.read().await.clone()
    }

    pub async fn get(&self, id: &str) -> AppResult<Church> {
        self.churches
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Igreja {id}")))
    }

    pub async fn create(&self, payload: ChurchCreate) -> AppResult<Church> {
        if payload.nome.trim().is_empty() {
            return Err(AppError::validation("Nome da igreja é obrigatório"));
        }

        let church = church_from_create(payload);
        let church = self.remote.write_church(&church).await?;

        let mut churches = self.churches.write().await;
        churches.push(church.clone());
        self.cache.put_churches(&churches)?;
        Ok(church)
    }

    pub async fn update(&self, id: &str, update: ChurchUpdate) -> AppResult<Church> {
        if !self.churches.read().await.iter().any(|c| c.id == id) {
            return Err(AppError::not_found(format!("Igreja {id}")));
        }

        let updated = self.remote.update_church(id, &update).await?;

        let mut churches = self.churches.write().await;
        if let Some(slot) = churches.iter_mut().find(|c| c.id == id) {
            *slot = updated.clone();
        }
        self.cache.put_churches(&churches)?;
        Ok(updated)
    }

    pub async fn delete(&self, id: &str) -> AppResult<()> {
        if !self.churches.read().await.iter().any(|c| c.id == id) {
            return Err(AppError::not_found(format!("Igreja {id}")));
        }

        self.remote.delete_church(id).await?;

        let mut churches = self.churches.write().await;
        churches.retain(|c| c.id != id);
        self.cache.put_churches(&churches)?;
        Ok(())
    }

    /// Replace the whole working copy (bulk import confirmations)
    pub async fn replace_all(&self, churches: Vec<Church>) -> AppResult<()> {
        self.cache.put_churches(&churches)?;
        *self.churches.write().await = churches;
        Ok(())
    }
}

fn church_from_create(payload: ChurchCreate) -> Church {
    let now = now_iso();
    Church {
        id: entity_id(),
        classificacao: payload.classificacao,
        nome: payload.nome,
        tipo: payload.tipo,
        endereco: payload.endereco,
        pastor: payload.pastor,
        membros_iniciais: payload.membros_iniciais,
        membros_atuais: payload.membros_atuais,
        almas_batizadas: payload.almas_batizadas,
        tem_escola_criancas: payload.tem_escola_criancas,
        criancas_quantidade: payload.criancas_quantidade,
        dias_funcionamento: payload.dias_funcionamento,
        data_cadastro: now.clone(),
        data_atualizacao: now,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stores::testing::FakeRemote;
    use shared::models::Pastor;
    use std::sync::atomic::Ordering;

    fn store_with(remote: FakeRemote) -> (ChurchStore, Arc<FakeRemote>) {
        let remote = Arc::new(remote);
        let cache = CacheStorage::open_in_memory().unwrap();
        (ChurchStore::new(remote.clone(), cache), remote)
    }

    #[tokio::test]
    async fn init_without_remote_or_cache_yields_empty_list() {
        let (store, remote) = store_with(FakeRemote::new());
        remote.fail_reads.store(true, Ordering::SeqCst);

        store.init(SyncOptions::none()).await.unwrap();
        assert!(store.list().await.is_empty());
    }

    #[tokio::test]
    async fn create_and_update_round_trip() {
        let (store, _remote) = store_with(FakeRemote::new());
        store.init(SyncOptions::none()).await.unwrap();

        let created = store
            .create(ChurchCreate {
                nome: "Igreja Vila Nova".into(),
                tipo: "Congregação".into(),
                pastor: Pastor {
                    nome: "Pr. João".into(),
                    ..Default::default()
                },
                ..Default::default()
            })
            .await
            .unwrap();
        assert_eq!(created.id, "remote-1");

        let updated = store
            .update(
                &created.id,
                ChurchUpdate {
                    membros_atuais: Some(63),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.membros_atuais, 63);
        assert_eq!(updated.pastor.nome, "Pr. João");
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found() {
        let (store, _remote) = store_with(FakeRemote::new());
        store.init(SyncOptions::none()).await.unwrap();

        let err = store.delete("nope").await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
