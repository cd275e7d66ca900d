//! Local cache: redb-backed key-value mirror of the entity collections
//!
//! Best-effort durability and offline fallback. Every successful remote read
//! is mirrored here; every mutation re-serializes the whole collection back
//! to its key. No expiry, no versioning: a shape change in a cached entity
//! stays until the next successful remote pull overwrites the key.

use redb::{Database, ReadableDatabase, TableDefinition};
use shared::models::{Church, Member, SheetSettings, TemplateSettings};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

use crate::AppError;

/// Single cache table: key = collection/settings name, value = JSON
const CACHE_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("cache");

/// Cache key for the member collection
pub const KEY_MEMBROS: &str = "membros";
/// Cache key for the church collection
pub const KEY_IGREJAS: &str = "igrejas";
/// Cache key for document templates
pub const KEY_MODELOS: &str = "modelos_documentos";
/// Cache key for spreadsheet connection settings
pub const KEY_PLANILHA: &str = "config_planilha";
/// Cache key for the last successful sync timestamp
pub const KEY_LAST_SYNC: &str = "ultima_sincronizacao";

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<CacheError> for AppError {
    fn from(e: CacheError) -> Self {
        AppError::Cache(e.to_string())
    }
}

pub type CacheResult<T> = Result<T, CacheError>;

/// Key-value cache storage
#[derive(Clone)]
pub struct CacheStorage {
    db: Arc<Database>,
}

impl CacheStorage {
    /// Open or create the cache database
    pub fn open(path: impl AsRef<Path>) -> CacheResult<Self> {
        let db = Database::create(path)?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CACHE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Open in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> CacheResult<Self> {
        let db =
            Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;

        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(CACHE_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }

    /// Read and deserialize a value; `None` when the key was never written
    pub fn get_json<T: serde::de::DeserializeOwned>(&self, key: &str) -> CacheResult<Option<T>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(CACHE_TABLE)?;

        match table.get(key)? {
            Some(guard) => {
                let value: T = serde_json::from_slice(guard.value())?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    /// Serialize and store a value under `key`, replacing any previous value
    pub fn put_json<T: serde::Serialize>(&self, key: &str, value: &T) -> CacheResult<()> {
        let bytes = serde_json::to_vec(value)?;
        let write_txn = self.db.begin_write()?;
        {
            let mut table = write_txn.open_table(CACHE_TABLE)?;
            table.insert(key, bytes.as_slice())?;
        }
        write_txn.commit()?;
        Ok(())
    }

    // ========== Collection mirrors ==========

    pub fn get_members(&self) -> CacheResult<Option<Vec<Member>>> {
        self.get_json(KEY_MEMBROS)
    }

    pub fn put_members(&self, members: &[Member]) -> CacheResult<()> {
        self.put_json(KEY_MEMBROS, &members)
    }

    pub fn get_churches(&self) -> CacheResult<Option<Vec<Church>>> {
        self.get_json(KEY_IGREJAS)
    }

    pub fn put_churches(&self, churches: &[Church]) -> CacheResult<()> {
        self.put_json(KEY_IGREJAS, &churches)
    }

    // ========== Settings ==========

    pub fn get_template_settings(&self) -> CacheResult<Option<TemplateSettings>> {
        self.get_json(KEY_MODELOS)
    }

    pub fn put_template_settings(&self, settings: &TemplateSettings) -> CacheResult<()> {
        self.put_json(KEY_MODELOS, settings)
    }

    pub fn get_sheet_settings(&self) -> CacheResult<Option<SheetSettings>> {
        self.get_json(KEY_PLANILHA)
    }

    pub fn put_sheet_settings(&self, settings: &SheetSettings) -> CacheResult<()> {
        self.put_json(KEY_PLANILHA, settings)
    }

    // ========== Sync bookkeeping ==========

    pub fn get_last_sync(&self) -> CacheResult<Option<String>> {
        self.get_json(KEY_LAST_SYNC)
    }

    pub fn put_last_sync(&self, timestamp: &str) -> CacheResult<()> {
        self.put_json(KEY_LAST_SYNC, &timestamp)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_round_trip() {
        let cache = CacheStorage::open_in_memory().unwrap();

        let members = vec![Member {
            id: "1700000000000-a1b".into(),
            nome_completo: "Ana Silva".into(),
            ..Default::default()
        }];

        cache.put_members(&members).unwrap();
        let loaded = cache.get_members().unwrap().unwrap();
        assert_eq!(loaded, members);
    }

    #[test]
    fn missing_key_is_none() {
        let cache = CacheStorage::open_in_memory().unwrap();
        assert!(cache.get_members().unwrap().is_none());
        assert!(cache.get_last_sync().unwrap().is_none());
    }

    #[test]
    fn put_overwrites_wholesale() {
        let cache = CacheStorage::open_in_memory().unwrap();

        cache
            .put_members(&[Member {
                id: "1".into(),
                nome_completo: "Ana".into(),
                ..Default::default()
            }])
            .unwrap();
        cache
            .put_members(&[Member {
                id: "2".into(),
                nome_completo: "Bia".into(),
                ..Default::default()
            }])
            .unwrap();

        let loaded = cache.get_members().unwrap().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].nome_completo, "Bia");
    }

    #[test]
    fn settings_round_trip() {
        let cache = CacheStorage::open_in_memory().unwrap();

        let settings = SheetSettings {
            members: shared::models::SheetConnection {
                url: "https://sheet.example/api/v1/abc".into(),
                token: "tok".into(),
            },
            ..Default::default()
        };
        cache.put_sheet_settings(&settings).unwrap();
        assert_eq!(cache.get_sheet_settings().unwrap().unwrap(), settings);
    }

    #[test]
    fn on_disk_cache_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cache.redb");

        {
            let cache = CacheStorage::open(&path).unwrap();
            cache.put_last_sync("2026-01-01T00:00:00Z").unwrap();
        }

        let cache = CacheStorage::open(&path).unwrap();
        assert_eq!(
            cache.get_last_sync().unwrap().unwrap(),
            "2026-01-01T00:00:00Z"
        );
    }
}
