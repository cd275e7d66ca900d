//! Application state: shared handles for every service

use std::path::Path;
use std::sync::Arc;

use shared::models::{SheetConnection, SheetSettings, TemplateSettings};
use tracing::{info, warn};

use crate::AppResult;
use crate::cache::CacheStorage;
use crate::core::Config;
use crate::documents::templates;
use crate::remote::{OfflineRemote, RemoteStore, RemoteStoreService};
use crate::sheets::{SheetStore, SheetSyncService};
use crate::stores::{ChurchStore, LoadingFlags, MemberStore};
use crate::sync::SyncOptions;
use crate::utils::AppError;

/// Shared application state, cheap to clone (everything behind `Arc`)
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub cache: CacheStorage,
    pub remote: Arc<dyn RemoteStore>,
    pub sheet: Arc<dyn SheetStore>,
    pub members: Arc<MemberStore>,
    pub churches: Arc<ChurchStore>,
    pub loading: Arc<LoadingFlags>,
}

impl AppState {
    /// Build the full service graph and load the working copies.
    ///
    /// Missing backend credentials downgrade to offline mode instead of
    /// failing startup; store init then falls back to the cache.
    pub async fn initialize(config: Config) -> AppResult<Self> {
        std::fs::create_dir_all(&config.work_dir)
            .map_err(|e| AppError::internal(format!("Failed to create work dir: {e}")))?;

        let cache = CacheStorage::open(Path::new(&config.work_dir).join("cache.redb"))?;

        let remote: Arc<dyn RemoteStore> =
            match RemoteStoreService::new(&config.remote_db_url, &config.remote_db_key) {
                Ok(service) => Arc::new(service),
                Err(e) => {
                    warn!(target: "core", "Starting in offline mode: {e}");
                    Arc::new(OfflineRemote)
                }
            };
        let sheet: Arc<dyn SheetStore> = Arc::new(SheetSyncService::new()?);

        let members = Arc::new(MemberStore::new(remote.clone(), cache.clone()));
        let churches = Arc::new(ChurchStore::new(remote.clone(), cache.clone()));
        let loading = Arc::new(LoadingFlags::default());

        loading.set("membros", true);
        members.init(SyncOptions::default()).await?;
        loading.set("membros", false);

        loading.set("igrejas", true);
        churches.init(SyncOptions::default()).await?;
        loading.set("igrejas", false);

        info!(target: "core", "Application state initialized");
        Ok(Self {
            config,
            cache,
            remote,
            sheet,
            members,
            churches,
            loading,
        })
    }

    /// Spreadsheet settings: saved values first, environment defaults for
    /// any connection left unconfigured
    pub fn sheet_settings(&self) -> AppResult<SheetSettings> {
        let mut settings = self.cache.get_sheet_settings()?.unwrap_or_default();
        if !settings.members.is_configured() {
            settings.members = SheetConnection {
                url: self.config.sheet_members_url.clone(),
                token: self.config.sheet_members_token.clone(),
            };
        }
        if !settings.churches.is_configured() {
            settings.churches = SheetConnection {
                url: self.config.sheet_churches_url.clone(),
                token: self.config.sheet_churches_token.clone(),
            };
        }
        Ok(settings)
    }

    /// Persist spreadsheet settings. A connection must be either fully
    /// configured (URL and token) or fully blank.
    pub fn save_sheet_settings(&self, settings: &SheetSettings) -> AppResult<()> {
        for (name, conn) in [("membros", &settings.members), ("igrejas", &settings.churches)] {
            let blank = conn.url.trim().is_empty() && conn.token.trim().is_empty();
            if !blank && !conn.is_configured() {
                return Err(AppError::validation(format!(
                    "Conexão de planilha ({name}) exige URL e token"
                )));
            }
        }
        self.cache.put_sheet_settings(settings)?;
        Ok(())
    }

    /// Document templates with built-in defaults for unset fields
    pub fn template_settings(&self) -> AppResult<TemplateSettings> {
        Ok(templates::with_defaults(
            self.cache.get_template_settings()?,
        ))
    }

    pub fn save_template_settings(&self, settings: &TemplateSettings) -> AppResult<()> {
        self.cache.put_template_settings(settings)?;
        Ok(())
    }
}
