use std::path::Path;
use std::sync::Arc;

use surgicode_onboarding::OnboardingSession;
use surgicode_storage::{LocalProgressStore, MemoryProgressStore, ProgressStore, S3ProgressStore};
use surgicode_tutorials::Catalog;
use tokio::sync::Mutex;

use crate::config::{self, AppConfig, ProgressBackend};
use crate::telemetry;

/// Process-wide state handed to every command.
///
/// The session is `None` until a user signs in. There is at most one.
pub struct AppState {
    pub catalog: &'static Catalog,
    pub store: Arc<dyn ProgressStore>,
    pub session: Arc<Mutex<Option<OnboardingSession>>>,
}

impl AppState {
    pub fn new(store: Arc<dyn ProgressStore>) -> Self {
        Self {
            catalog: surgicode_tutorials::builtin(),
            store,
            session: Arc::new(Mutex::new(None)),
        }
    }

    /// Startup from the platform config directory.
    pub async fn load() -> eyre::Result<Self> {
        Self::load_in(&config::config_dir()?).await
    }

    /// Load config from `dir`, install logging, then build the store.
    pub async fn load_in(dir: &Path) -> eyre::Result<Self> {
        let config = config::load_or_default(dir)?;
        telemetry::init_tracing(&config)?;
        Self::from_config(&config).await
    }

    pub async fn from_config(config: &AppConfig) -> eyre::Result<Self> {
        let store = build_store(&config.progress).await?;
        Ok(Self::new(store))
    }
}

/// Construct the progress store selected in config.
pub async fn build_store(backend: &ProgressBackend) -> eyre::Result<Arc<dyn ProgressStore>> {
    let store: Arc<dyn ProgressStore> = match backend {
        ProgressBackend::Local { dir } => {
            let dir = match dir {
                Some(dir) => dir.clone(),
                None => config::default_progress_dir()?,
            };
            tracing::info!(dir = %dir.display(), "using local progress store");
            Arc::new(LocalProgressStore::new(dir))
        }
        ProgressBackend::S3 { region, bucket } => {
            let client = surgicode_storage::client::build_client_for_region(region).await;
            tracing::info!(%region, %bucket, "using S3 progress store");
            Arc::new(S3ProgressStore::new(client, bucket.clone()))
        }
        ProgressBackend::Memory => {
            tracing::info!("using in-memory progress store");
            Arc::new(MemoryProgressStore::new())
        }
    };
    Ok(store)
}
