use std::path::PathBuf;
use std::sync::Arc;

use crate::aggregator::Aggregator;
use crate::app::error::{EmberError, Result};
use crate::cache::StoryCache;
use crate::client::http::HttpClient;
use crate::client::HnClient;
use crate::config::Config;
use crate::store::sqlite::SqliteStore;

pub struct AppContext {
    pub client: Arc<dyn HnClient + Send + Sync>,
    pub cache: Arc<StoryCache>,
    pub aggregator: Arc<Aggregator>,
    pub store: Arc<SqliteStore>,
    pub config: Config,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let db_path = match config.db_path.clone() {
            Some(p) => p,
            None => Self::default_db_path()?,
        };

        let store = Arc::new(SqliteStore::new(&db_path)?);
        Self::with_store(config, store)
    }

    pub fn in_memory(config: Config) -> Result<Self> {
        let store = Arc::new(SqliteStore::in_memory()?);
        Self::with_store(config, store)
    }

    fn with_store(config: Config, store: Arc<SqliteStore>) -> Result<Self> {
        let client: Arc<dyn HnClient + Send + Sync> =
            Arc::new(HttpClient::with_base_url(&config.base_url));
        let cache = Arc::new(StoryCache::new());
        let aggregator = Arc::new(Aggregator::with_workers(
            client.clone(),
            cache.clone(),
            config.workers,
        ));

        Ok(Self {
            client,
            cache,
            aggregator,
            store,
            config,
        })
    }

    fn default_db_path() -> Result<PathBuf> {
        let data_dir = dirs::data_dir()
            .ok_or_else(|| EmberError::Config("Could not find data directory".into()))?;
        let ember_dir = data_dir.join("ember");
        std::fs::create_dir_all(&ember_dir)?;
        Ok(ember_dir.join("ember.db"))
    }
}
