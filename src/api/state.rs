use std::sync::Arc;

use crate::config::Config;
use crate::engine::{Registry, SearchParams};
use crate::services::InventoryStore;

/// Shared application state
///
/// The registry is initialized once and read-only afterwards, so concurrent
/// requests share it without locking.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
    pub inventory: Arc<dyn InventoryStore>,
    pub params: SearchParams,
    pub archive_base_url: String,
}

impl AppState {
    pub fn new(config: &Config, inventory: Arc<dyn InventoryStore>) -> Self {
        Self {
            registry: Arc::new(Registry::new()),
            inventory,
            params: config.search_params(),
            archive_base_url: config.archive_base_url.clone(),
        }
    }
}
