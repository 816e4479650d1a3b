use std::sync::Arc;

use renzi_config::Config;
use renzi_core::ProgressStore;
use tokio::sync::RwLock;

/// Shared application state. The `RwLock` around the progress store
/// serializes the add/remove/streak operations across handler tasks.
pub struct AppState {
    pub config: Arc<RwLock<Config>>,
    pub progress: RwLock<ProgressStore>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            progress: RwLock::new(ProgressStore::new()),
        }
    }
}
