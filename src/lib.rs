pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod store;
pub mod validation;

use std::sync::Arc;

use config::Config;
use store::ContentStore;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub store: ContentStore,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(store: ContentStore, config: Config) -> Self {
        Self { store, config: Arc::new(config) }
    }
}
