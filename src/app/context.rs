use crate::domain::AppConfig;
use crate::ports::{GenerationClient, KeyValueStore};

/// Application context holding dependencies for controller actions.
pub struct AppContext<S: KeyValueStore, G: GenerationClient> {
    store: S,
    client: G,
    config: AppConfig,
}

impl<S: KeyValueStore, G: GenerationClient> AppContext<S, G> {
    /// Create a new application context.
    pub fn new(store: S, client: G, config: AppConfig) -> Self {
        Self { store, client, config }
    }

    /// Get a reference to the persistent store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get a reference to the generation client.
    pub fn client(&self) -> &G {
        &self.client
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
