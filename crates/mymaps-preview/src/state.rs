//! State shared by the preview middleware.

use std::sync::Arc;

use crate::config::Config;
use crate::store::{DocumentStore, FirestoreClient};

/// Shared application state available to the preview middleware.
#[derive(Clone)]
pub struct AppState {
    /// Gateway configuration.
    pub config: Arc<Config>,

    /// Document store backing post, profile and place previews.
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    /// Create state backed by the Firestore project named in `config`.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let store = FirestoreClient::new(&config)?;

        tracing::info!(
            documents_url = %config.documents_url(),
            "document store client initialized"
        );

        Ok(Self::with_store(config, Arc::new(store)))
    }

    /// Create state around any store implementation.
    pub fn with_store(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config: Arc::new(config),
            store,
        }
    }
}
