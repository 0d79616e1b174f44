pub mod handlers;
pub mod routes;

pub use routes::*;

use crate::error::AppError;
use crate::search::{CatalogStore, SearchError};
use std::sync::Arc;
use std::time::Instant;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CatalogStore>,
    /// Collection used when a request does not name one
    pub collection: String,
    pub expose_engine_errors: bool,
    pub started_at: Instant,
}

impl AppState {
    pub fn new(store: Arc<dyn CatalogStore>, collection: impl Into<String>) -> Self {
        Self {
            store,
            collection: collection.into(),
            expose_engine_errors: true,
            started_at: Instant::now(),
        }
    }

    /// Hide engine error text from clients
    pub fn with_expose_engine_errors(mut self, expose: bool) -> Self {
        self.expose_engine_errors = expose;
        self
    }

    /// Pick the requested collection or fall back to the configured one.
    /// An empty name is kept as-is.
    pub fn collection_or_default(&self, requested: Option<String>) -> String {
        requested.unwrap_or_else(|| self.collection.clone())
    }

    /// Like `collection_or_default`, but an empty name also falls back to
    /// the configured collection
    pub fn target_collection(&self, requested: Option<String>) -> String {
        self.collection_or_default(requested.filter(|name| !name.is_empty()))
    }

    /// Convert a search failure into the error returned to the client
    pub fn search_error(&self, err: SearchError) -> AppError {
        if self.expose_engine_errors {
            return AppError::Search(err);
        }

        tracing::error!(
            error_code = err.kind(),
            error = %err,
            "Engine failure hidden from client"
        );
        AppError::Redacted
    }
}
