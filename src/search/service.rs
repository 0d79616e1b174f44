//! Catalog operations against the search engine

use crate::search::client::EngineClient;
use crate::search::config::SearchConfig;
use crate::search::document::{Product, SearchDocument};
use crate::search::error::SearchResult;
use crate::search::query::{CollectionSettings, SearchQuery};
use crate::search::response::decode_search_response;
use async_trait::async_trait;
use serde::Deserialize;

/// Operations the HTTP layer needs from a catalog backend
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Create a collection. Fails if it already exists.
    async fn create_collection(&self, name: &str) -> SearchResult<()>;

    /// Store one product in a collection
    async fn index_document(&self, collection: &str, product: &Product) -> SearchResult<()>;

    /// Phrase-prefix search over name, tag and description
    async fn search(&self, collection: &str, text: &str) -> SearchResult<Vec<Product>>;
}

/// Acknowledgement returned by the engine for writes
#[derive(Debug, Default, Deserialize)]
struct WriteAck {
    #[serde(default, rename = "_id")]
    id: Option<String>,
    #[serde(default)]
    result: Option<String>,
    #[serde(default)]
    acknowledged: Option<bool>,
}

fn parse_ack(body: &str) -> WriteAck {
    serde_json::from_str(body).unwrap_or_default()
}

/// Catalog backed by an Elasticsearch-compatible engine
pub struct SearchService {
    client: EngineClient,
    config: SearchConfig,
}

impl SearchService {
    /// Create the service and its shared engine client
    pub fn new(config: SearchConfig) -> SearchResult<Self> {
        let client = EngineClient::new(&config)?;

        Ok(Self { client, config })
    }

    pub fn client(&self) -> &EngineClient {
        &self.client
    }
}

#[async_trait]
impl CatalogStore for SearchService {
    async fn create_collection(&self, name: &str) -> SearchResult<()> {
        let settings = CollectionSettings::placeholder(self.config.number_of_shards);

        let body = self.client.create_index(name, &settings).await.map_err(|e| {
            tracing::warn!(collection = %name, error = %e, "Failed to create collection");
            e
        })?;

        let ack = parse_ack(&body);
        tracing::info!(
            collection = %name,
            acknowledged = ?ack.acknowledged,
            "Collection created"
        );
        Ok(())
    }

    async fn index_document(&self, collection: &str, product: &Product) -> SearchResult<()> {
        let source = product.to_source()?;

        let body = self
            .client
            .index_document(collection, &source, self.config.refresh_on_index)
            .await
            .map_err(|e| {
                tracing::warn!(collection = %collection, error = %e, "Failed to index document");
                e
            })?;

        let ack = parse_ack(&body);
        tracing::debug!(
            collection = %collection,
            document_id = ?ack.id,
            result = ?ack.result,
            "Document indexed"
        );
        Ok(())
    }

    async fn search(&self, collection: &str, text: &str) -> SearchResult<Vec<Product>> {
        let query = SearchQuery::new(text);

        let body = self
            .client
            .search(collection, &query.to_body())
            .await
            .map_err(|e| {
                tracing::warn!(collection = %collection, error = %e, "Search request failed");
                e
            })?;

        let outcome = decode_search_response(&body)?;
        if outcome.timed_out {
            tracing::warn!(
                collection = %collection,
                query = %text,
                "Engine search timed out, results may be partial"
            );
        }
        tracing::debug!(
            collection = %collection,
            query = %text,
            returned = outcome.products.len(),
            total_hits = ?outcome.total,
            took_ms = ?outcome.took_ms,
            "Search completed"
        );

        Ok(outcome.products)
    }
}
