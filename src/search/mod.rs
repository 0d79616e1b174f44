//! Product catalog search backed by an external search engine
//!
//! This module owns the translation between catalog operations and the
//! engine's JSON HTTP API:
//!
//! - **Collection creation**: fixed settings/mapping document
//! - **Document indexing**: products encoded as `_source` documents
//! - **Free-text search**: phrase-prefix `multi_match` over name, tag and description
//! - **Response decoding**: typed `hits.hits[]._source` envelope, relevance order kept
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │        CatalogStore (SearchService)             │
//! ├─────────────────────────────────────────────────┤
//! │  - create_collection()  - index_document()      │
//! │  - search()                                     │
//! └─────────────────────────────────────────────────┘
//!           │ query.rs bodies      ▲ response.rs decoding
//!           ▼                      │
//! ┌─────────────────────────────────────────────────┐
//! │              EngineClient                       │
//! ├─────────────────────────────────────────────────┤
//! │  - shared reqwest::Client, per-request deadline │
//! │  - engine error envelope parsing                │
//! └─────────────────────────────────────────────────┘
//!                      │
//!                      ▼
//!        Elasticsearch-compatible engine
//! ```
//!
//! # Example
//!
//! ```no_run
//! use catalog_search::search::{CatalogStore, Product, SearchConfig, SearchService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let service = SearchService::new(SearchConfig::default())?;
//!
//!     service.create_collection("catalog").await?;
//!     service.index_document("catalog", &Product::sample()).await?;
//!
//!     let products = service.search("catalog", "Iphone").await?;
//!     println!("Found {} products", products.len());
//!
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod document;
mod error;
mod query;
mod response;
mod service;

pub use client::EngineClient;
pub use config::{SearchConfig, SearchConfigBuilder};
pub use document::{Product, SearchDocument};
pub use error::{SearchError, SearchResult};
pub use query::{CollectionSettings, MatchType, SearchQuery, SEARCH_FIELDS};
pub use response::{decode_search_response, SearchOutcome, TotalHits};
pub use service::{CatalogStore, SearchService};
