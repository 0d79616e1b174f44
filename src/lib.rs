//! Catalog search service
//!
//! Manages a product collection inside an Elasticsearch-compatible engine and
//! serves free-text search over it.
//!
//! - **`search`**: engine client, request bodies, response decoding and the
//!   `CatalogStore` operations.
//! - **`api`**: axum router and handlers exposing `/create`, `/index` and `/search`.
//! - **`config`**: layered configuration (embedded defaults, file, environment).
//! - **`error`**: application error type and its HTTP mapping.

pub mod api;
pub mod config;
pub mod error;
pub mod search;
