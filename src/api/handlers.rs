use crate::api::AppState;
use crate::error::{AppError, Result};
use crate::search::Product;
use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Plain-text landing route
pub async fn root() -> &'static str {
    "catalog-search is running"
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.started_at.elapsed().as_secs(),
    })
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_seconds: u64,
}

#[derive(Debug, Deserialize)]
pub struct CollectionParams {
    /// Target collection; the configured one when absent
    pub index: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text query, forwarded as-is (empty when absent)
    #[serde(default)]
    pub search: String,
    pub index: Option<String>,
}

/// Create a collection
pub async fn create_collection(
    State(state): State<AppState>,
    Query(params): Query<CollectionParams>,
) -> Result<String> {
    let name = state.collection_or_default(params.index);

    state
        .store
        .create_collection(&name)
        .await
        .map_err(|e| state.search_error(e))?;

    Ok(format!("collection {} created", name))
}

/// Index a product. An empty body stores the sample product.
pub async fn index_document(
    State(state): State<AppState>,
    Query(params): Query<CollectionParams>,
    body: Bytes,
) -> Result<String> {
    let product = if body.iter().all(u8::is_ascii_whitespace) {
        Product::sample()
    } else {
        serde_json::from_slice::<Product>(&body)
            .map_err(|e| AppError::Validation(format!("product body: {}", e)))?
    };

    let collection = state.target_collection(params.index);

    state
        .store
        .index_document(&collection, &product)
        .await
        .map_err(|e| state.search_error(e))?;

    Ok(format!("product {} indexed into {}", product.name, collection))
}

/// Free-text product search
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<Vec<Product>>> {
    let collection = state.target_collection(params.index);

    let products = state
        .store
        .search(&collection, &params.search)
        .await
        .map_err(|e| state.search_error(e))?;

    Ok(Json(products))
}
