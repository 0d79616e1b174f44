//! Typed view of the engine's search response envelope

use crate::search::document::{Product, SearchDocument};
use crate::search::error::{SearchError, SearchResult};
use serde::Deserialize;
use serde_json::Value;

/// Top level of a `_search` response. Only `hits.hits` is mandatory.
#[derive(Debug, Deserialize)]
pub struct SearchEnvelope {
    #[serde(default)]
    pub took: Option<u64>,
    #[serde(default)]
    pub timed_out: Option<bool>,
    pub hits: HitsEnvelope,
}

#[derive(Debug, Deserialize)]
pub struct HitsEnvelope {
    #[serde(default)]
    pub total: Option<TotalHits>,
    pub hits: Vec<Hit>,
}

/// Total hit count, either the tracked object form or a bare number
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum TotalHits {
    Tracked { value: u64, relation: String },
    Count(u64),
}

impl TotalHits {
    pub fn value(&self) -> u64 {
        match self {
            TotalHits::Tracked { value, .. } => *value,
            TotalHits::Count(value) => *value,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct Hit {
    #[serde(rename = "_source", default)]
    pub source: Option<Value>,
}

/// Decoded search results in engine relevance order
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    pub products: Vec<Product>,
    pub total: Option<u64>,
    pub took_ms: Option<u64>,
    pub timed_out: bool,
}

/// Decode a raw `_search` response body.
///
/// Non-JSON bodies are encoding failures; JSON that lacks `hits.hits` is a
/// shape mismatch. Hit order is preserved.
pub fn decode_search_response(body: &str) -> SearchResult<SearchOutcome> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| SearchError::Encoding(format!("search response is not JSON: {}", e)))?;

    let envelope: SearchEnvelope = serde_json::from_value(value)
        .map_err(|e| SearchError::ShapeMismatch(format!("expected hits.hits array: {}", e)))?;

    let products = envelope
        .hits
        .hits
        .iter()
        .map(|hit| match &hit.source {
            Some(source) => Product::from_source(source),
            None => Product::default(),
        })
        .collect();

    Ok(SearchOutcome {
        products,
        total: envelope.hits.total.as_ref().map(TotalHits::value),
        took_ms: envelope.took,
        timed_out: envelope.timed_out.unwrap_or(false),
    })
}
