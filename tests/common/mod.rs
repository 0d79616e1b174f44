//! Shared fixtures for catalog search tests

#![allow(dead_code)]

use catalog_search::search::{Product, SearchConfig, SearchService};
use serde_json::{json, Value};

/// Build a `_search` response body whose hits carry the given sources,
/// scored in descending order
pub fn hits_body(sources: &[Value]) -> String {
    let hits: Vec<Value> = sources
        .iter()
        .enumerate()
        .map(|(i, source)| {
            json!({
                "_index": "catalog",
                "_id": format!("doc-{}", i),
                "_score": 10.0 - i as f64,
                "_source": source,
            })
        })
        .collect();

    let max_score = if hits.is_empty() { Value::Null } else { json!(10.0) };

    json!({
        "took": 2,
        "timed_out": false,
        "_shards": { "total": 1, "successful": 1, "skipped": 0, "failed": 0 },
        "hits": {
            "total": { "value": hits.len(), "relation": "eq" },
            "max_score": max_score,
            "hits": hits,
        }
    })
    .to_string()
}

/// Engine error body in the standard envelope
pub fn error_body(error_type: &str, reason: &str, status: u16) -> String {
    json!({
        "error": {
            "root_cause": [{ "type": error_type, "reason": reason }],
            "type": error_type,
            "reason": reason,
        },
        "status": status,
    })
    .to_string()
}

/// Search service pointed at a mock engine
pub fn service_for(url: &str) -> SearchService {
    let config = SearchConfig {
        url: url.to_string(),
        timeout_secs: 5,
        ..Default::default()
    };

    SearchService::new(config).expect("valid engine config")
}

pub fn product_json(product: &Product) -> Value {
    serde_json::to_value(product).expect("product serializes")
}
