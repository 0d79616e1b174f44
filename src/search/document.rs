//! Catalog documents and their engine encoding

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Trait for records stored as engine documents
pub trait SearchDocument: Sized {
    /// Encode as the engine's `_source` payload
    fn to_source(&self) -> Result<Value, serde_json::Error>;

    /// Decode a `_source` payload, never failing on odd content
    fn from_source(source: &Value) -> Self;
}

/// A catalog product. Identity is owned by the engine and never read here.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Product {
    pub name: String,
    pub price: i64,
    pub tag: String,
    pub description: String,
}

impl Product {
    pub fn new(
        name: impl Into<String>,
        price: i64,
        tag: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price,
            tag: tag.into(),
            description: description.into(),
        }
    }

    /// The product stored when `/index` is called without a body
    pub fn sample() -> Self {
        Self::new(
            "Iphone 14 Pro",
            1_000_000,
            "Smartphone",
            "Iphone 14 Pro with 1TB storage",
        )
    }
}

impl SearchDocument for Product {
    fn to_source(&self) -> Result<Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    fn from_source(source: &Value) -> Self {
        if let Ok(product) = serde_json::from_value::<Product>(source.clone()) {
            return product;
        }

        // Mistyped fields fall back to their zero value one by one.
        let Some(fields) = source.as_object() else {
            tracing::debug!(source = %source, "Hit source is not an object, using empty product");
            return Self::default();
        };

        Self {
            name: lenient_field(fields, "name"),
            price: lenient_field(fields, "price"),
            tag: lenient_field(fields, "tag"),
            description: lenient_field(fields, "description"),
        }
    }
}

fn lenient_field<T: DeserializeOwned + Default>(fields: &Map<String, Value>, key: &str) -> T {
    fields
        .get(key)
        .and_then(|value| serde_json::from_value(value.clone()).ok())
        .unwrap_or_default()
}
