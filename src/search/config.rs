//! Search engine connection configuration

use serde::{Deserialize, Serialize};

/// Connection and behavior settings for the external search engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Base URL of the engine's HTTP API
    #[serde(default = "default_url")]
    pub url: String,

    /// Collection used when a request does not name one
    #[serde(default = "default_collection")]
    pub collection: String,

    /// Deadline applied to every outbound engine request (seconds)
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Shard count sent with the collection settings on creation
    #[serde(default = "default_number_of_shards")]
    pub number_of_shards: u32,

    /// Wait for the engine to refresh after indexing so the document is
    /// immediately searchable
    #[serde(default)]
    pub refresh_on_index: bool,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            collection: default_collection(),
            timeout_secs: default_timeout_secs(),
            number_of_shards: default_number_of_shards(),
            refresh_on_index: false,
        }
    }
}

fn default_url() -> String {
    "http://localhost:9200".to_string()
}

fn default_collection() -> String {
    "catalog".to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

fn default_number_of_shards() -> u32 {
    1
}

/// Builder for SearchConfig
pub struct SearchConfigBuilder {
    config: SearchConfig,
}

impl SearchConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: SearchConfig::default(),
        }
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.config.collection = collection.into();
        self
    }

    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.config.timeout_secs = secs;
        self
    }

    pub fn number_of_shards(mut self, shards: u32) -> Self {
        self.config.number_of_shards = shards;
        self
    }

    pub fn refresh_on_index(mut self, enabled: bool) -> Self {
        self.config.refresh_on_index = enabled;
        self
    }

    pub fn build(self) -> SearchConfig {
        self.config
    }
}

impl Default for SearchConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
