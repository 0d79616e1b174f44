//! HTTP client for the external search engine

use crate::search::config::SearchConfig;
use crate::search::error::{SearchError, SearchResult};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Error envelope returned by the engine on non-2xx responses
#[derive(Debug, Deserialize)]
struct EngineErrorEnvelope {
    error: EngineErrorBody,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum EngineErrorBody {
    Detailed {
        #[serde(rename = "type")]
        error_type: String,
        #[serde(default)]
        reason: Option<String>,
    },
    Message(String),
}

/// Shared handle to the engine's JSON HTTP API.
///
/// Cloning is cheap; all clones share one connection pool.
#[derive(Clone)]
pub struct EngineClient {
    client: Client,
    base_url: Url,
    timeout: Duration,
}

impl EngineClient {
    /// Create a client for the engine described by `config`
    pub fn new(config: &SearchConfig) -> SearchResult<Self> {
        let base_url = Url::parse(&config.url).map_err(|e| {
            SearchError::InvalidConfiguration(format!("invalid engine URL {:?}: {}", config.url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(SearchError::InvalidConfiguration(format!(
                "engine URL {:?} cannot carry a path",
                config.url
            )));
        }

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("catalog-search/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| {
                SearchError::InvalidConfiguration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// `PUT /{name}` with the given settings body
    pub async fn create_index<B: Serialize + ?Sized>(&self, name: &str, body: &B) -> SearchResult<String> {
        let url = self.endpoint(&[name])?;
        self.execute(self.request(Method::PUT, url).json(body)).await
    }

    /// `POST /{collection}/_doc`, optionally waiting for a refresh
    pub async fn index_document<B: Serialize + ?Sized>(
        &self,
        collection: &str,
        document: &B,
        refresh: bool,
    ) -> SearchResult<String> {
        let mut url = self.endpoint(&[collection, "_doc"])?;
        if refresh {
            url.query_pairs_mut().append_pair("refresh", "wait_for");
        }
        self.execute(self.request(Method::POST, url).json(document)).await
    }

    /// `POST /{collection}/_search?track_total_hits=true`
    pub async fn search<B: Serialize + ?Sized>(&self, collection: &str, body: &B) -> SearchResult<String> {
        let mut url = self.endpoint(&[collection, "_search"])?;
        url.query_pairs_mut().append_pair("track_total_hits", "true");
        self.execute(self.request(Method::POST, url).json(body)).await
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        self.client
            .request(method, url)
            .timeout(self.timeout)
            .header("Accept", "application/json")
    }

    /// Build a URL below the base, percent-encoding each segment
    fn endpoint(&self, segments: &[&str]) -> SearchResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                SearchError::InvalidConfiguration(format!(
                    "engine URL {} cannot carry a path",
                    self.base_url
                ))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Send the request and return the body of a 2xx response
    async fn execute(&self, request: RequestBuilder) -> SearchResult<String> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(engine_error(status.as_u16(), &body));
        }

        Ok(body)
    }
}

/// Turn a non-2xx response into `SearchError::Engine`, keeping the engine's
/// error type and reason when the body has the standard envelope
fn engine_error(status: u16, body: &str) -> SearchError {
    match serde_json::from_str::<EngineErrorEnvelope>(body) {
        Ok(EngineErrorEnvelope {
            error: EngineErrorBody::Detailed { error_type, reason },
        }) => SearchError::Engine {
            status,
            error_type,
            reason: reason.unwrap_or_default(),
        },
        Ok(EngineErrorEnvelope {
            error: EngineErrorBody::Message(reason),
        }) => SearchError::Engine {
            status,
            error_type: "error".to_string(),
            reason,
        },
        Err(_) => SearchError::Engine {
            status,
            error_type: "http_error".to_string(),
            reason: body.trim().to_string(),
        },
    }
}
