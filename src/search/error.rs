//! Error types for search operations

/// Result type for search operations
pub type SearchResult<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while talking to the search engine
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Engine unreachable, connection reset or deadline exceeded
    #[error("Engine transport failed: {message}")]
    Transport { message: String, timeout: bool },

    /// Engine answered with a non-success status
    #[error("Engine returned {status} ({error_type}): {reason}")]
    Engine {
        status: u16,
        error_type: String,
        reason: String,
    },

    /// Local serialization failed or the response body was not JSON
    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// Response was JSON but not the expected structure
    #[error("Unexpected engine response shape: {0}")]
    ShapeMismatch(String),

    /// Client could not be configured
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),
}

impl SearchError {
    pub fn is_transport(&self) -> bool {
        matches!(self, SearchError::Transport { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, SearchError::Transport { timeout: true, .. })
    }

    pub fn is_engine(&self) -> bool {
        matches!(self, SearchError::Engine { .. })
    }

    pub fn is_shape_mismatch(&self) -> bool {
        matches!(self, SearchError::ShapeMismatch(_))
    }

    /// The engine reported that the target collection does not exist
    pub fn is_not_found(&self) -> bool {
        match self {
            SearchError::Engine {
                status, error_type, ..
            } => *status == 404 || error_type == "index_not_found_exception",
            _ => false,
        }
    }

    /// The engine refused to create a collection that already exists
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            SearchError::Engine { error_type, .. } if error_type == "resource_already_exists_exception"
        )
    }

    /// Stable machine-readable code for logs
    pub fn kind(&self) -> &'static str {
        match self {
            SearchError::Transport { timeout: true, .. } => "ENGINE_TIMEOUT",
            SearchError::Transport { .. } => "ENGINE_UNREACHABLE",
            SearchError::Engine { .. } => "ENGINE_ERROR",
            SearchError::Encoding(_) => "ENCODING_ERROR",
            SearchError::ShapeMismatch(_) => "SHAPE_MISMATCH",
            SearchError::InvalidConfiguration(_) => "INVALID_CONFIGURATION",
        }
    }
}

impl From<reqwest::Error> for SearchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_builder() {
            return SearchError::InvalidConfiguration(err.to_string());
        }

        SearchError::Transport {
            timeout: err.is_timeout(),
            message: if err.is_connect() {
                format!("failed to connect to engine: {}", err)
            } else {
                err.to_string()
            },
        }
    }
}

impl From<serde_json::Error> for SearchError {
    fn from(err: serde_json::Error) -> Self {
        SearchError::Encoding(err.to_string())
    }
}
