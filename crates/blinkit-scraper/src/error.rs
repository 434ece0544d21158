use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("empty JSON body from {url}")]
    EmptyResponse { url: String },

    #[error("invalid base URL \"{base_url}\": {reason}")]
    InvalidBaseUrl { base_url: String, reason: String },
}

impl ScraperError {
    /// An empty body moves straight on to the next attempt; only the pacing
    /// delay applies before it.
    #[must_use]
    pub fn skips_backoff(&self) -> bool {
        matches!(self, Self::EmptyResponse { .. })
    }
}
