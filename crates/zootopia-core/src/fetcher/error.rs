//! Fetch error type. Every variant is non-fatal for a run: the caller reports
//! it and continues with zero results.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// Lookup name was empty after trimming.
    #[error("empty animal name")]
    EmptyQuery,

    /// Configured endpoint is not a valid absolute URL.
    #[error("invalid lookup URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Curl reported an error (DNS, connection, TLS, etc.).
    #[error("transport error: {0}")]
    Transport(#[from] curl::Error),

    /// Server answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u32, body: String },

    /// 2xx response whose body is not a JSON array.
    #[error("could not decode response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// HTTP status, when the failure came from the server rather than the transport.
    pub fn status(&self) -> Option<u32> {
        match self {
            FetchError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
