//! Error type for the aggregation fetch

use thiserror::Error;

/// Any failure to obtain an aggregation payload.
///
/// The variants only exist for diagnostics. Callers treat every one of them
/// the same way: the fetch failed.
#[derive(Debug, Error)]
pub enum NetworkError {
    /// Connection failure, timeout, or an error while reading the body.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status.
    #[error("unexpected status {status} from {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },

    /// The body was not a valid aggregation payload.
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl NetworkError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, NetworkError::Transport(e) if e.is_timeout())
    }
}
