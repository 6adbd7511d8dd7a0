//! Error types for rrsync-source.

use thiserror::Error;

/// All errors that can arise while fetching the stations catalog.
#[derive(Debug, Error)]
pub enum SourceError {
    /// DNS, connect, TLS or other transport failure.
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The server answered with anything but 200 OK.
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// Reading the response body failed.
    #[error("failed to read response body from {url}: {source}")]
    Body {
        url: String,
        #[source]
        source: std::io::Error,
    },

    /// The body is not the expected catalog JSON.
    #[error("malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),
}
