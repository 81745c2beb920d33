//! Errors raised by source adapters.

use thiserror::Error;

/// A failure to obtain data from a reading source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The HTTP client could not be configured.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request could not be sent or its body could not be read.
    #[error("request to {url} failed: {source}")]
    Http {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned HTTP {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// Response status code.
        status: u16,
    },

    /// The response did not have the expected structure.
    #[error("unexpected content at {url}: {message}")]
    Parse {
        /// Requested URL.
        url: String,
        /// What was missing or malformed.
        message: String,
    },

    /// A recorded interaction could not be served.
    #[error("replay failed: {0}")]
    Replay(String),

    /// A recorded interaction was itself an error.
    #[error("{0}")]
    Replayed(String),
}
