use thiserror::Error;

/// Errors returned by the location finder client.
///
/// A non-2xx response with a well-formed body is not an error: it comes back
/// as [`Envelope::Failure`](locfinder_core::Envelope::Failure).
#[derive(Debug, Error)]
pub enum ClientError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The configured base URL cannot be parsed or extended with a path.
    #[error("invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    /// A zero request timeout would fail every call immediately.
    #[error("request timeout must be at least one second")]
    InvalidTimeout,

    /// A location lookup was attempted with a blank identifier.
    #[error("invalid location id {0:?}")]
    InvalidLocationId(String),

    /// The response body did not match the expected shape for its status.
    #[error("malformed response for {context}: {source}")]
    MalformedResponse {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
