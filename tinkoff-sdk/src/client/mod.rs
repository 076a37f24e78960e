//! HTTP client for the acquiring API.
//!
//! Gated behind the `client` cargo feature so downstream crates that only
//! need the request/response types do not pull in `reqwest`.

mod init;
mod outcome;
mod transport;

pub use outcome::{CallError, CallResult, Cause, Causes, Rejected};
pub use transport::Client;

use reqwest::StatusCode;

/// Failures that end a call before a response could be decoded.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (DNS, TLS, connection reset, …).
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server returned a non-2xx status code.
    #[error("api error: status {status}, body: {body}")]
    Api { status: StatusCode, body: String },

    /// The request could not be serialized.
    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    /// The response body is not the expected JSON.
    #[error("malformed response: {0}")]
    Decode(#[source] serde_json::Error),

    /// The base URL could not be joined with the endpoint path.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),
}
