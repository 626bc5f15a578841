//! Error types for the Scrinus connector
//!
//! The taxonomy mirrors how the API actually fails: transport problems,
//! rejected credentials during salt bootstrap, signature rejections (401/403
//! with an undecodable body), and every other non-JSON HTTP response.
//! Application-level failures signaled through the JSON `success` field are
//! *not* errors at this layer; callers inspect the decoded value.

use thiserror::Error;

/// Main error type for Scrinus API operations
#[derive(Error, Debug)]
pub enum Error {
    /// Network-level failure (DNS, connection refused, timeout), or a
    /// non-200 status while fetching the salt.
    #[error("transport error: {message}")]
    Transport {
        message: String,
        /// HTTP status, when the failure happened after a status line arrived
        status: Option<u16>,
        /// Raw response body, when one was received
        body: Option<String>,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Salt bootstrap succeeded at the HTTP level but the server rejected
    /// the username.
    #[error("invalid username given: [{message}]")]
    InvalidCredentials { message: String },

    /// HTTP 401/403 with an undecodable body. Carries the plaintext that was
    /// signed so signature mismatches can be diagnosed against the server.
    #[error("{reason}: generated signature is invalid '{plaintext}'")]
    Authentication {
        status: u16,
        reason: String,
        plaintext: String,
    },

    /// Any other HTTP status with an undecodable body.
    #[error("request failed with status {status}: {reason}")]
    Request { status: u16, reason: String },

    /// Client-side configuration problems: invalid base URL, inconsistent
    /// timeouts, missing password for a configured username.
    #[error("configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON serialization/deserialization failures outside the normalizer's
    /// status classification (e.g. decoding the salt envelope).
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// HTTP status attached to this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Transport { status, .. } => *status,
            Error::Authentication { status, .. } | Error::Request { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}
