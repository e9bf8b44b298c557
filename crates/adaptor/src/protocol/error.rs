use std::io;

use http::HeaderValue;
use thiserror::Error;

/// Errors raised while adapting an external request into a [`Request`](crate::protocol::Request).
///
/// The two variants are handled very differently by callers:
///
/// - [`AdaptError::MalformedLength`] is recoverable. Nothing was read from the
///   body source and the caller can answer with `400 Bad Request`.
/// - [`AdaptError::BodyReadFailure`] is unrecoverable. Part of a fixed-length
///   body may already have been consumed, so the connection no longer sits on a
///   message boundary. The in-flight request must be dropped and the connection
///   closed; it must never be retried or turned into an empty body.
#[derive(Debug, Error)]
pub enum AdaptError {
    #[error("malformed content-length header {value:?}: {reason}")]
    MalformedLength { value: String, reason: String },

    #[error("unrecoverable request body read failure: {source}")]
    BodyReadFailure {
        #[source]
        source: io::Error,
    },
}

impl AdaptError {
    pub fn malformed_length<S: ToString>(value: &HeaderValue, reason: S) -> Self {
        Self::MalformedLength { value: String::from_utf8_lossy(value.as_bytes()).into_owned(), reason: reason.to_string() }
    }

    pub fn body_read_failure<E: Into<io::Error>>(e: E) -> Self {
        Self::BodyReadFailure { source: e.into() }
    }

    /// Returns true if the request and its connection must be torn down.
    pub fn is_unrecoverable(&self) -> bool {
        matches!(self, Self::BodyReadFailure { .. })
    }
}

/// Errors raised while converting an adapted request back into an `http::Request`.
#[derive(Error, Debug)]
pub enum CompatError {
    #[error("invalid compat request: {source}")]
    InvalidRequest {
        #[from]
        source: http::Error,
    },

    #[error("failed to buffer request body: {source}")]
    Body {
        #[from]
        source: io::Error,
    },
}

impl CompatError {
    pub fn invalid_request<E: Into<http::Error>>(e: E) -> Self {
        Self::InvalidRequest { source: e.into() }
    }

    pub fn body<E: Into<io::Error>>(e: E) -> Self {
        Self::Body { source: e.into() }
    }
}
