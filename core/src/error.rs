//! Error types for the book client.
//!
//! # Design
//! A 404 on a single-book lookup is not an error: it comes back as
//! `Ok(None)`. Everything else that stops a call from producing a value
//! lands here. `HttpError` keeps the raw status and body for debugging.

use thiserror::Error;

/// Errors returned by `BookClient` and the `BookProtocol` parse methods.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The base address handed to a constructor was empty.
    #[error("invalid base url: {0:?}")]
    InvalidBaseUrl(String),

    /// The resource path handed to `fetch_one` was empty.
    #[error("invalid resource path: {0:?}")]
    InvalidPath(String),

    /// The joined base and path did not form a URL the transport accepts.
    #[error("invalid request url: {0:?}")]
    InvalidUrl(String),

    /// The request never produced a response (connection refused, DNS,
    /// timeout, cancelled).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a status the operation does not accept.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The body was not JSON, or did not have the shape of a book.
    #[error("decode failed: {0}")]
    Decode(String),
}

impl ApiError {
    /// True when the failure happened on the wire or at the HTTP level.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::HttpError { .. })
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
