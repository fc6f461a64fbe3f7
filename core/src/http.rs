//! HTTP transport types and the requester capability.
//!
//! # Design
//! Requests and responses are plain data. `BookProtocol` builds
//! `HttpRequest` values and parses `HttpResponse` values without touching
//! the network; an `HttpRequester` performs the round trip in between.
//! Requesters report every status code as data, so deciding what a 404 or
//! a 500 means stays in the protocol layer.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

/// HTTP method for a request. The book API is read-only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

/// An HTTP request described as plain data.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP round trip.
///
/// Implementations must return non-2xx responses as `Ok`; only failures
/// that prevent a response (connect, DNS, timeout) are `ApiError::Transport`.
#[async_trait]
pub trait HttpRequester: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse>;
}

#[async_trait]
impl<R: HttpRequester + ?Sized> HttpRequester for Arc<R> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
        (**self).execute(request).await
    }
}
