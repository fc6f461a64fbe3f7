//! Stateless HTTP request builder and response parser for the book API.
//!
//! # Design
//! `BookProtocol` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`. The caller executes the round trip in
//! between, so this layer stays deterministic and free of I/O.

use tracing::info;

use crate::error::{ApiError, Result};
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{decode_book, decode_books, Book};

/// Fixed listing path of the book collection.
pub const BOOKS_PATH: &str = "/books";

/// Synchronous, stateless request builder and response parser.
#[derive(Debug, Clone)]
pub struct BookProtocol {
    base_url: String,
}

impl BookProtocol {
    pub fn new(base_url: &str) -> Result<Self> {
        let trimmed = base_url.trim();
        if trimmed.is_empty() {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base_url: trimmed.trim_end_matches('/').to_string(),
        })
    }

    pub fn build_list_books(&self) -> HttpRequest {
        self.get(BOOKS_PATH)
    }

    /// `path` is appended to the base as-is; only emptiness is rejected.
    pub fn build_get_book(&self, path: &str) -> Result<HttpRequest> {
        if path.is_empty() {
            return Err(ApiError::InvalidPath(path.to_string()));
        }
        Ok(self.get(path))
    }

    /// Any 2xx is accepted for the listing.
    pub fn parse_list_books(&self, response: HttpResponse) -> Result<Vec<Book>> {
        if !response.is_success() {
            return Err(unexpected(response));
        }
        decode_books(&response.body)
    }

    /// 200 is a book, 404 is absence, anything else is an error.
    pub fn parse_get_book(&self, response: HttpResponse) -> Result<Option<Book>> {
        match response.status {
            200 => decode_book(&response.body).map(Some),
            404 => {
                info!(body = %response.body, "book not found");
                Ok(None)
            }
            _ => Err(unexpected(response)),
        }
    }

    fn get(&self, path: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: format!("{}{path}", self.base_url),
            headers: vec![("accept".to_string(), "application/json".to_string())],
        }
    }
}

fn unexpected(response: HttpResponse) -> ApiError {
    ApiError::HttpError {
        status: response.status,
        body: response.body,
    }
}
