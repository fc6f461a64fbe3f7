//! The book value and the decode step that produces it from JSON.
//!
//! # Design
//! Decoding is strict: `self` and `title` must both be present and be
//! strings, or the whole decode fails. Unknown fields are ignored so newer
//! servers can add fields without breaking older clients.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{ApiError, Result};

/// A single book as served by the book API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    /// Canonical path of the book, e.g. `/books/1`.
    #[serde(rename = "self")]
    pub self_link: String,
    pub title: String,
}

impl Book {
    pub fn new(self_link: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            self_link: self_link.into(),
            title: title.into(),
        }
    }

    /// Decode one book from an already-parsed JSON value.
    pub fn decode(value: &Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ApiError::Decode(format!(
                "expected a book object, got {}",
                kind(value)
            )));
        }
        Self::deserialize(value).map_err(|e| ApiError::Decode(e.to_string()))
    }
}

/// Parse a response body holding a single book object.
pub fn decode_book(body: &str) -> Result<Book> {
    let value: Value = serde_json::from_str(body)?;
    Book::decode(&value)
}

/// Parse a response body holding an array of book objects.
///
/// One bad element fails the whole listing; the error names its index.
pub fn decode_books(body: &str) -> Result<Vec<Book>> {
    let value: Value = serde_json::from_str(body)?;
    let items = match value {
        Value::Array(items) => items,
        other => {
            return Err(ApiError::Decode(format!(
                "expected an array of books, got {}",
                kind(&other)
            )))
        }
    };
    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            Book::decode(item).map_err(|e| match e {
                ApiError::Decode(msg) => {
                    ApiError::Decode(format!("book at index {index}: {msg}"))
                }
                other => other,
            })
        })
        .collect()
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
