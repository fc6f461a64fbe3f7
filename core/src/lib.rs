//! Async client core for the book service.
//!
//! # Overview
//! Lists the book collection and looks up single books over HTTP, decoding
//! JSON into `Book` values. A 404 on a lookup is absence (`Ok(None)`), not
//! an error.
//!
//! # Design
//! - `BookProtocol` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network, so any host can drive the I/O.
//! - `BookClient` runs that protocol over an injected `HttpRequester`.
//! - `ReqwestRequester` (feature `reqwest`, on by default) is the bundled
//!   async transport.
//! - Decoding is strict: a book missing `self` or `title` is a decode error.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod protocol;
#[cfg(feature = "reqwest")]
pub mod transport;
pub mod types;

pub use client::BookClient;
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use http::{HttpMethod, HttpRequest, HttpRequester, HttpResponse};
pub use protocol::{BookProtocol, BOOKS_PATH};
#[cfg(feature = "reqwest")]
pub use transport::ReqwestRequester;
pub use types::{decode_book, decode_books, Book};
