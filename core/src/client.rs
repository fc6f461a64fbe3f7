//! Async client for the book API.
//!
//! # Design
//! `BookClient` composes `BookProtocol` with an injected `HttpRequester`:
//! build the request, execute it once, parse the response. It holds no
//! mutable state, so concurrent calls on one client are independent.

use tracing::debug;

use crate::error::Result;
use crate::http::HttpRequester;
use crate::protocol::BookProtocol;
use crate::types::Book;

#[cfg(feature = "reqwest")]
use crate::{config::ClientConfig, transport::ReqwestRequester};

/// Lists books and looks up single books over an `HttpRequester`.
#[derive(Debug, Clone)]
pub struct BookClient<R> {
    protocol: BookProtocol,
    requester: R,
}

impl<R: HttpRequester> BookClient<R> {
    /// Fails only on an empty base address; performs no I/O.
    pub fn new(base_url: &str, requester: R) -> Result<Self> {
        Ok(Self {
            protocol: BookProtocol::new(base_url)?,
            requester,
        })
    }

    /// Fetch the whole collection in server order.
    pub async fn list_all(&self) -> Result<Vec<Book>> {
        let request = self.protocol.build_list_books();
        debug!(url = %request.url, "listing books");
        let response = self.requester.execute(request).await?;
        self.protocol.parse_list_books(response)
    }

    /// Fetch the book at `path`, or `None` when the server answers 404.
    pub async fn fetch_one(&self, path: &str) -> Result<Option<Book>> {
        let request = self.protocol.build_get_book(path)?;
        debug!(url = %request.url, "fetching book");
        let response = self.requester.execute(request).await?;
        self.protocol.parse_get_book(response)
    }
}

#[cfg(feature = "reqwest")]
impl BookClient<ReqwestRequester> {
    pub fn from_config(config: &ClientConfig) -> Result<Self> {
        let requester = ReqwestRequester::from_config(config)?;
        Self::new(&config.base_url, requester)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use super::*;
    use crate::error::ApiError;
    use crate::http::{HttpRequest, HttpResponse};

    const BASE: &str = "http://localhost:1234";

    /// Answers each URL with a scripted response and records every call.
    #[derive(Debug, Default)]
    struct ScriptedRequester {
        routes: HashMap<String, std::result::Result<(u16, String), String>>,
        calls: Mutex<Vec<String>>,
    }

    impl ScriptedRequester {
        fn respond(mut self, path: &str, status: u16, body: &str) -> Self {
            self.routes
                .insert(format!("{BASE}{path}"), Ok((status, body.to_string())));
            self
        }

        fn fail(mut self, path: &str, reason: &str) -> Self {
            self.routes
                .insert(format!("{BASE}{path}"), Err(reason.to_string()));
            self
        }

        fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpRequester for ScriptedRequester {
        async fn execute(&self, request: HttpRequest) -> Result<HttpResponse> {
            self.calls.lock().unwrap().push(request.url.clone());
            match self.routes.get(&request.url) {
                Some(Ok((status, body))) => Ok(HttpResponse::new(*status, body.as_str())),
                Some(Err(reason)) => Err(ApiError::Transport(reason.clone())),
                None => Err(ApiError::Transport(format!(
                    "connection refused: {}",
                    request.url
                ))),
            }
        }
    }

    fn two_books() -> ScriptedRequester {
        ScriptedRequester::default()
            .respond(
                "/books",
                200,
                r#"[{"self":"/books/1","title":"Hello Book 1"},{"self":"/books/2","title":"Hello Book 2"}]"#,
            )
            .respond("/books/1", 200, r#"{"self":"/books/1","title":"Hello Book 1"}"#)
            .respond("/books/3", 404, "")
    }

    fn client(requester: Arc<ScriptedRequester>) -> BookClient<Arc<ScriptedRequester>> {
        BookClient::new(BASE, requester).unwrap()
    }

    #[tokio::test]
    async fn list_all_returns_books_in_server_order() {
        let requester = Arc::new(two_books());
        let books = client(requester.clone()).list_all().await.unwrap();

        assert_eq!(
            books,
            vec![
                Book::new("/books/1", "Hello Book 1"),
                Book::new("/books/2", "Hello Book 2"),
            ]
        );
        assert_eq!(requester.calls(), vec![format!("{BASE}/books")]);
    }

    #[tokio::test]
    async fn fetch_one_finds_existing_book() {
        let book = client(Arc::new(two_books()))
            .fetch_one("/books/1")
            .await
            .unwrap();
        assert_eq!(book, Some(Book::new("/books/1", "Hello Book 1")));
    }

    #[tokio::test]
    async fn fetch_one_finds_nothing_on_404() {
        let book = client(Arc::new(two_books()))
            .fetch_one("/books/3")
            .await
            .unwrap();
        assert_eq!(book, None);
    }

    #[tokio::test]
    async fn fetch_one_ignores_404_diagnostic_body() {
        let requester =
            ScriptedRequester::default().respond("/books/9", 404, "book 9 was never written");
        let book = client(Arc::new(requester))
            .fetch_one("/books/9")
            .await
            .unwrap();
        assert!(book.is_none());
    }

    #[tokio::test]
    async fn fetch_one_fails_on_server_error() {
        let requester = ScriptedRequester::default().respond("/books/1", 500, "database down");
        let err = client(Arc::new(requester))
            .fetch_one("/books/1")
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::HttpError { status: 500, .. }));
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn transport_failures_propagate() {
        let requester = Arc::new(
            ScriptedRequester::default()
                .fail("/books", "connection reset")
                .fail("/books/1", "timed out"),
        );
        let client = client(requester);

        let err = client.list_all().await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(ref msg) if msg == "connection reset"));

        let err = client.fetch_one("/books/1").await.unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn list_all_fails_instead_of_dropping_bad_element() {
        let requester = ScriptedRequester::default().respond(
            "/books",
            200,
            r#"[{"self":"/books/1","title":"ok"},{"self":"/books/2","title":7}]"#,
        );
        let err = client(Arc::new(requester)).list_all().await.unwrap_err();
        assert!(err.is_decode());
    }

    #[tokio::test]
    async fn fetch_one_with_empty_path_sends_nothing() {
        let requester = Arc::new(two_books());
        let err = client(requester.clone()).fetch_one("").await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidPath(_)));
        assert!(requester.calls().is_empty());
    }

    #[tokio::test]
    async fn each_call_issues_exactly_one_request() {
        let requester = Arc::new(two_books());
        let client = client(requester.clone());

        client.list_all().await.unwrap();
        client.list_all().await.unwrap();
        client.fetch_one("/books/1").await.unwrap();

        assert_eq!(requester.calls().len(), 3);
    }

    #[tokio::test]
    async fn concurrent_calls_are_independent() {
        let client = client(Arc::new(two_books()));

        let (listing, found, missing) = tokio::join!(
            client.list_all(),
            client.fetch_one("/books/1"),
            client.fetch_one("/books/3"),
        );

        assert_eq!(listing.unwrap().len(), 2);
        assert!(found.unwrap().is_some());
        assert!(missing.unwrap().is_none());
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let err = BookClient::new("", Arc::new(two_books())).unwrap_err();
        assert!(matches!(err, ApiError::InvalidBaseUrl(_)));
    }
}
