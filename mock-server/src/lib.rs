use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    #[serde(rename = "self")]
    pub self_link: String,
    pub title: String,
}

/// Books in listing order. Read-only for the lifetime of the app.
pub type Shelf = Arc<Vec<Book>>;

/// The "two books" provider state.
pub fn two_books() -> Vec<Book> {
    (1..=2)
        .map(|n| Book {
            self_link: format!("/books/{n}"),
            title: format!("Hello Book {n}"),
        })
        .collect()
}

pub fn app() -> Router {
    app_with(two_books())
}

pub fn app_with(books: Vec<Book>) -> Router {
    let shelf: Shelf = Arc::new(books);
    Router::new()
        .route("/books", get(list_books))
        .route("/books/{id}", get(get_book))
        .layer(TraceLayer::new_for_http())
        .with_state(shelf)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_books(State(shelf): State<Shelf>) -> Json<Vec<Book>> {
    Json(shelf.to_vec())
}

async fn get_book(
    State(shelf): State<Shelf>,
    Path(id): Path<u32>,
) -> Result<Json<Book>, (StatusCode, String)> {
    let self_link = format!("/books/{id}");
    shelf
        .iter()
        .find(|book| book.self_link == self_link)
        .cloned()
        .map(Json)
        .ok_or_else(|| (StatusCode::NOT_FOUND, format!("no book at {self_link}")))
}
