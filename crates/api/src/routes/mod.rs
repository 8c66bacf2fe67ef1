//! Route modules and the root-level liveness route.
//!
//! Route hierarchy:
//!
//! ```text
//! /                                liveness message
//! /health                          service + database health
//!
//! /books/                          create (POST), paged list (GET)
//! /books/search/                   substring search over title/author
//! /books/filter/                   filter by genre and/or year
//! /books/count/total               total book count
//! /books/count/by-genre            per-genre breakdown
//! /books/{id}                      fetch, update, delete one book
//! ```

pub mod books;
pub mod health;

use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Liveness payload for the root endpoint.
#[derive(Serialize)]
struct WelcomeResponse {
    message: &'static str,
}

/// GET / -- liveness message.
async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Alexandria book catalog API",
    })
}

/// Routes mounted at the server root.
pub fn root_router() -> Router<AppState> {
    Router::new().route("/", get(root))
}
