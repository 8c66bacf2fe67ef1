//! Route definitions for the `/books` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::books;
use crate::state::AppState;

/// Book catalog routes, mounted at the server root to match the spec's
/// paths.
///
/// ```text
/// POST   /books/                 -> create
/// GET    /books/                 -> list
/// GET    /books/search/          -> search
/// GET    /books/filter/          -> filter
/// GET    /books/count/total      -> count_total
/// GET    /books/count/by-genre   -> count_by_genre
/// GET    /books/{id}             -> get_by_id
/// PUT    /books/{id}             -> update
/// DELETE /books/{id}             -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/books/", get(books::list).post(books::create))
        .route("/books/search/", get(books::search))
        .route("/books/filter/", get(books::filter))
        .route("/books/count/total", get(books::count_total))
        .route("/books/count/by-genre", get(books::count_by_genre))
        .route(
            "/books/{id}",
            get(books::get_by_id)
                .put(books::update)
                .delete(books::delete),
        )
}
