//! Shared response payload types for API handlers.

use indexmap::IndexMap;
use serde::Serialize;

/// Confirmation payload for destructive operations.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Payload for `GET /books/count/total`.
#[derive(Debug, Serialize)]
pub struct TotalCountResponse {
    pub total_books: i64,
}

/// Payload for `GET /books/count/by-genre`.
///
/// Preserves the most-common-first ordering produced by the repository.
#[derive(Debug, Serialize)]
pub struct GenreCountResponse {
    pub books_per_genre: IndexMap<String, i64>,
}
