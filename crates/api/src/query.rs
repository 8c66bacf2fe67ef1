//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Generic pagination parameters (`?skip=&limit=`).
///
/// Values are clamped in the repository layer via `clamp_skip` /
/// `clamp_limit`.
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /books/search/`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub query: String,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}

/// Query parameters for `GET /books/filter/`. Omitted criteria are
/// unconstrained.
#[derive(Debug, Deserialize)]
pub struct FilterParams {
    pub genre: Option<String>,
    pub publication_year: Option<i32>,
    pub skip: Option<i64>,
    pub limit: Option<i64>,
}
