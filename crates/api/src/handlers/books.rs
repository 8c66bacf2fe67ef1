//! Handlers for the `/books` resource.
//!
//! Each handler decodes its input, runs the schema validation on write
//! paths, delegates to [`BookRepo`], and maps the outcome to an HTTP
//! status and JSON body.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use alexandria_core::error::CoreError;
use alexandria_core::types::DbId;
use alexandria_db::models::book::{Book, CreateBook, UpdateBook};
use alexandria_db::repositories::BookRepo;

use crate::error::{AppError, AppResult};
use crate::query::{FilterParams, PaginationParams, SearchParams};
use crate::response::{GenreCountResponse, MessageResponse, TotalCountResponse};
use crate::state::AppState;

/// POST /books/
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateBook>,
) -> AppResult<(StatusCode, Json<Book>)> {
    input.normalize();
    input.validate()?;
    let book = BookRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(book)))
}

/// GET /books/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Book>> {
    let book = BookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(book))
}

/// PUT /books/{id}
///
/// Partial update: absent fields keep their stored values.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateBook>,
) -> AppResult<Json<Book>> {
    input.normalize();
    if input.is_empty() {
        return Err(AppError::BadRequest("No fields to update".into()));
    }
    input.validate()?;
    let book = BookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Book", id }))?;
    Ok(Json(book))
}

/// DELETE /books/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = BookRepo::delete(&state.pool, id).await?;
    if deleted {
        Ok(Json(MessageResponse {
            message: "Book deleted successfully",
        }))
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Book", id }))
    }
}

/// GET /books/
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::list(&state.pool, params.skip, params.limit).await?;
    Ok(Json(books))
}

/// GET /books/search/
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Vec<Book>>> {
    if params.query.trim().is_empty() {
        return Err(AppError::BadRequest("query must not be empty".into()));
    }
    let books =
        BookRepo::search_title_author(&state.pool, &params.query, params.skip, params.limit)
            .await?;
    Ok(Json(books))
}

/// GET /books/filter/
pub async fn filter(
    State(state): State<AppState>,
    Query(params): Query<FilterParams>,
) -> AppResult<Json<Vec<Book>>> {
    let books = BookRepo::filter(
        &state.pool,
        params.genre.as_deref(),
        params.publication_year,
        params.skip,
        params.limit,
    )
    .await?;
    Ok(Json(books))
}

/// GET /books/count/total
pub async fn count_total(State(state): State<AppState>) -> AppResult<Json<TotalCountResponse>> {
    let total_books = BookRepo::count_total(&state.pool).await?;
    Ok(Json(TotalCountResponse { total_books }))
}

/// GET /books/count/by-genre
pub async fn count_by_genre(
    State(state): State<AppState>,
) -> AppResult<Json<GenreCountResponse>> {
    let counts = BookRepo::count_by_genre(&state.pool).await?;
    Ok(Json(GenreCountResponse {
        books_per_genre: counts.into_iter().collect(),
    }))
}
