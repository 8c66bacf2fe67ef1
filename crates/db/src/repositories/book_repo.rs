//! Repository for the `books` table.

use sqlx::PgPool;

use alexandria_core::paging::{
    clamp_limit, clamp_skip, escape_like, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT,
};
use alexandria_core::types::DbId;

use crate::models::book::{Book, CreateBook, UpdateBook};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, author, isbn, genre, publication_year, created_at, updated_at";

/// Provides CRUD, search, filter, and count operations for books.
pub struct BookRepo;

impl BookRepo {
    /// Insert a new book, returning the created row.
    ///
    /// A duplicate ISBN violates `uq_books_isbn` and surfaces as a
    /// database error the API layer classifies as a conflict.
    pub async fn create(pool: &PgPool, input: &CreateBook) -> Result<Book, sqlx::Error> {
        let query = format!(
            "INSERT INTO books (title, author, isbn, genre, publication_year)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.isbn)
            .bind(&input.genre)
            .bind(input.publication_year)
            .fetch_one(pool)
            .await
    }

    /// Find a book by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books WHERE id = $1");
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List books in insertion order (ascending id) with skip/limit
    /// paging. Skip is floored at zero; limit is clamped to 1..=100
    /// and defaults to 10.
    pub async fn list(
        pool: &PgPool,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM books ORDER BY id OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, Book>(&query)
            .bind(clamp_skip(skip))
            .bind(clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .fetch_all(pool)
            .await
    }

    /// Update a book. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists. Changing
    /// the ISBN to one held by another book violates `uq_books_isbn`.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBook,
    ) -> Result<Option<Book>, sqlx::Error> {
        let query = format!(
            "UPDATE books SET
                title = COALESCE($2, title),
                author = COALESCE($3, author),
                isbn = COALESCE($4, isbn),
                genre = COALESCE($5, genre),
                publication_year = COALESCE($6, publication_year),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.author)
            .bind(&input.isbn)
            .bind(&input.genre)
            .bind(input.publication_year)
            .fetch_optional(pool)
            .await
    }

    /// Delete a book by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM books WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Case-insensitive substring search over title and author,
    /// paginated in insertion order.
    pub async fn search_title_author(
        pool: &PgPool,
        query_text: &str,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let pattern = format!("%{}%", escape_like(query_text));
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE title ILIKE $1 OR author ILIKE $1
             ORDER BY id OFFSET $2 LIMIT $3"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(pattern)
            .bind(clamp_skip(skip))
            .bind(clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .fetch_all(pool)
            .await
    }

    /// List books matching all provided criteria. Genre matches
    /// case-insensitively on the exact value; omitted criteria are
    /// unconstrained, so with neither genre nor year this is a plain
    /// page over the whole catalog.
    pub async fn filter(
        pool: &PgPool,
        genre: Option<&str>,
        publication_year: Option<i32>,
        skip: Option<i64>,
        limit: Option<i64>,
    ) -> Result<Vec<Book>, sqlx::Error> {
        let genre_pattern = genre.map(escape_like);
        let query = format!(
            "SELECT {COLUMNS} FROM books
             WHERE ($1::text IS NULL OR genre ILIKE $1)
               AND ($2::integer IS NULL OR publication_year = $2)
             ORDER BY id OFFSET $3 LIMIT $4"
        );
        sqlx::query_as::<_, Book>(&query)
            .bind(genre_pattern)
            .bind(publication_year)
            .bind(clamp_skip(skip))
            .bind(clamp_limit(limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT))
            .fetch_all(pool)
            .await
    }

    /// Total number of books in the catalog.
    pub async fn count_total(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let row: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM books")
            .fetch_one(pool)
            .await?;
        Ok(row.0)
    }

    /// Number of books per genre, most common genre first (ties broken
    /// alphabetically).
    pub async fn count_by_genre(pool: &PgPool) -> Result<Vec<(String, i64)>, sqlx::Error> {
        sqlx::query_as(
            "SELECT genre, COUNT(*) FROM books GROUP BY genre ORDER BY COUNT(*) DESC, genre",
        )
        .fetch_all(pool)
        .await
    }
}
