//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Every method maps to a
//! single SQL statement; the database is the atomicity boundary.

pub mod book_repo;

pub use book_repo::BookRepo;
