//! Book entity model and DTOs.
//!
//! The create/update DTOs carry the full field-level validation rules,
//! so a failed `validate()` enumerates every violated field at once.
//! Text fields are trimmed via [`CreateBook::normalize`] /
//! [`UpdateBook::normalize`] before validation, which makes
//! whitespace-only input fail the length checks.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::{Validate, ValidationError};

use alexandria_core::isbn::is_valid_isbn;
use alexandria_core::types::{DbId, Timestamp};

/// A row from the `books` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Book {
    pub id: DbId,
    pub title: String,
    pub author: String,
    #[serde(rename = "ISBN")]
    pub isbn: String,
    pub genre: String,
    pub publication_year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new book. All fields are required.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateBook {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub author: String,
    #[serde(rename = "ISBN")]
    #[validate(
        length(min = 10, max = 17, message = "must be 10-17 characters"),
        custom(function = isbn_format)
    )]
    pub isbn: String,
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub genre: String,
    #[validate(range(min = 1000, max = 2024, message = "must be between 1000 and 2024"))]
    pub publication_year: i32,
}

impl CreateBook {
    /// Trim surrounding whitespace from all text fields. Call before
    /// `validate()`.
    pub fn normalize(&mut self) {
        trim_in_place(&mut self.title);
        trim_in_place(&mut self.author);
        trim_in_place(&mut self.isbn);
        trim_in_place(&mut self.genre);
    }
}

/// DTO for a partial update. Absent fields leave the stored value
/// untouched; present fields are validated with the same constraints
/// as on create.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBook {
    #[validate(length(min = 1, max = 200, message = "must be 1-200 characters"))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = 100, message = "must be 1-100 characters"))]
    pub author: Option<String>,
    #[serde(rename = "ISBN")]
    #[validate(
        length(min = 10, max = 17, message = "must be 10-17 characters"),
        custom(function = isbn_format)
    )]
    pub isbn: Option<String>,
    #[validate(length(min = 1, max = 50, message = "must be 1-50 characters"))]
    pub genre: Option<String>,
    #[validate(range(min = 1000, max = 2024, message = "must be between 1000 and 2024"))]
    pub publication_year: Option<i32>,
}

impl UpdateBook {
    /// Trim surrounding whitespace from all present text fields. Call
    /// before `validate()`.
    pub fn normalize(&mut self) {
        for field in [&mut self.title, &mut self.author, &mut self.isbn, &mut self.genre] {
            if let Some(value) = field {
                trim_in_place(value);
            }
        }
    }

    /// `true` when no field is present, i.e. there is nothing to apply.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.author.is_none()
            && self.isbn.is_none()
            && self.genre.is_none()
            && self.publication_year.is_none()
    }
}

fn trim_in_place(value: &mut String) {
    let trimmed = value.trim();
    if trimmed.len() != value.len() {
        *value = trimmed.to_string();
    }
}

fn isbn_format(value: &str) -> Result<(), ValidationError> {
    if is_valid_isbn(value) {
        Ok(())
    } else {
        let mut err = ValidationError::new("isbn_format");
        err.message = Some("must be a structurally valid ISBN-10 or ISBN-13".into());
        Err(err)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
