//! Pagination clamping and pattern escaping shared by list, search,
//! and filter queries.

/// Default page size when the client does not supply a limit.
pub const DEFAULT_PAGE_LIMIT: i64 = 10;

/// Hard cap on page size regardless of what the client asks for.
pub const MAX_PAGE_LIMIT: i64 = 100;

/// Clamp a user-provided limit to valid bounds.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided skip to non-negative.
pub fn clamp_skip(skip: Option<i64>) -> i64 {
    skip.unwrap_or(0).max(0)
}

/// Escape `%`, `_`, and `\` in user input destined for a LIKE/ILIKE
/// pattern, so the input matches literally.
pub fn escape_like(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
