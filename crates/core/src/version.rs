//! Version tokens for optimistic concurrency.
//!
//! Updates carry the expected version as a quoted integer in the
//! `If-Match` header, and responses return the stored version as an
//! `ETag` in the same format. Three failure kinds are distinguished:
//! a missing token, a malformed token, and a stale value.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FilmError;

// Quoted small integer, e.g. `"0"` or `"42"`.
static VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"^"\d{1,3}"$"#).expect("valid regex"));

/// Parse a version token from an `If-Match`-style header value.
///
/// - `None` fails with [`FilmError::VersionMissing`] (the required
///   precondition was not supplied at all).
/// - A token not matching `"<1-3 digits>"` fails with
///   [`FilmError::VersionInvalid`] carrying the raw token.
/// - Otherwise the integer between the quotes is returned.
pub fn parse_version(token: Option<&str>) -> Result<i32, FilmError> {
    let token = token.ok_or(FilmError::VersionMissing)?;
    if !VERSION_RE.is_match(token) {
        return Err(FilmError::VersionInvalid(token.to_string()));
    }
    token[1..token.len() - 1]
        .parse()
        .map_err(|_| FilmError::VersionInvalid(token.to_string()))
}

/// Format a stored version as an ETag value (`"N"`).
pub fn etag(version: i32) -> String {
    format!("\"{version}\"")
}
