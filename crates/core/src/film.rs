//! Film entity invariants: field constraints and identifier parsing.
//!
//! The validation functions take plain data and return a human-readable
//! message on failure; the API layer aggregates them into per-field
//! validation errors. Nothing here touches the database.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::FilmError;
use crate::types::DbId;

/// Highest permitted rating.
pub const MAX_RATING: i32 = 5;

/// Earliest permitted release year.
pub const MIN_ERSCHEINUNGSJAHR: i32 = 1900;

/// Latest permitted release year.
pub const MAX_ERSCHEINUNGSJAHR: i32 = 2030;

/// Maximum length of a skript title.
pub const MAX_TITEL_LEN: usize = 40;

/// Maximum length of a schauspieler name.
pub const MAX_NAME_LEN: usize = 32;

/// Author sentinel used when a skript is created without one.
pub const DEFAULT_AUTOR: &str = "Unbekannter Autor";

static IMDB_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{4}-\d{4}$").expect("valid regex"));

static TITEL_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\w.*").expect("valid regex"));

// Positive integer, no leading zero, bounded length.
static ID_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[1-9]\d{0,10}$").expect("valid regex"));

/// Parse an externally supplied id string.
///
/// Malformed ids are rejected before any service runs and surface as
/// [`FilmError::NotFound`], matching the "bad id and missing id are one
/// kind" policy.
pub fn parse_id(id: &str) -> Result<DbId, FilmError> {
    if !ID_RE.is_match(id) {
        return Err(FilmError::NotFound(format!("No film with id {id}")));
    }
    id.parse()
        .map_err(|_| FilmError::NotFound(format!("No film with id {id}")))
}

/// Validate the IMDb number format (`dddd-dddd`).
pub fn validate_imdb(imdb: &str) -> Result<(), String> {
    if IMDB_RE.is_match(imdb) {
        Ok(())
    } else {
        Err(format!("imdb '{imdb}' must match the \"1234-1234\" format"))
    }
}

/// Validate that a rating lies in `[0, MAX_RATING]`.
pub fn validate_rating(rating: i32) -> Result<(), String> {
    if (0..=MAX_RATING).contains(&rating) {
        Ok(())
    } else {
        Err(format!("rating {rating} must be between 0 and {MAX_RATING}"))
    }
}

/// Validate that a release year lies in the permitted range.
pub fn validate_erscheinungsjahr(jahr: i32) -> Result<(), String> {
    if (MIN_ERSCHEINUNGSJAHR..=MAX_ERSCHEINUNGSJAHR).contains(&jahr) {
        Ok(())
    } else {
        Err(format!(
            "erscheinungsjahr {jahr} must be between {MIN_ERSCHEINUNGSJAHR} and {MAX_ERSCHEINUNGSJAHR}"
        ))
    }
}

/// Validate that a tag list contains no duplicates.
pub fn validate_schlagwoerter(schlagwoerter: &[String]) -> Result<(), String> {
    for (i, wort) in schlagwoerter.iter().enumerate() {
        if schlagwoerter[..i].contains(wort) {
            return Err(format!("schlagwoerter contains duplicate '{wort}'"));
        }
    }
    Ok(())
}

/// Validate a skript title: non-empty, starts with a word character,
/// at most [`MAX_TITEL_LEN`] characters.
pub fn validate_titel(titel: &str) -> Result<(), String> {
    if titel.is_empty() || !TITEL_RE.is_match(titel) {
        return Err(format!("titel '{titel}' must start with a word character"));
    }
    if titel.chars().count() > MAX_TITEL_LEN {
        return Err(format!("titel must be at most {MAX_TITEL_LEN} characters"));
    }
    Ok(())
}

/// Validate a schauspieler name: at most [`MAX_NAME_LEN`] characters.
pub fn validate_name(name: &str) -> Result<(), String> {
    if name.chars().count() > MAX_NAME_LEN {
        return Err(format!("name must be at most {MAX_NAME_LEN} characters"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id_accepts_positive_integers() {
        assert_eq!(parse_id("1").unwrap(), 1);
        assert_eq!(parse_id("30").unwrap(), 30);
        assert_eq!(parse_id("99999999999").unwrap(), 99_999_999_999);
    }

    #[test]
    fn test_parse_id_rejects_leading_zero() {
        assert!(parse_id("0").is_err());
        assert!(parse_id("012").is_err());
    }

    #[test]
    fn test_parse_id_rejects_garbage() {
        assert!(parse_id("").is_err());
        assert!(parse_id("abc").is_err());
        assert!(parse_id("-1").is_err());
        assert!(parse_id("1x").is_err());
        // Twelve digits exceeds the bounded length.
        assert!(parse_id("123456789012").is_err());
    }

    #[test]
    fn test_validate_imdb() {
        assert!(validate_imdb("1234-5678").is_ok());
        assert!(validate_imdb("12345678").is_err());
        assert!(validate_imdb("123-45678").is_err());
        assert!(validate_imdb("falsche-ISBN").is_err());
    }

    #[test]
    fn test_validate_rating_bounds() {
        assert!(validate_rating(0).is_ok());
        assert!(validate_rating(5).is_ok());
        assert!(validate_rating(-1).is_err());
        assert!(validate_rating(6).is_err());
    }

    #[test]
    fn test_validate_erscheinungsjahr_bounds() {
        assert!(validate_erscheinungsjahr(1900).is_ok());
        assert!(validate_erscheinungsjahr(2030).is_ok());
        assert!(validate_erscheinungsjahr(1899).is_err());
        assert!(validate_erscheinungsjahr(2031).is_err());
    }

    #[test]
    fn test_validate_schlagwoerter_rejects_duplicates() {
        let ok = vec!["ACTION".to_string(), "COMEDY".to_string()];
        assert!(validate_schlagwoerter(&ok).is_ok());
        assert!(validate_schlagwoerter(&[]).is_ok());

        let dup = vec!["ACTION".to_string(), "ACTION".to_string()];
        assert!(validate_schlagwoerter(&dup).is_err());
    }

    #[test]
    fn test_validate_titel() {
        assert!(validate_titel("Akira").is_ok());
        assert!(validate_titel("").is_err());
        assert!(validate_titel("?!").is_err());
        assert!(validate_titel(&"x".repeat(41)).is_err());
        assert!(validate_titel(&"x".repeat(40)).is_ok());
    }

    #[test]
    fn test_validate_name_length() {
        assert!(validate_name("Keanu Reeves").is_ok());
        assert!(validate_name(&"x".repeat(33)).is_err());
    }
}
