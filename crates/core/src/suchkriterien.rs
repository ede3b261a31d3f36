//! Search criteria for the film catalog.
//!
//! The permitted filter fields are an explicit, compile-time enumerated
//! set rather than free-form column names: `titel` (case-insensitive
//! substring over the joined skript title), the tag flags `action`,
//! `thriller`, and `comedy` (set only when the raw value is exactly
//! `"true"`), and the equality fields `imdb`, `rating`, and
//! `erscheinungsjahr`.
//!
//! Any other key is invalid. Per policy, invalid criteria are not
//! distinguishable from "no matches": both surface as
//! [`FilmError::NotFound`].

use std::collections::HashMap;

use crate::error::FilmError;

/// A sparse set of optional search fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Suchkriterien {
    /// Substring match (case-insensitive) against the skript title.
    pub titel: Option<String>,
    /// Require the `ACTION` tag.
    pub action: bool,
    /// Require the `THRILLER` tag.
    pub thriller: bool,
    /// Require the `COMEDY` tag.
    pub comedy: bool,
    /// Exact match on the IMDb number.
    pub imdb: Option<String>,
    /// Exact match on the rating.
    pub rating: Option<i32>,
    /// Exact match on the release year.
    pub erscheinungsjahr: Option<i32>,
}

impl Suchkriterien {
    /// Parse raw query parameters into criteria.
    ///
    /// Fails with [`FilmError::NotFound`] ("invalid search criteria") when
    /// a key is not in the permitted set or a numeric value does not
    /// parse. Tag flags with a value other than `"true"` are ignored, not
    /// rejected.
    pub fn from_params(params: &HashMap<String, String>) -> Result<Self, FilmError> {
        let mut kriterien = Self::default();
        for (key, value) in params {
            match key.as_str() {
                "titel" => kriterien.titel = Some(value.clone()),
                "action" => kriterien.action = value == "true",
                "thriller" => kriterien.thriller = value == "true",
                "comedy" => kriterien.comedy = value == "true",
                "imdb" => kriterien.imdb = Some(value.clone()),
                "rating" => kriterien.rating = Some(parse_int(key, value)?),
                "erscheinungsjahr" => kriterien.erscheinungsjahr = Some(parse_int(key, value)?),
                _ => {
                    return Err(FilmError::NotFound(format!(
                        "Invalid search criteria: unknown key '{key}'"
                    )));
                }
            }
        }
        Ok(kriterien)
    }

    /// True when no filter field is set, i.e. a search returns all films.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

fn parse_int(key: &str, value: &str) -> Result<i32, FilmError> {
    value.parse().map_err(|_| {
        FilmError::NotFound(format!(
            "Invalid search criteria: '{value}' is not a number for '{key}'"
        ))
    })
}
