//! Entity models and DTOs for the film aggregate.
//!
//! A film owns exactly one skript and zero or more schauspieler. The
//! ownership is unidirectional: the children carry a `film_id` foreign
//! key and there is no live back-reference in the object graph.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use kino_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entities
// ---------------------------------------------------------------------------

/// A row of the `filme` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Film {
    pub id: DbId,
    /// Optimistic-concurrency token. Starts at 0, bumped by the storage
    /// layer on every successful update.
    pub version: i32,
    pub imdb: String,
    pub rating: i32,
    pub erscheinungsjahr: i32,
    /// Nullable in storage; the read service normalizes `None` to an
    /// empty list before anything leaves the service layer.
    pub schlagwoerter: Option<Vec<String>>,
    pub erzeugt: Timestamp,
    pub aktualisiert: Timestamp,
}

/// A row of the `skripte` table. Owned 1:1 by a film.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skript {
    pub id: DbId,
    pub film_id: DbId,
    pub titel: String,
    pub autor: String,
}

/// A row of the `schauspieler` table. Owned N:1 by a film.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Schauspieler {
    pub id: DbId,
    pub film_id: DbId,
    pub name: String,
    pub geburtsdatum: Option<NaiveDate>,
}

/// A film joined with its skript, optionally with its schauspieler.
///
/// The skript is always present (inner join); the actor list is loaded
/// only when requested and omitted from the JSON output otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct FilmMitSkript {
    #[serde(flatten)]
    pub film: Film,
    pub skript: Skript,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schauspieler: Option<Vec<Schauspieler>>,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for creating a film together with its nested skript and actors.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateFilm {
    pub imdb: String,
    pub rating: i32,
    pub erscheinungsjahr: i32,
    #[serde(default)]
    pub schlagwoerter: Option<Vec<String>>,
    pub skript: CreateSkript,
    #[serde(default)]
    pub schauspieler: Option<Vec<CreateSchauspieler>>,
}

/// Nested skript data for [`CreateFilm`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSkript {
    pub titel: String,
    /// Defaults to the "unknown author" sentinel when absent.
    #[serde(default)]
    pub autor: Option<String>,
}

/// Nested schauspieler data for [`CreateFilm`].
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSchauspieler {
    pub name: String,
    #[serde(default)]
    pub geburtsdatum: Option<NaiveDate>,
}

/// DTO for the versioned update path. Carries only the top-level scalar
/// fields; nested skript and schauspieler are never part of the merge.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateFilm {
    pub imdb: String,
    pub rating: i32,
    pub erscheinungsjahr: i32,
    /// When absent, the stored tag list is kept unchanged.
    #[serde(default)]
    pub schlagwoerter: Option<Vec<String>>,
}
