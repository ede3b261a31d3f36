//! Film-domain error taxonomy.
//!
//! Errors are raised at the point of detection and propagate unchanged to
//! the HTTP boundary, where `kino-api` maps each kind to a status code.
//! There is no local recovery and no retry inside the services.

/// Film-domain error type.
///
/// `NotFound` deliberately covers three causes with one externally
/// observable kind: a missing id, invalid search-criteria keys, and a
/// search that yields zero rows. Callers cannot distinguish "bad query"
/// from "no data".
#[derive(Debug, thiserror::Error)]
pub enum FilmError {
    #[error("{0}")]
    NotFound(String),

    #[error("A film with the IMDb number {0} already exists")]
    ImdbExists(String),

    #[error("Invalid version token: {0}")]
    VersionInvalid(String),

    #[error("Version {0} is outdated")]
    VersionOutdated(i32),

    #[error("Version header is missing")]
    VersionMissing,

    #[error("Validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),
}
