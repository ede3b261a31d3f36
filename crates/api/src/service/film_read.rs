//! Read-side film service.
//!
//! Wraps [`FilmRepo`] with the not-found semantics and criteria-key
//! validation the API exposes: a missing row, an invalid criteria key,
//! and an empty search result all surface as the same NotFound kind.

use std::collections::HashMap;

use kino_core::error::FilmError;
use kino_core::suchkriterien::Suchkriterien;
use kino_core::types::DbId;
use kino_db::models::film::FilmMitSkript;
use kino_db::repositories::FilmRepo;
use kino_db::DbPool;

use crate::error::AppResult;

/// Fetch-by-id and search-by-criteria over the film aggregate.
#[derive(Clone)]
pub struct FilmReadService {
    pool: DbPool,
}

impl FilmReadService {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Fetch exactly one film. The skript is always joined; the actor
    /// list only when `mit_schauspielern` is set.
    pub async fn find_by_id(
        &self,
        id: DbId,
        mit_schauspielern: bool,
    ) -> AppResult<FilmMitSkript> {
        tracing::debug!(id, mit_schauspielern, "find_by_id");
        let film = FilmRepo::find_by_id(&self.pool, id, mit_schauspielern)
            .await?
            .ok_or_else(|| FilmError::NotFound(format!("No film with id {id}")))?;
        Ok(normalisiert(film))
    }

    /// Search films by raw query parameters.
    ///
    /// Empty parameters return all films. An unrecognized key fails with
    /// NotFound, as does a well-formed search that yields zero rows; the
    /// latter carries the criteria in the message for diagnostics.
    pub async fn find(
        &self,
        params: &HashMap<String, String>,
    ) -> AppResult<Vec<FilmMitSkript>> {
        tracing::debug!(?params, "find");
        if params.is_empty() {
            let filme = FilmRepo::search(&self.pool, &Suchkriterien::default()).await?;
            return Ok(filme.into_iter().map(normalisiert).collect());
        }

        let kriterien = Suchkriterien::from_params(params)?;
        let filme = FilmRepo::search(&self.pool, &kriterien).await?;
        if filme.is_empty() {
            return Err(FilmError::NotFound(format!("No films found: {params:?}")).into());
        }
        Ok(filme.into_iter().map(normalisiert).collect())
    }
}

// A stored NULL tag list never leaves the service layer as null.
fn normalisiert(mut film: FilmMitSkript) -> FilmMitSkript {
    film.film.schlagwoerter.get_or_insert_with(Vec::new);
    film
}
