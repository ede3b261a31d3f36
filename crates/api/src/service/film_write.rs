//! Write-side film service.
//!
//! Owns the IMDb uniqueness check on create and the optimistic-concurrency
//! protocol on update: the supplied version token must parse and must not
//! be older than the stored version. A token ahead of the stored version
//! is accepted; only "too old" is blocked. Conflicts surface directly to
//! the caller, the server never retries.

use kino_core::error::FilmError;
use kino_core::types::DbId;
use kino_core::version;
use kino_db::models::film::{CreateFilm, UpdateFilm};
use kino_db::repositories::FilmRepo;
use kino_db::DbPool;

use crate::error::AppResult;
use crate::service::FilmReadService;

/// Create, versioned update, and cascading delete of the film aggregate.
#[derive(Clone)]
pub struct FilmWriteService {
    pool: DbPool,
    read: FilmReadService,
}

impl FilmWriteService {
    pub fn new(pool: DbPool) -> Self {
        Self {
            read: FilmReadService::new(pool.clone()),
            pool,
        }
    }

    /// Create a film with its nested skript and actors. Fails with
    /// [`FilmError::ImdbExists`] when the IMDb number is already taken.
    pub async fn create(&self, film: &CreateFilm) -> AppResult<DbId> {
        tracing::debug!(imdb = %film.imdb, "create");
        if FilmRepo::exists_by_imdb(&self.pool, &film.imdb).await? {
            return Err(FilmError::ImdbExists(film.imdb.clone()).into());
        }
        Ok(FilmRepo::create(&self.pool, film).await?)
    }

    /// Apply a scalar-only update under optimistic concurrency.
    ///
    /// `version` is the raw `If-Match` header value; `None` means the
    /// precondition was not supplied at all. Returns the new stored
    /// version on success.
    pub async fn update(
        &self,
        id: DbId,
        film: &UpdateFilm,
        version: Option<&str>,
    ) -> AppResult<i32> {
        tracing::debug!(id, ?version, "update");
        let version = version::parse_version(version)?;

        // NotFound propagates if the id is unknown.
        let stored = self.read.find_by_id(id, false).await?;
        if version < stored.film.version {
            return Err(FilmError::VersionOutdated(version).into());
        }

        let neue_version = FilmRepo::update(&self.pool, id, film)
            .await?
            .ok_or_else(|| FilmError::NotFound(format!("No film with id {id}")))?;
        tracing::debug!(id, neue_version, "updated");
        Ok(neue_version)
    }

    /// Delete the film aggregate: skript, then actors, then the film row,
    /// atomically. NotFound propagates if the id is unknown. Returns
    /// `true` only if the film row itself was deleted.
    pub async fn delete(&self, id: DbId) -> AppResult<bool> {
        tracing::debug!(id, "delete");
        self.read.find_by_id(id, true).await?;
        Ok(FilmRepo::delete(&self.pool, id).await?)
    }
}
