//! Repository for the `filme`, `skripte`, and `schauspieler` tables.
//!
//! The aggregate is created and deleted as explicit ordered steps inside
//! one transaction; there is no implicit cascade. The version column is
//! bumped atomically in the update statement and is the sole
//! concurrency-control mechanism.

use sqlx::PgPool;

use kino_core::film::DEFAULT_AUTOR;
use kino_core::suchkriterien::Suchkriterien;
use kino_core::types::{DbId, Timestamp};

use crate::models::film::{
    CreateFilm, Film, FilmMitSkript, Schauspieler, Skript, UpdateFilm,
};
use crate::query::{Bind, FilmSuche};

/// Column list for joined film + skript queries.
const FILM_SKRIPT_COLUMNS: &str = "\
    f.id, f.version, f.imdb, f.rating, f.erscheinungsjahr, \
    f.schlagwoerter, f.erzeugt, f.aktualisiert, \
    s.id AS skript_id, s.titel, s.autor";

/// Column list for `schauspieler` queries.
const SCHAUSPIELER_COLUMNS: &str = "id, film_id, name, geburtsdatum";

/// Flat row shape produced by the film + skript join.
#[derive(sqlx::FromRow)]
struct FilmSkriptRow {
    id: DbId,
    version: i32,
    imdb: String,
    rating: i32,
    erscheinungsjahr: i32,
    schlagwoerter: Option<Vec<String>>,
    erzeugt: Timestamp,
    aktualisiert: Timestamp,
    skript_id: DbId,
    titel: String,
    autor: String,
}

impl FilmSkriptRow {
    fn into_film(self, schauspieler: Option<Vec<Schauspieler>>) -> FilmMitSkript {
        FilmMitSkript {
            skript: Skript {
                id: self.skript_id,
                film_id: self.id,
                titel: self.titel,
                autor: self.autor,
            },
            film: Film {
                id: self.id,
                version: self.version,
                imdb: self.imdb,
                rating: self.rating,
                erscheinungsjahr: self.erscheinungsjahr,
                schlagwoerter: self.schlagwoerter,
                erzeugt: self.erzeugt,
                aktualisiert: self.aktualisiert,
            },
            schauspieler,
        }
    }
}

/// Provides CRUD and search operations for the film aggregate.
pub struct FilmRepo;

impl FilmRepo {
    /// Insert a new film with its nested skript and schauspieler as one
    /// transaction: parent first, then the children. Returns the new id;
    /// the version column starts at 0.
    pub async fn create(pool: &PgPool, input: &CreateFilm) -> Result<DbId, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let (film_id,): (DbId,) = sqlx::query_as(
            "INSERT INTO filme (imdb, rating, erscheinungsjahr, schlagwoerter) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(&input.imdb)
        .bind(input.rating)
        .bind(input.erscheinungsjahr)
        .bind(&input.schlagwoerter)
        .fetch_one(&mut *tx)
        .await?;

        let autor = input.skript.autor.as_deref().unwrap_or(DEFAULT_AUTOR);
        sqlx::query("INSERT INTO skripte (film_id, titel, autor) VALUES ($1, $2, $3)")
            .bind(film_id)
            .bind(&input.skript.titel)
            .bind(autor)
            .execute(&mut *tx)
            .await?;

        for schauspieler in input.schauspieler.as_deref().unwrap_or(&[]) {
            sqlx::query(
                "INSERT INTO schauspieler (film_id, name, geburtsdatum) VALUES ($1, $2, $3)",
            )
            .bind(film_id)
            .bind(&schauspieler.name)
            .bind(schauspieler.geburtsdatum)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        tracing::debug!(film_id, "film created");
        Ok(film_id)
    }

    /// Whether a film with the given IMDb number already exists.
    pub async fn exists_by_imdb(pool: &PgPool, imdb: &str) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM filme WHERE imdb = $1)")
                .bind(imdb)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// Find a film by id with its skript always joined and the actor
    /// list loaded only when `mit_schauspielern` is set.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        mit_schauspielern: bool,
    ) -> Result<Option<FilmMitSkript>, sqlx::Error> {
        let query = format!(
            "SELECT {FILM_SKRIPT_COLUMNS} FROM filme f \
             INNER JOIN skripte s ON s.film_id = f.id \
             WHERE f.id = $1"
        );
        let row: Option<FilmSkriptRow> = sqlx::query_as(&query).bind(id).fetch_optional(pool).await?;
        let Some(row) = row else {
            return Ok(None);
        };

        let schauspieler = if mit_schauspielern {
            Some(Self::find_schauspieler(pool, id).await?)
        } else {
            None
        };
        Ok(Some(row.into_film(schauspieler)))
    }

    /// Search films by criteria. Empty criteria return every film. The
    /// result rows carry the joined skript but no actor lists.
    pub async fn search(
        pool: &PgPool,
        kriterien: &Suchkriterien,
    ) -> Result<Vec<FilmMitSkript>, sqlx::Error> {
        let suche = FilmSuche::from_kriterien(kriterien);
        let query = format!(
            "SELECT {FILM_SKRIPT_COLUMNS} FROM filme f \
             INNER JOIN skripte s ON s.film_id = f.id \
             {} \
             ORDER BY f.id",
            suche.where_clause(),
        );

        let mut q = sqlx::query_as::<_, FilmSkriptRow>(&query);
        for bind in suche.binds() {
            q = match bind {
                Bind::Text(value) => q.bind(value.clone()),
                Bind::Int(value) => q.bind(*value),
            };
        }

        let rows = q.fetch_all(pool).await?;
        Ok(rows.into_iter().map(|row| row.into_film(None)).collect())
    }

    /// Apply the scalar-only merge and bump the version atomically.
    ///
    /// An absent tag list keeps the stored one. Returns the new version,
    /// or `None` if no row with the given id exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFilm,
    ) -> Result<Option<i32>, sqlx::Error> {
        let row: Option<(i32,)> = sqlx::query_as(
            "UPDATE filme SET \
                imdb = $2, \
                rating = $3, \
                erscheinungsjahr = $4, \
                schlagwoerter = COALESCE($5, schlagwoerter), \
                version = version + 1, \
                aktualisiert = NOW() \
             WHERE id = $1 \
             RETURNING version",
        )
        .bind(id)
        .bind(&input.imdb)
        .bind(input.rating)
        .bind(input.erscheinungsjahr)
        .bind(&input.schlagwoerter)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|(version,)| version))
    }

    /// Delete the aggregate: skript first, then the actors, then the film
    /// itself, all inside one transaction. Returns `true` only if the
    /// final film-row deletion affected at least one row.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        sqlx::query("DELETE FROM skripte WHERE film_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM schauspieler WHERE film_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        let result = sqlx::query("DELETE FROM filme WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(id, rows = result.rows_affected(), "film deleted");
        Ok(result.rows_affected() > 0)
    }

    /// List all actors of a film, ordered by id.
    pub async fn find_schauspieler(
        pool: &PgPool,
        film_id: DbId,
    ) -> Result<Vec<Schauspieler>, sqlx::Error> {
        let query = format!(
            "SELECT {SCHAUSPIELER_COLUMNS} FROM schauspieler WHERE film_id = $1 ORDER BY id"
        );
        sqlx::query_as(&query).bind(film_id).fetch_all(pool).await
    }
}
