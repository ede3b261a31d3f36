//! Handlers for the `/filme` resource.
//!
//! The id path parameter arrives as a string and is validated against the
//! well-formed-id pattern before any service runs; a malformed id is a
//! 404, indistinguishable from a missing row.
//!
//! Optimistic concurrency on `PUT`: the expected version arrives in
//! `If-Match` as a quoted integer and the new version is returned in
//! `ETag`. A missing header is 428, a malformed or stale one is 412.

use std::collections::HashMap;

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;

use kino_core::error::FilmError;
use kino_core::film::parse_id;
use kino_core::version::etag;
use kino_db::models::film::{CreateFilm, FilmMitSkript, UpdateFilm};

use crate::error::AppResult;
use crate::state::AppState;
use crate::validation;

/// GET /api/rest/filme/{id}
///
/// Returns the film with its skript and an `ETag` derived from the
/// stored version. A matching `If-None-Match` yields 304 Not Modified
/// with an empty body.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    let film = state.read.find_by_id(id, false).await?;

    let etag = etag(film.film.version);
    let if_none_match = headers
        .get(header::IF_NONE_MATCH)
        .and_then(|value| value.to_str().ok());
    if if_none_match == Some(etag.as_str()) {
        return Ok(StatusCode::NOT_MODIFIED.into_response());
    }

    Ok(([(header::ETAG, etag)], Json(film)).into_response())
}

/// GET /api/rest/filme
///
/// Search by criteria query parameters; without parameters, lists all
/// films. Unknown criteria keys and empty results both yield 404.
pub async fn find(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<Vec<FilmMitSkript>>> {
    let filme = state.read.find(&params).await?;
    Ok(Json(filme))
}

/// POST /api/rest/filme
///
/// Creates a film with its nested skript and actors. Responds 201 with a
/// `Location` header pointing at the new resource; 422 on validation
/// failure or a duplicate IMDb number.
pub async fn post(
    State(state): State<AppState>,
    Json(film): Json<CreateFilm>,
) -> AppResult<Response> {
    validation::validate_create(&film)?;
    let id = state.write.create(&film).await?;

    let location = format!("/api/rest/filme/{id}");
    Ok((StatusCode::CREATED, [(header::LOCATION, location)]).into_response())
}

/// PUT /api/rest/filme/{id}
///
/// Versioned scalar-only update. Responds 204 with the new version in
/// `ETag`; 428 without `If-Match`; 412 for a malformed or outdated
/// version; 422 for field-validation failures.
pub async fn put(
    State(state): State<AppState>,
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(film): Json<UpdateFilm>,
) -> AppResult<Response> {
    let id = parse_id(&id)?;
    validation::validate_update(&film)?;

    let version = match headers.get(header::IF_MATCH) {
        Some(value) => Some(
            value
                .to_str()
                .map_err(|_| FilmError::VersionInvalid(format!("{value:?}")))?,
        ),
        None => None,
    };

    let neue_version = state.write.update(id, &film, version).await?;
    Ok((StatusCode::NO_CONTENT, [(header::ETAG, etag(neue_version))]).into_response())
}

/// DELETE /api/rest/filme/{id}
///
/// Deletes the film together with its skript and actors. 404 when the id
/// is unknown, 204 on success. A `false` from the service means another
/// delete removed the film row between the lookup and the transaction;
/// that caller gets the same 404 as an unknown id.
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> AppResult<StatusCode> {
    let id = parse_id(&id)?;
    if !state.write.delete(id).await? {
        return Err(FilmError::NotFound(format!("No film with id {id}")).into());
    }
    Ok(StatusCode::NO_CONTENT)
}
