//! DTO validation for write requests.
//!
//! Aggregates the `kino-core` field checks into one per-request pass.
//! All violations are collected so the caller sees every broken field at
//! once, and surface as a 422 with per-field messages.

use kino_core::error::FilmError;
use kino_core::film;
use kino_db::models::film::{CreateFilm, UpdateFilm};

/// Validate a create payload including the nested skript and actors.
pub fn validate_create(input: &CreateFilm) -> Result<(), FilmError> {
    let mut messages = scalar_messages(
        &input.imdb,
        input.rating,
        input.erscheinungsjahr,
        input.schlagwoerter.as_deref(),
    );

    if let Err(msg) = film::validate_titel(&input.skript.titel) {
        messages.push(msg);
    }
    for schauspieler in input.schauspieler.as_deref().unwrap_or(&[]) {
        if let Err(msg) = film::validate_name(&schauspieler.name) {
            messages.push(msg);
        }
    }

    finish(messages)
}

/// Validate an update payload (scalar fields only).
pub fn validate_update(input: &UpdateFilm) -> Result<(), FilmError> {
    finish(scalar_messages(
        &input.imdb,
        input.rating,
        input.erscheinungsjahr,
        input.schlagwoerter.as_deref(),
    ))
}

fn scalar_messages(
    imdb: &str,
    rating: i32,
    erscheinungsjahr: i32,
    schlagwoerter: Option<&[String]>,
) -> Vec<String> {
    let mut messages = Vec::new();
    if let Err(msg) = film::validate_imdb(imdb) {
        messages.push(msg);
    }
    if let Err(msg) = film::validate_rating(rating) {
        messages.push(msg);
    }
    if let Err(msg) = film::validate_erscheinungsjahr(erscheinungsjahr) {
        messages.push(msg);
    }
    if let Some(woerter) = schlagwoerter {
        if let Err(msg) = film::validate_schlagwoerter(woerter) {
            messages.push(msg);
        }
    }
    messages
}

fn finish(messages: Vec<String>) -> Result<(), FilmError> {
    if messages.is_empty() {
        Ok(())
    } else {
        Err(FilmError::Validation(messages))
    }
}
