pub mod filme;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/rest` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /filme           search by criteria (GET), create (POST)
/// /filme/{id}      get (GET), versioned update (PUT), delete (DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(filme::router())
}
