use axum::routing::get;
use axum::Router;

use crate::handlers::film;
use crate::state::AppState;

/// Mount the film CRUD routes (intended under `/api/rest`).
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/filme", get(film::find).post(film::post))
        .route(
            "/filme/{id}",
            get(film::get_by_id).put(film::put).delete(film::delete),
        )
}
