//! Route definitions for the `/mentors` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::mentor;
use crate::state::AppState;

/// Routes mounted at `/mentors`.
///
/// ```text
/// GET  /          -> list
/// POST /register  -> register
/// POST /login     -> login
/// GET  /{id}      -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(mentor::list))
        .route("/register", post(mentor::register))
        .route("/login", post(mentor::login))
        .route("/{id}", get(mentor::get_by_id))
}
