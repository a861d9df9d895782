//! Route definitions for the `/members` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::member;
use crate::state::AppState;

/// Routes mounted at `/members`.
///
/// ```text
/// POST /login            -> login
/// POST /change-password  -> change_password
/// GET  /me/projects      -> my_projects (member)
/// GET  /leaderboard      -> leaderboard
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(member::login))
        .route("/change-password", post(member::change_password))
        .route("/me/projects", get(member::my_projects))
        .route("/leaderboard", get(member::leaderboard))
}
