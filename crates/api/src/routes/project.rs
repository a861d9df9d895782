//! Route definitions for the `/projects` resource, including its ratings
//! and reviews.

use axum::routing::{get, patch};
use axum::Router;

use crate::handlers::{project, rating, review};
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// GET    /                 -> list
/// POST   /                 -> create
/// GET    /gallery          -> gallery
/// GET    /top              -> top
/// GET    /stats            -> stats
/// GET    /domains          -> domains
/// GET    /{id}             -> get_by_id
/// PUT    /{id}             -> update (owner)
/// PATCH  /{id}/status      -> update_status (mentor)
/// PATCH  /{id}/tier        -> update_tier (mentor)
/// GET    /{id}/rating      -> get_user_rating
/// PUT    /{id}/rating      -> rate (member)
/// GET    /{id}/ratings     -> list_by_project
/// GET    /{id}/reviews     -> list_by_project
/// POST   /{id}/reviews     -> create (mentor)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/gallery", get(project::gallery))
        .route("/top", get(project::top))
        .route("/stats", get(project::stats))
        .route("/domains", get(project::domains))
        .route("/{id}", get(project::get_by_id).put(project::update))
        .route("/{id}/status", patch(project::update_status))
        .route("/{id}/tier", patch(project::update_tier))
        .route("/{id}/rating", get(rating::get_user_rating).put(rating::rate))
        .route("/{id}/ratings", get(rating::list_by_project))
        .route("/{id}/reviews", get(review::list_by_project).post(review::create))
}
