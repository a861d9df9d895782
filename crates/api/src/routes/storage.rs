//! Route definitions for the `/storage` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::storage;
use crate::state::AppState;

/// Routes mounted at `/storage`.
///
/// ```text
/// POST /images       -> upload
/// GET  /images/{id}  -> get
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/images", post(storage::upload))
        .route("/images/{id}", get(storage::get))
}
