pub mod health;
pub mod member;
pub mod mentor;
pub mod project;
pub mod storage;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                 submit, list (public)
/// /projects/gallery                         tier-sectioned listing
/// /projects/top                             top rated
/// /projects/stats                           headline numbers
/// /projects/domains                         per-domain counts
/// /projects/{id}                            get, owner update (member)
/// /projects/{id}/status                     set status (mentor)
/// /projects/{id}/tier                       set or clear tier (mentor)
/// /projects/{id}/rating                     rate (member), get a rater's score
/// /projects/{id}/ratings                    all ratings
/// /projects/{id}/reviews                    add (mentor), list
///
/// /members/login                            fallback or account login
/// /members/change-password                  rotate or migrate credential
/// /members/me/projects                      own projects (member)
/// /members/leaderboard                      ranked members
///
/// /mentors                                  list
/// /mentors/register                         register with code
/// /mentors/login                            login
/// /mentors/{id}                             get
///
/// /storage/images                           upload
/// /storage/images/{id}                      download
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/members", member::router())
        .nest("/mentors", mentor::router())
        .nest("/storage", storage::router())
}
