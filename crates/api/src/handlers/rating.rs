//! Handlers for project ratings.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use showcase_core::credentials::normalize_github_username;
use showcase_core::error::CoreError;
use showcase_core::rating::{RatingAggregate, Score};
use showcase_core::types::DbId;
use showcase_db::models::rating::Rating;
use showcase_db::repositories::RatingRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::project::find_project;
use crate::middleware::rbac::RequireMember;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /projects/{id}/rating`.
#[derive(Debug, Deserialize)]
pub struct RateRequest {
    pub score: i32,
}

/// Query parameters for `GET /projects/{id}/rating`.
#[derive(Debug, Deserialize)]
pub struct RaterParams {
    pub rater: String,
}

/// A rater's current score. `0` means "not rated".
#[derive(Debug, Serialize)]
pub struct UserRating {
    pub score: i16,
}

/// PUT /api/v1/projects/{id}/rating
///
/// Create or revise the caller's rating and return the project's new
/// aggregate.
pub async fn rate(
    State(state): State<AppState>,
    RequireMember(rater): RequireMember,
    Path(id): Path<DbId>,
    Json(input): Json<RateRequest>,
) -> AppResult<Json<DataResponse<RatingAggregate>>> {
    let score = Score::new(input.score)?;
    let aggregate = RatingRepo::rate(&state.pool, id, &rater, score)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(DataResponse { data: aggregate }))
}

/// GET /api/v1/projects/{id}/rating?rater=
pub async fn get_user_rating(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Query(params): Query<RaterParams>,
) -> AppResult<Json<DataResponse<UserRating>>> {
    let rater = normalize_github_username(&params.rater);
    let score = RatingRepo::find_score(&state.pool, id, &rater)
        .await?
        .unwrap_or(0);
    Ok(Json(DataResponse {
        data: UserRating { score },
    }))
}

/// GET /api/v1/projects/{id}/ratings
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Rating>>>> {
    find_project(&state, id).await?;
    let ratings = RatingRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: ratings }))
}
