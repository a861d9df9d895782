//! Handlers for mentor reviews.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use showcase_core::error::CoreError;
use showcase_core::status::ProjectStatus;
use showcase_core::types::DbId;
use showcase_db::models::review::{CreateReview, Review};
use showcase_db::repositories::{MentorRepo, ReviewRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::project::find_project;
use crate::middleware::rbac::RequireMentor;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /projects/{id}/reviews`.
#[derive(Debug, Deserialize)]
pub struct ReviewRequest {
    pub content: String,
    /// Optional status to move the project to along with the review.
    pub status_update: Option<String>,
}

/// POST /api/v1/projects/{id}/reviews
///
/// The reviewing mentor's id and name come from the token and the mentor
/// record, never from the request body.
pub async fn create(
    State(state): State<AppState>,
    RequireMentor(mentor_id): RequireMentor,
    Path(id): Path<DbId>,
    Json(input): Json<ReviewRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Review>>)> {
    let content = input.content.trim();
    if content.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Review content is required".into(),
        )));
    }
    let status_update = input
        .status_update
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<ProjectStatus>())
        .transpose()?;

    let mentor = MentorRepo::find_by_id(&state.pool, mentor_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Mentor account no longer exists".into(),
            ))
        })?;

    let review = ReviewRepo::create(
        &state.pool,
        &CreateReview {
            project_id: id,
            mentor_id,
            mentor_name: mentor.name,
            content: content.to_string(),
            status_update,
        },
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "Project",
        id,
    }))?;

    tracing::info!(
        project_id = id,
        mentor_id,
        review_id = review.id,
        status_update = review.status_update.as_deref(),
        "Review added",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: review })))
}

/// GET /api/v1/projects/{id}/reviews
///
/// Newest first.
pub async fn list_by_project(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Review>>>> {
    find_project(&state, id).await?;
    let reviews = ReviewRepo::list_by_project(&state.pool, id).await?;
    Ok(Json(DataResponse { data: reviews }))
}
