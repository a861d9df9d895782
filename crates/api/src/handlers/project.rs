//! Handlers for the `/projects` resource: submission, gallery, statistics,
//! owner edits and mentor moderation.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use showcase_core::credentials::normalize_github_username;
use showcase_core::error::CoreError;
use showcase_core::gallery::TieredGallery;
use showcase_core::leaderboard::{
    domain_counts, showcase_stats, DomainCount, ProjectSummary, ShowcaseStats,
};
use showcase_core::rating::{rank_top, DEFAULT_TOP_LIMIT};
use showcase_core::status::{ProjectStatus, Tier};
use showcase_core::submission::{
    check_submission_cooldown, normalize_optional_link, normalize_tech_stack,
    validate_contact_no, validate_github_username, validate_submitter_name, SubmissionFields,
};
use showcase_core::types::DbId;
use showcase_db::models::project::{CreateProject, Project, UpdateProject};
use showcase_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireMember, RequireMentor};
use crate::query::{LimitParams, ProjectFilterParams};
use crate::response::DataResponse;
use crate::state::AppState;
use crate::storage::is_valid_image_id;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PATCH /projects/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct StatusRequest {
    pub status: String,
}

/// Request body for `PATCH /projects/{id}/tier`. `null` clears the tier.
#[derive(Debug, Deserialize)]
pub struct TierRequest {
    pub tier: Option<i16>,
}

// ---------------------------------------------------------------------------
// Submission and listing
// ---------------------------------------------------------------------------

/// POST /api/v1/projects
///
/// Validate and store a new submission. A contact number may submit once
/// every five minutes.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    let submitter_name = input.submitter_name.trim();
    let contact_no = input.contact_no.trim();
    validate_submitter_name(submitter_name)?;
    validate_contact_no(contact_no)?;
    validate_github_username(&input.github_username)?;

    let domain = SubmissionFields {
        title: &input.title,
        description: &input.description,
        domain: &input.domain,
        github_repo_link: &input.github_repo_link,
        tech_stack: &input.tech_stack,
    }
    .validate()?;

    let preview_image_id = normalize_optional_link(input.preview_image_id.as_deref());
    if let Some(id) = &preview_image_id {
        if !is_valid_image_id(id) {
            return Err(AppError::Core(CoreError::Validation(
                "Invalid preview image id".into(),
            )));
        }
    }

    let last = ProjectRepo::latest_submission_by_contact(&state.pool, contact_no).await?;
    check_submission_cooldown(last, Utc::now())?;

    let normalized = CreateProject {
        submitter_name: submitter_name.to_string(),
        contact_no: contact_no.to_string(),
        title: input.title.trim().to_string(),
        description: input.description.trim().to_string(),
        domain: domain.as_str().to_string(),
        github_username: normalize_github_username(&input.github_username),
        github_repo_link: input.github_repo_link.trim().to_string(),
        deployed_link: normalize_optional_link(input.deployed_link.as_deref()),
        linkedin_post: normalize_optional_link(input.linkedin_post.as_deref()),
        preview_image_id,
        tech_stack: normalize_tech_stack(&input.tech_stack),
    };

    let project = ProjectRepo::create(&state.pool, &normalized).await?;
    tracing::info!(
        project_id = project.id,
        github = %project.github_username,
        domain = %project.domain,
        "Project submitted",
    );
    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let filter = params.to_filter()?;
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/projects/gallery
///
/// Same filters as [`list`], split into tier sections.
pub async fn gallery(
    State(state): State<AppState>,
    Query(params): Query<ProjectFilterParams>,
) -> AppResult<Json<DataResponse<TieredGallery<Project>>>> {
    let filter = params.to_filter()?;
    let projects = ProjectRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse {
        data: TieredGallery::group(projects),
    }))
}

/// GET /api/v1/projects/top
///
/// Rated projects by average, then rating count. Defaults to five.
pub async fn top(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_TOP_LIMIT);
    let rated = ProjectRepo::list_rated(&state.pool).await?;
    Ok(Json(DataResponse {
        data: rank_top(rated, limit),
    }))
}

/// GET /api/v1/projects/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<DataResponse<ShowcaseStats>>> {
    let summaries = load_summaries(&state).await?;
    Ok(Json(DataResponse {
        data: showcase_stats(&summaries),
    }))
}

/// GET /api/v1/projects/domains
pub async fn domains(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<DomainCount>>>> {
    let summaries = load_summaries(&state).await?;
    Ok(Json(DataResponse {
        data: domain_counts(&summaries),
    }))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Project>>> {
    let project = find_project(&state, id).await?;
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// Owner edits
// ---------------------------------------------------------------------------

/// PUT /api/v1/projects/{id}
///
/// Only the member whose GitHub username is on the project may edit it.
pub async fn update(
    State(state): State<AppState>,
    RequireMember(github): RequireMember,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    let existing = find_project(&state, id).await?;
    if existing.github_username != github {
        return Err(AppError::Core(CoreError::Forbidden("Unauthorized".into())));
    }

    let domain = SubmissionFields {
        title: &input.title,
        description: &input.description,
        domain: &input.domain,
        github_repo_link: &input.github_repo_link,
        tech_stack: &input.tech_stack,
    }
    .validate()?;

    let normalized = UpdateProject {
        title: input.title.trim().to_string(),
        description: input.description.trim().to_string(),
        domain: domain.as_str().to_string(),
        github_repo_link: input.github_repo_link.trim().to_string(),
        deployed_link: normalize_optional_link(input.deployed_link.as_deref()),
        linkedin_post: normalize_optional_link(input.linkedin_post.as_deref()),
        tech_stack: normalize_tech_stack(&input.tech_stack),
    };

    let project = ProjectRepo::update(&state.pool, id, &normalized)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(project_id = id, github = %github, "Project updated by owner");
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// Mentor moderation
// ---------------------------------------------------------------------------

/// PATCH /api/v1/projects/{id}/status
pub async fn update_status(
    State(state): State<AppState>,
    RequireMentor(mentor_id): RequireMentor,
    Path(id): Path<DbId>,
    Json(input): Json<StatusRequest>,
) -> AppResult<Json<DataResponse<Project>>> {
    let status: ProjectStatus = input.status.trim().parse()?;
    let project = ProjectRepo::update_status(&state.pool, id, status)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(project_id = id, mentor_id, status = %status, "Project status updated");
    Ok(Json(DataResponse { data: project }))
}

/// PATCH /api/v1/projects/{id}/tier
pub async fn update_tier(
    State(state): State<AppState>,
    RequireMentor(mentor_id): RequireMentor,
    Path(id): Path<DbId>,
    Json(input): Json<TierRequest>,
) -> AppResult<Json<DataResponse<Project>>> {
    let tier = input.tier.map(Tier::try_from).transpose()?;
    let project = ProjectRepo::update_tier(&state.pool, id, tier)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(
        project_id = id,
        mentor_id,
        tier = tier.map(Tier::label),
        "Project tier updated",
    );
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Load a project or fail with `NotFound`.
pub(crate) async fn find_project(state: &AppState, id: DbId) -> AppResult<Project> {
    ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
}

async fn load_summaries(state: &AppState) -> AppResult<Vec<ProjectSummary>> {
    let rows = ProjectRepo::list_summaries(&state.pool).await?;
    Ok(rows.into_iter().map(Into::into).collect())
}
