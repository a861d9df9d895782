//! Handlers for the `/members` resource.
//!
//! Members have no sign-up step. Until they choose a password they log in
//! with the name and contact number from one of their submissions; the first
//! password change migrates them to a stored account for good.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use showcase_core::credentials::{
    authenticate, normalize_github_username, plan_password_change, IdentityPhase,
    PasswordChange, ResolvedMember,
};
use showcase_core::error::CoreError;
use showcase_core::leaderboard::{
    member_leaderboard, MemberStanding, ProjectSummary, DEFAULT_LEADERBOARD_LIMIT,
};
use showcase_core::roles::ROLE_MEMBER;
use showcase_db::models::member_account::CreateMemberAccount;
use showcase_db::models::project::Project;
use showcase_db::repositories::{MemberAccountRepo, ProjectRepo};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, Argon2Verifier};
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireMember;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /members/login`.
#[derive(Debug, Deserialize)]
pub struct MemberLoginRequest {
    pub name: String,
    pub github_username: String,
    pub password: String,
}

/// Request body for `POST /members/change-password`.
#[derive(Debug, Deserialize)]
pub struct ChangePasswordRequest {
    pub name: String,
    pub github_username: String,
    pub old_password: String,
    pub new_password: String,
}

/// Successful member login.
#[derive(Debug, Serialize)]
pub struct MemberAuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub member: ResolvedMember,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/members/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<MemberLoginRequest>,
) -> AppResult<Json<DataResponse<MemberAuthResponse>>> {
    let github = normalize_github_username(&input.github_username);
    let phase = load_identity(&state, &github).await?;

    let member = authenticate(
        &phase,
        &github,
        &input.name,
        &input.password,
        &Argon2Verifier,
    )
    .inspect_err(|e| tracing::debug!(github = %github, error = %e, "Member login rejected"))?;

    let access_token = generate_access_token(&member.github_username, ROLE_MEMBER, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(
        github = %member.github_username,
        needs_password_change = member.needs_password_change,
        "Member logged in",
    );
    Ok(Json(DataResponse {
        data: MemberAuthResponse {
            access_token,
            expires_in: state.config.jwt.expires_in_secs(),
            member,
        },
    }))
}

/// POST /api/v1/members/change-password
///
/// Rotates a migrated member's password, or migrates a member still on
/// their fallback credential.
pub async fn change_password(
    State(state): State<AppState>,
    Json(input): Json<ChangePasswordRequest>,
) -> AppResult<Json<DataResponse<ResolvedMember>>> {
    let github = normalize_github_username(&input.github_username);
    let phase = load_identity(&state, &github).await?;

    let change = plan_password_change(
        &phase,
        &input.name,
        &input.old_password,
        &input.new_password,
        &Argon2Verifier,
    )?;

    let password_hash = hash_password(&input.new_password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = match change {
        PasswordChange::Rotate { name } => {
            MemberAccountRepo::update_credentials(&state.pool, &github, &name, &password_hash)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Internal(format!(
                        "Account for {github} vanished during password change"
                    )))
                })?
        }
        PasswordChange::Migrate { name } => {
            let input = CreateMemberAccount {
                github_username: github.clone(),
                name,
                password_hash,
            };
            MemberAccountRepo::create(&state.pool, &input)
                .await?
                .ok_or_else(|| {
                    AppError::Core(CoreError::Conflict(
                        "Account was created by a concurrent password change".into(),
                    ))
                })?
        }
    };

    tracing::info!(github = %github, "Member password changed");
    Ok(Json(DataResponse {
        data: ResolvedMember {
            github_username: account.github_username,
            name: account.name,
            needs_password_change: false,
        },
    }))
}

/// GET /api/v1/members/me/projects
pub async fn my_projects(
    State(state): State<AppState>,
    RequireMember(github): RequireMember,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list_by_github(&state.pool, &github).await?;
    Ok(Json(DataResponse { data: projects }))
}

/// GET /api/v1/members/leaderboard
pub async fn leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<Vec<MemberStanding>>>> {
    let limit = params.limit.unwrap_or(DEFAULT_LEADERBOARD_LIMIT);
    let summaries: Vec<ProjectSummary> = ProjectRepo::list_summaries(&state.pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(DataResponse {
        data: member_leaderboard(&summaries, limit),
    }))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve which credential is authoritative for `github`.
///
/// Fallback candidates are only loaded while no account exists.
async fn load_identity(state: &AppState, github: &str) -> AppResult<IdentityPhase> {
    let account = MemberAccountRepo::find_by_github(&state.pool, github).await?;
    let candidates = match account {
        Some(_) => Vec::new(),
        None => ProjectRepo::list_credentials_by_github(&state.pool, github)
            .await?
            .into_iter()
            .map(Into::into)
            .collect(),
    };
    Ok(IdentityPhase::resolve(account.map(Into::into), candidates))
}
