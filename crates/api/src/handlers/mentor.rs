//! Handlers for the `/mentors` resource (registration, login, directory).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use showcase_core::credentials::{registration_code_matches, validate_new_password};
use showcase_core::error::CoreError;
use showcase_core::roles::ROLE_MENTOR;
use showcase_core::submission::validate_submitter_name;
use showcase_core::types::DbId;
use showcase_db::models::mentor::{CreateMentor, MentorResponse};
use showcase_db::repositories::MentorRepo;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::{hash_password, verify_password};
use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /mentors/register`.
#[derive(Debug, Deserialize)]
pub struct RegisterMentorRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub registration_code: String,
}

/// Request body for `POST /mentors/login`.
#[derive(Debug, Deserialize)]
pub struct MentorLoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful mentor login.
#[derive(Debug, Serialize)]
pub struct MentorAuthResponse {
    pub access_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub mentor: MentorResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/mentors/register
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterMentorRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<MentorResponse>>)> {
    if !registration_code_matches(
        state.config.mentor_registration_code.as_deref(),
        &input.registration_code,
    ) {
        tracing::warn!("Mentor registration with invalid code");
        return Err(AppError::Core(CoreError::Forbidden(
            "Invalid registration code".into(),
        )));
    }

    let name = input.name.trim();
    validate_submitter_name(name)?;
    let email = input.email.trim().to_lowercase();
    if !email.contains('@') {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email address".into(),
        )));
    }
    validate_new_password(&input.password)?;

    if MentorRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "Email already registered".into(),
        )));
    }

    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let mentor = MentorRepo::create(
        &state.pool,
        &CreateMentor {
            name: name.to_string(),
            email,
            password_hash,
        },
    )
    .await?;

    tracing::info!(mentor_id = mentor.id, "Mentor registered");
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: mentor.into(),
        }),
    ))
}

/// POST /api/v1/mentors/login
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<MentorLoginRequest>,
) -> AppResult<Json<DataResponse<MentorAuthResponse>>> {
    let email = input.email.trim().to_lowercase();
    let mentor = MentorRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or(AppError::Core(CoreError::InvalidCredentials))?;

    let password_valid = verify_password(&input.password, &mentor.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(AppError::Core(CoreError::InvalidCredentials));
    }

    let access_token =
        generate_access_token(&mentor.id.to_string(), ROLE_MENTOR, &state.config.jwt)
            .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(mentor_id = mentor.id, "Mentor logged in");
    Ok(Json(DataResponse {
        data: MentorAuthResponse {
            access_token,
            expires_in: state.config.jwt.expires_in_secs(),
            mentor: mentor.into(),
        },
    }))
}

/// GET /api/v1/mentors
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<MentorResponse>>>> {
    let mentors = MentorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse {
        data: mentors.into_iter().map(Into::into).collect(),
    }))
}

/// GET /api/v1/mentors/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<MentorResponse>>> {
    let mentor = MentorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Mentor",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: mentor.into(),
    }))
}
