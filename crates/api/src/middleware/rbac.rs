//! Role-based access control extractors.
//!
//! Each extractor wraps [`AuthUser`] and rejects requests whose role does not
//! match. The wrapped value is the role's identity, already decoded from the
//! token subject.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use showcase_core::error::CoreError;
use showcase_core::roles::{ROLE_MEMBER, ROLE_MENTOR};
use showcase_core::types::DbId;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Requires the `member` role. Holds the member's lowercase GitHub username.
///
/// ```ignore
/// async fn mine(RequireMember(github): RequireMember) -> AppResult<Json<()>> {
///     Ok(Json(()))
/// }
/// ```
pub struct RequireMember(pub String);

impl FromRequestParts<AppState> for RequireMember {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_MEMBER {
            return Err(AppError::Core(CoreError::Forbidden(
                "Member role required".into(),
            )));
        }
        Ok(RequireMember(user.subject))
    }
}

/// Requires the `mentor` role. Holds the mentor's id.
pub struct RequireMentor(pub DbId);

impl FromRequestParts<AppState> for RequireMentor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        if user.role != ROLE_MENTOR {
            return Err(AppError::Core(CoreError::Forbidden(
                "Mentor role required".into(),
            )));
        }
        let mentor_id = user.subject.parse::<DbId>().map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;
        Ok(RequireMentor(mentor_id))
    }
}
