//! Mentor entity model and DTOs.

use serde::Serialize;
use showcase_core::roles::ROLE_MENTOR;
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// Full mentor row from the `mentors` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`MentorResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Mentor {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe mentor representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct MentorResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub role: &'static str,
    pub created_at: Timestamp,
}

impl From<Mentor> for MentorResponse {
    fn from(mentor: Mentor) -> Self {
        MentorResponse {
            id: mentor.id,
            name: mentor.name,
            email: mentor.email,
            role: ROLE_MENTOR,
            created_at: mentor.created_at,
        }
    }
}

/// DTO for creating a mentor. The email must already be lowercased.
#[derive(Debug)]
pub struct CreateMentor {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}
