//! Review entity model and DTOs.

use serde::Serialize;
use showcase_core::status::ProjectStatus;
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A mentor review from the `reviews` table. Reviews are append-only.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Review {
    pub id: DbId,
    pub project_id: DbId,
    pub mentor_id: DbId,
    pub mentor_name: String,
    pub content: String,
    /// Status the mentor moved the project to with this review, if any.
    pub status_update: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a review.
#[derive(Debug)]
pub struct CreateReview {
    pub project_id: DbId,
    pub mentor_id: DbId,
    pub mentor_name: String,
    pub content: String,
    pub status_update: Option<ProjectStatus>,
}
