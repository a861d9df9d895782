//! Rating entity model.

use serde::Serialize;
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// One rater's current score for one project. `(rater_github, project_id)`
/// is unique; a re-rate updates the row in place.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Rating {
    pub id: DbId,
    pub project_id: DbId,
    pub rater_github: String,
    pub score: i16,
    pub created_at: Timestamp,
    /// Time of the most recent submission by this rater.
    pub updated_at: Timestamp,
}
