//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use showcase_core::credentials::FallbackCandidate;
use showcase_core::gallery::Tiered;
use showcase_core::leaderboard::ProjectSummary;
use showcase_core::rating::{Rated, RatingAggregate};
use showcase_core::status::{ProjectStatus, Tier};
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
///
/// `contact_no` doubles as the submitter's fallback credential and is never
/// serialized.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub domain: String,
    pub submitter_name: String,
    #[serde(skip_serializing)]
    pub contact_no: String,
    pub github_username: String,
    pub github_repo_link: String,
    pub deployed_link: Option<String>,
    pub linkedin_post: Option<String>,
    pub preview_image_id: Option<String>,
    pub tech_stack: Vec<String>,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub tier: Option<i16>,
    pub rating_count: i32,
    pub total_rating_score: i32,
    pub average_rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Project {
    pub fn rating_aggregate(&self) -> RatingAggregate {
        RatingAggregate {
            count: self.rating_count,
            total: self.total_rating_score,
            average: self.average_rating,
        }
    }
}

impl Rated for Project {
    fn rating_count(&self) -> i32 {
        self.rating_count
    }

    fn average_rating(&self) -> f64 {
        self.average_rating
    }
}

impl Tiered for Project {
    fn tier(&self) -> Option<Tier> {
        self.tier.and_then(|t| Tier::try_from(t).ok())
    }
}

/// DTO for a new submission. Handlers trim and validate before insert.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub submitter_name: String,
    pub contact_no: String,
    pub title: String,
    pub description: String,
    pub domain: String,
    pub github_username: String,
    pub github_repo_link: String,
    pub deployed_link: Option<String>,
    pub linkedin_post: Option<String>,
    pub preview_image_id: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// DTO for an owner edit. Replaces every listed field; absent links clear.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProject {
    pub title: String,
    pub description: String,
    pub domain: String,
    pub github_repo_link: String,
    pub deployed_link: Option<String>,
    pub linkedin_post: Option<String>,
    #[serde(default)]
    pub tech_stack: Vec<String>,
}

/// Submission-time identity columns, used by the member credential fallback.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectCredential {
    pub submitter_name: String,
    pub contact_no: String,
}

impl From<ProjectCredential> for FallbackCandidate {
    fn from(row: ProjectCredential) -> Self {
        FallbackCandidate {
            submitter_name: row.submitter_name,
            contact_no: row.contact_no,
        }
    }
}

/// Columns needed for statistics and the member leaderboard.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectSummaryRow {
    pub github_username: String,
    pub domain: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
}

impl From<ProjectSummaryRow> for ProjectSummary {
    fn from(row: ProjectSummaryRow) -> Self {
        ProjectSummary {
            github_username: row.github_username,
            domain: row.domain,
            status: row.status,
        }
    }
}
