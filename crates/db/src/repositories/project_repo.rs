//! Repository for the `projects` table.

use showcase_core::filter::ProjectFilter;
use showcase_core::status::{ProjectStatus, Tier};
use showcase_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::project::{
    CreateProject, Project, ProjectCredential, ProjectSummaryRow, UpdateProject,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, domain, submitter_name, contact_no, \
    github_username, github_repo_link, deployed_link, linkedin_post, preview_image_id, \
    tech_stack, status, tier, rating_count, total_rating_score, average_rating, \
    created_at, updated_at";

/// Provides submission, gallery, and moderation queries for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new submission, returning the created row.
    ///
    /// New projects start `pending`, untiered, with an empty rating aggregate.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (submitter_name, contact_no, title, description, domain, github_username,
                 github_repo_link, deployed_link, linkedin_post, preview_image_id, tech_stack)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.submitter_name)
            .bind(&input.contact_no)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.domain)
            .bind(&input.github_username)
            .bind(&input.github_repo_link)
            .bind(&input.deployed_link)
            .bind(&input.linkedin_post)
            .bind(&input.preview_image_id)
            .bind(&input.tech_stack)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List projects matching `filter`, newest first.
    pub async fn list(pool: &PgPool, filter: &ProjectFilter) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::TEXT IS NULL OR status = $1)
               AND ($2::TEXT IS NULL OR domain = $2)
               AND ($3::TEXT IS NULL
                    OR strpos(LOWER(title), $3) > 0
                    OR strpos(LOWER(description), $3) > 0
                    OR strpos(github_username, $3) > 0)
               AND (cardinality($4::TEXT[]) = 0 OR tech_stack && $4)
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(filter.status.map(ProjectStatus::as_str))
            .bind(filter.domain.map(|d| d.as_str()))
            .bind(&filter.search)
            .bind(&filter.tech_stack)
            .fetch_all(pool)
            .await
    }

    /// List every project with at least one rating, newest first.
    ///
    /// Ranking happens in `showcase_core::rating::rank_top`; this order is
    /// its tie-break for identical averages and counts.
    pub async fn list_rated(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE rating_count > 0
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// List a member's submissions, newest first. `github_username` must be
    /// lowercase.
    pub async fn list_by_github(
        pool: &PgPool,
        github_username: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE github_username = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(github_username)
            .fetch_all(pool)
            .await
    }

    /// Submission-time name and contact for every project of a member.
    pub async fn list_credentials_by_github(
        pool: &PgPool,
        github_username: &str,
    ) -> Result<Vec<ProjectCredential>, sqlx::Error> {
        sqlx::query_as::<_, ProjectCredential>(
            "SELECT submitter_name, contact_no FROM projects
             WHERE github_username = $1
             ORDER BY created_at DESC, id DESC",
        )
        .bind(github_username)
        .fetch_all(pool)
        .await
    }

    /// Creation time of the most recent submission from a contact number.
    pub async fn latest_submission_by_contact(
        pool: &PgPool,
        contact_no: &str,
    ) -> Result<Option<Timestamp>, sqlx::Error> {
        sqlx::query_scalar::<_, Option<Timestamp>>(
            "SELECT MAX(created_at) FROM projects WHERE contact_no = $1",
        )
        .bind(contact_no)
        .fetch_one(pool)
        .await
    }

    /// Apply an owner edit. Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                description = $3,
                domain = $4,
                github_repo_link = $5,
                deployed_link = $6,
                linkedin_post = $7,
                tech_stack = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.domain)
            .bind(&input.github_repo_link)
            .bind(&input.deployed_link)
            .bind(&input.linkedin_post)
            .bind(&input.tech_stack)
            .fetch_optional(pool)
            .await
    }

    /// Set the lifecycle status. Returns `None` if the project does not exist.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: ProjectStatus,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("UPDATE projects SET status = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(pool)
            .await
    }

    /// Set or clear the display tier. Returns `None` if the project does not exist.
    pub async fn update_tier(
        pool: &PgPool,
        id: DbId,
        tier: Option<Tier>,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("UPDATE projects SET tier = $2 WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(tier.map(Tier::id))
            .fetch_optional(pool)
            .await
    }

    /// Username, domain and status of every project.
    pub async fn list_summaries(pool: &PgPool) -> Result<Vec<ProjectSummaryRow>, sqlx::Error> {
        sqlx::query_as::<_, ProjectSummaryRow>(
            "SELECT github_username, domain, status FROM projects",
        )
        .fetch_all(pool)
        .await
    }
}
