//! Repository for the `reviews` table.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, Review};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, mentor_id, mentor_name, content, status_update, created_at";

/// Provides append and listing for mentor reviews.
pub struct ReviewRepo;

impl ReviewRepo {
    /// Append a review and, when it carries a status update, move the
    /// project to that status in the same transaction.
    ///
    /// Returns `None` if the project does not exist.
    pub async fn create(pool: &PgPool, input: &CreateReview) -> Result<Option<Review>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
                .bind(input.project_id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Ok(None);
        }

        let status_update = input.status_update.map(|s| s.as_str());

        let query = format!(
            "INSERT INTO reviews (project_id, mentor_id, mentor_name, content, status_update)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&query)
            .bind(input.project_id)
            .bind(input.mentor_id)
            .bind(&input.mentor_name)
            .bind(&input.content)
            .bind(status_update)
            .fetch_one(&mut *tx)
            .await?;

        if let Some(status) = status_update {
            sqlx::query("UPDATE projects SET status = $2 WHERE id = $1")
                .bind(input.project_id)
                .bind(status)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(Some(review))
    }

    /// All reviews of a project, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Review>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reviews
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Review>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
