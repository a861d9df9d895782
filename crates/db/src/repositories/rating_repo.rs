//! Repository for the `ratings` table and the project rating aggregate.

use showcase_core::rating::{RatingAggregate, Score};
use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::rating::Rating;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_id, rater_github, score, created_at, updated_at";

/// Provides rating reads and the transactional rate operation.
pub struct RatingRepo;

impl RatingRepo {
    /// Record `rater_github`'s score for a project and refresh the project's
    /// aggregate, returning the new aggregate.
    ///
    /// Returns `None` if the project does not exist. The project row is
    /// locked for the duration, so concurrent raters of the same project are
    /// serialized. The rating row is written before the aggregate and both
    /// commit together.
    pub async fn rate(
        pool: &PgPool,
        project_id: DbId,
        rater_github: &str,
        score: Score,
    ) -> Result<Option<RatingAggregate>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let current: Option<(i32, i32)> = sqlx::query_as(
            "SELECT rating_count, total_rating_score FROM projects WHERE id = $1 FOR UPDATE",
        )
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((count, total)) = current else {
            return Ok(None);
        };

        let previous: Option<i16> = sqlx::query_scalar(
            "SELECT score FROM ratings WHERE rater_github = $1 AND project_id = $2",
        )
        .bind(rater_github)
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await?;

        let previous = previous
            .map(Score::try_from)
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;

        let aggregate = RatingAggregate::from_parts(count, total).apply(previous, score);

        sqlx::query(
            "INSERT INTO ratings (project_id, rater_github, score)
             VALUES ($1, $2, $3)
             ON CONFLICT (rater_github, project_id)
             DO UPDATE SET score = EXCLUDED.score",
        )
        .bind(project_id)
        .bind(rater_github)
        .bind(score.value())
        .execute(&mut *tx)
        .await?;

        sqlx::query(
            "UPDATE projects SET
                rating_count = $2,
                total_rating_score = $3,
                average_rating = $4
             WHERE id = $1",
        )
        .bind(project_id)
        .bind(aggregate.count)
        .bind(aggregate.total)
        .bind(aggregate.average)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            project_id,
            rater = %rater_github,
            revised = previous.is_some(),
            count = aggregate.count,
            average = aggregate.average,
            "Rating recorded",
        );
        Ok(Some(aggregate))
    }

    /// The rater's current score for a project, if they have rated it.
    pub async fn find_score(
        pool: &PgPool,
        project_id: DbId,
        rater_github: &str,
    ) -> Result<Option<i16>, sqlx::Error> {
        sqlx::query_scalar("SELECT score FROM ratings WHERE rater_github = $1 AND project_id = $2")
            .bind(rater_github)
            .bind(project_id)
            .fetch_optional(pool)
            .await
    }

    /// All ratings of a project, most recently updated first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Rating>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM ratings
             WHERE project_id = $1
             ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, Rating>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
