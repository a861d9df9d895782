//! Repository for the `mentors` table.

use showcase_core::types::DbId;
use sqlx::PgPool;

use crate::models::mentor::{CreateMentor, Mentor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

/// Provides CRUD operations for mentors.
pub struct MentorRepo;

impl MentorRepo {
    /// Insert a new mentor, returning the created row.
    ///
    /// A duplicate email violates `uq_mentors_email`.
    pub async fn create(pool: &PgPool, input: &CreateMentor) -> Result<Mentor, sqlx::Error> {
        let query = format!(
            "INSERT INTO mentors (name, email, password_hash)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Mentor>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Find a mentor by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors WHERE id = $1");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a mentor by lowercase email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors WHERE email = $1");
        sqlx::query_as::<_, Mentor>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// List all mentors ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Mentor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM mentors ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Mentor>(&query).fetch_all(pool).await
    }
}
