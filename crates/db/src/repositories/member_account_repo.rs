//! Repository for the `member_accounts` table.

use sqlx::PgPool;

use crate::models::member_account::{CreateMemberAccount, MemberAccount};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, github_username, name, password_hash, created_at, updated_at";

/// Provides lookup, migration and rotation for member accounts.
pub struct MemberAccountRepo;

impl MemberAccountRepo {
    /// Find the account for a lowercase GitHub username.
    pub async fn find_by_github(
        pool: &PgPool,
        github_username: &str,
    ) -> Result<Option<MemberAccount>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM member_accounts WHERE github_username = $1");
        sqlx::query_as::<_, MemberAccount>(&query)
            .bind(github_username)
            .fetch_optional(pool)
            .await
    }

    /// Create the account for a migrating member.
    ///
    /// Returns `None` if an account for the username already exists, which
    /// happens only when two migrations race.
    pub async fn create(
        pool: &PgPool,
        input: &CreateMemberAccount,
    ) -> Result<Option<MemberAccount>, sqlx::Error> {
        let query = format!(
            "INSERT INTO member_accounts (github_username, name, password_hash)
             VALUES ($1, $2, $3)
             ON CONFLICT (github_username) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MemberAccount>(&query)
            .bind(&input.github_username)
            .bind(&input.name)
            .bind(&input.password_hash)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite name and password hash. Returns `None` if no account exists.
    pub async fn update_credentials(
        pool: &PgPool,
        github_username: &str,
        name: &str,
        password_hash: &str,
    ) -> Result<Option<MemberAccount>, sqlx::Error> {
        let query = format!(
            "UPDATE member_accounts SET name = $2, password_hash = $3
             WHERE github_username = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, MemberAccount>(&query)
            .bind(github_username)
            .bind(name)
            .bind(password_hash)
            .fetch_optional(pool)
            .await
    }
}
