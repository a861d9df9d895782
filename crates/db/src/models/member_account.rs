//! Member account model and DTOs.

use showcase_core::credentials::StoredAccount;
use showcase_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A migrated member's credential row from `member_accounts`.
///
/// Contains the password hash and is never serialized.
#[derive(Debug, Clone, FromRow)]
pub struct MemberAccount {
    pub id: DbId,
    pub github_username: String,
    pub name: String,
    pub password_hash: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<MemberAccount> for StoredAccount {
    fn from(account: MemberAccount) -> Self {
        StoredAccount {
            github_username: account.github_username,
            name: account.name,
            password_hash: account.password_hash,
        }
    }
}

/// DTO for creating an account during credential migration.
#[derive(Debug)]
pub struct CreateMemberAccount {
    pub github_username: String,
    pub name: String,
    pub password_hash: String,
}
