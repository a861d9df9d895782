//! Member credential resolution.
//!
//! A member is identified by their lowercase GitHub username and is in one
//! of two phases:
//!
//! - **Unmigrated**: no account record exists. Any of the member's project
//!   submissions whose submitter name (case-insensitive) and contact number
//!   (exact) match authenticates them.
//! - **Migrated**: an account record exists and is the only credential
//!   source from then on.
//!
//! The first successful password change moves a member from the first
//! phase to the second. Callers load an [`IdentityPhase`], then run
//! [`authenticate`] or [`plan_password_change`] against it.

use crate::error::CoreError;

/// Minimum length for a password chosen by a member or mentor.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Checks a plaintext password against a stored hash.
///
/// The hashing scheme lives with the server; the resolver only needs a
/// yes/no answer.
pub trait PasswordVerifier {
    fn verify(&self, password: &str, hash: &str) -> Result<bool, CoreError>;
}

/// A migrated member's stored credential.
#[derive(Debug, Clone)]
pub struct StoredAccount {
    pub github_username: String,
    pub name: String,
    pub password_hash: String,
}

/// Submission-time identity taken from one of the member's projects.
#[derive(Debug, Clone)]
pub struct FallbackCandidate {
    pub submitter_name: String,
    pub contact_no: String,
}

/// Which credential source is authoritative for a username.
#[derive(Debug, Clone)]
pub enum IdentityPhase {
    Migrated(StoredAccount),
    Unmigrated(Vec<FallbackCandidate>),
}

impl IdentityPhase {
    /// An account, when present, always wins over project-derived identity.
    pub fn resolve(account: Option<StoredAccount>, candidates: Vec<FallbackCandidate>) -> Self {
        match account {
            Some(account) => IdentityPhase::Migrated(account),
            None => IdentityPhase::Unmigrated(candidates),
        }
    }
}

/// Outcome of a successful member login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedMember {
    pub github_username: String,
    pub name: String,
    /// Set while the member still authenticates with their fallback
    /// credential; the client should force a password change.
    pub needs_password_change: bool,
}

/// What a successful password change must persist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PasswordChange {
    /// Overwrite the existing account's password and name.
    Rotate { name: String },
    /// Create the account, permanently retiring the fallback credential.
    Migrate { name: String },
}

/// Lowercase (and trim) a GitHub username for lookups.
pub fn normalize_github_username(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn names_match(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn find_fallback<'a>(
    candidates: &'a [FallbackCandidate],
    name: &str,
    contact_no: &str,
) -> Option<&'a FallbackCandidate> {
    candidates
        .iter()
        .find(|c| names_match(&c.submitter_name, name) && c.contact_no == contact_no)
}

/// Authenticate a member login attempt.
///
/// Fails with [`CoreError::NoProjectsFound`] when an unmigrated username has
/// no submissions, and [`CoreError::InvalidCredentials`] on any mismatch.
pub fn authenticate(
    phase: &IdentityPhase,
    github_username: &str,
    name: &str,
    password: &str,
    verifier: &dyn PasswordVerifier,
) -> Result<ResolvedMember, CoreError> {
    match phase {
        IdentityPhase::Migrated(account) => {
            // Verify first so a wrong name costs the same as a wrong password.
            let password_ok = verifier.verify(password, &account.password_hash)?;
            if !password_ok || !names_match(&account.name, name) {
                return Err(CoreError::InvalidCredentials);
            }
            Ok(ResolvedMember {
                github_username: account.github_username.clone(),
                name: account.name.clone(),
                needs_password_change: false,
            })
        }
        IdentityPhase::Unmigrated(candidates) => {
            if candidates.is_empty() {
                return Err(CoreError::NoProjectsFound);
            }
            let matched =
                find_fallback(candidates, name, password).ok_or(CoreError::InvalidCredentials)?;
            Ok(ResolvedMember {
                github_username: normalize_github_username(github_username),
                name: matched.submitter_name.clone(),
                needs_password_change: true,
            })
        }
    }
}

/// Decide what a password change should write.
///
/// A migrated member only needs the old password (the name is not
/// re-checked and is overwritten with the supplied one). An unmigrated
/// member must present a matching fallback credential; the new account
/// takes the submitter name from the matched project.
pub fn plan_password_change(
    phase: &IdentityPhase,
    name: &str,
    old_password: &str,
    new_password: &str,
    verifier: &dyn PasswordVerifier,
) -> Result<PasswordChange, CoreError> {
    let change = match phase {
        IdentityPhase::Migrated(account) => {
            if !verifier.verify(old_password, &account.password_hash)? {
                return Err(CoreError::InvalidOldPassword);
            }
            PasswordChange::Rotate {
                name: name.trim().to_string(),
            }
        }
        IdentityPhase::Unmigrated(candidates) => {
            let matched =
                find_fallback(candidates, name, old_password).ok_or(CoreError::InvalidOldPassword)?;
            PasswordChange::Migrate {
                name: matched.submitter_name.clone(),
            }
        }
    };
    validate_new_password(new_password)?;
    Ok(change)
}

/// Reject passwords shorter than [`MIN_PASSWORD_LENGTH`] characters.
pub fn validate_new_password(password: &str) -> Result<(), CoreError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::Validation(format!(
            "Password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Compare a supplied registration code with the configured one.
///
/// An unset code rejects everything. The comparison does not short-circuit
/// on the first differing byte.
pub fn registration_code_matches(configured: Option<&str>, supplied: &str) -> bool {
    let Some(expected) = configured.filter(|c| !c.is_empty()) else {
        return false;
    };
    let (a, b) = (expected.as_bytes(), supplied.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
