//! Authentication and authorization extractors.
//!
//! - [`auth::AuthUser`] -- Extracts the caller from a JWT Bearer token.
//! - [`rbac::RequireMember`] -- Requires the `member` role.
//! - [`rbac::RequireMentor`] -- Requires the `mentor` role.

pub mod auth;
pub mod rbac;
