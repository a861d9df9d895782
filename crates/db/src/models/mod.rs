//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - `Deserialize` DTOs for inserts and patches
//! - Narrow projections used by a single query, where needed

pub mod member_account;
pub mod mentor;
pub mod project;
pub mod rating;
pub mod review;
