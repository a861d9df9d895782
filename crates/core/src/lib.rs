//! Domain logic for the project showcase.
//!
//! Everything here is synchronous and free of I/O so it can be exercised
//! without a database.

pub mod credentials;
pub mod error;
pub mod filter;
pub mod gallery;
pub mod leaderboard;
pub mod rating;
pub mod roles;
pub mod status;
pub mod submission;
pub mod types;
