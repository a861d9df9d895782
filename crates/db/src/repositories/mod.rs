//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async query methods
//! that accept `&PgPool` as the first argument.

pub mod member_account_repo;
pub mod mentor_repo;
pub mod project_repo;
pub mod rating_repo;
pub mod review_repo;

pub use member_account_repo::MemberAccountRepo;
pub use mentor_repo::MentorRepo;
pub use project_repo::ProjectRepo;
pub use rating_repo::RatingRepo;
pub use review_repo::ReviewRepo;
