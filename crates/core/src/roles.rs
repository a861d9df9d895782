//! Well-known role name constants carried in access-token claims.

/// A project submitter authenticated through the member credential flow.
pub const ROLE_MEMBER: &str = "member";

/// A reviewer registered with the mentor registration code.
pub const ROLE_MENTOR: &str = "mentor";
