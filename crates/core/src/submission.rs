//! Project submission validation and rate limiting.
//!
//! Every text field is validated after trimming. Callers persist the trimmed
//! values, with tech stack entries passed through [`normalize_tech_stack`]
//! and optional links through [`normalize_optional_link`].

use std::sync::LazyLock;

use chrono::Duration;
use regex::Regex;

use crate::error::CoreError;
use crate::status::ProjectDomain;
use crate::types::Timestamp;

/// Minimum time between two submissions that share a contact number.
pub const SUBMISSION_COOLDOWN_SECS: i64 = 5 * 60;

pub const MIN_SUBMITTER_NAME_LENGTH: usize = 2;
pub const MIN_TITLE_LENGTH: usize = 3;
pub const MIN_DESCRIPTION_LENGTH: usize = 20;

/// GitHub's own username rule: alphanumerics and inner hyphens, 1-39 chars.
static GITHUB_USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,37}[a-zA-Z0-9])?$")
        .expect("GitHub username pattern is valid")
});

/// The editable, user-supplied text of a project.
#[derive(Debug, Clone)]
pub struct SubmissionFields<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub domain: &'a str,
    pub github_repo_link: &'a str,
    pub tech_stack: &'a [String],
}

impl SubmissionFields<'_> {
    /// Validate the fields shared by submission and owner edits, returning
    /// the parsed domain.
    pub fn validate(&self) -> Result<ProjectDomain, CoreError> {
        validate_min_length("Title", self.title, MIN_TITLE_LENGTH)?;
        validate_min_length("Description", self.description, MIN_DESCRIPTION_LENGTH)?;
        validate_repo_link(self.github_repo_link)?;
        validate_tech_stack(self.tech_stack)?;
        self.domain.trim().parse()
    }
}

fn validate_min_length(field: &str, value: &str, min: usize) -> Result<(), CoreError> {
    if value.trim().chars().count() < min {
        return Err(CoreError::Validation(format!(
            "{field} must be at least {min} characters"
        )));
    }
    Ok(())
}

pub fn validate_submitter_name(name: &str) -> Result<(), CoreError> {
    validate_min_length("Name", name, MIN_SUBMITTER_NAME_LENGTH)
}

pub fn validate_contact_no(contact_no: &str) -> Result<(), CoreError> {
    if contact_no.trim().is_empty() {
        return Err(CoreError::Validation("Contact number is required".into()));
    }
    Ok(())
}

pub fn validate_repo_link(link: &str) -> Result<(), CoreError> {
    if !link.contains("github.com") {
        return Err(CoreError::Validation(
            "Invalid GitHub repository URL".into(),
        ));
    }
    Ok(())
}

pub fn validate_github_username(username: &str) -> Result<(), CoreError> {
    if !GITHUB_USERNAME_RE.is_match(username.trim()) {
        return Err(CoreError::Validation(
            "Invalid GitHub username format".into(),
        ));
    }
    Ok(())
}

pub fn validate_tech_stack(tech_stack: &[String]) -> Result<(), CoreError> {
    if tech_stack.iter().all(|t| t.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Please select at least one technology".into(),
        ));
    }
    Ok(())
}

/// Trim entries, drop blanks and duplicates, keep first-seen order.
pub fn normalize_tech_stack(tech_stack: &[String]) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(tech_stack.len());
    for tech in tech_stack {
        let tech = tech.trim();
        if !tech.is_empty() && !out.iter().any(|t| t == tech) {
            out.push(tech.to_string());
        }
    }
    out
}

/// Empty optional links are stored as absent.
pub fn normalize_optional_link(link: Option<&str>) -> Option<String> {
    link.map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
}

/// Reject a submission made too soon after the previous one from the same
/// contact number.
pub fn check_submission_cooldown(
    last_submission: Option<Timestamp>,
    now: Timestamp,
) -> Result<(), CoreError> {
    let Some(last) = last_submission else {
        return Ok(());
    };
    if now - last < Duration::seconds(SUBMISSION_COOLDOWN_SECS) {
        return Err(CoreError::RateLimited(
            "Please wait 5 minutes between submissions".into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::Utc;

    use super::*;

    fn stack(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn fields<'a>(tech: &'a [String]) -> SubmissionFields<'a> {
        SubmissionFields {
            title: "Campus Map",
            description: "An interactive map of the campus buildings.",
            domain: "Web Development",
            github_repo_link: "https://github.com/ann/campus-map",
            tech_stack: tech,
        }
    }

    #[test]
    fn valid_submission_parses_domain() {
        let tech = stack(&["Rust"]);
        assert_eq!(fields(&tech).validate().unwrap(), ProjectDomain::WebDevelopment);
    }

    #[test]
    fn short_fields_are_rejected_after_trimming() {
        let tech = stack(&["Rust"]);
        let mut f = fields(&tech);
        f.title = "  ab  ";
        assert_matches!(f.validate(), Err(CoreError::Validation(msg)) if msg.starts_with("Title"));

        let mut f = fields(&tech);
        f.description = "too short";
        assert_matches!(
            f.validate(),
            Err(CoreError::Validation(msg)) if msg.starts_with("Description")
        );

        assert!(validate_submitter_name(" A ").is_err());
        assert!(validate_submitter_name("Al").is_ok());
    }

    #[test]
    fn repo_link_must_point_at_github() {
        let tech = stack(&["Rust"]);
        let mut f = fields(&tech);
        f.github_repo_link = "https://gitlab.com/ann/campus-map";
        assert_matches!(f.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn unknown_domain_is_rejected() {
        let tech = stack(&["Rust"]);
        let mut f = fields(&tech);
        f.domain = "Robotics";
        assert_matches!(f.validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn empty_tech_stack_is_rejected() {
        let tech = stack(&[" "]);
        assert_matches!(fields(&tech).validate(), Err(CoreError::Validation(_)));
    }

    #[test]
    fn github_username_rules() {
        assert!(validate_github_username("octocat").is_ok());
        assert!(validate_github_username("a").is_ok());
        assert!(validate_github_username("octo-cat-99").is_ok());
        assert!(validate_github_username("-octocat").is_err());
        assert!(validate_github_username("octocat-").is_err());
        assert!(validate_github_username("octo_cat").is_err());
        assert!(validate_github_username(&"a".repeat(40)).is_err());
        assert!(validate_github_username(&"a".repeat(39)).is_ok());
    }

    #[test]
    fn contact_number_is_required() {
        assert!(validate_contact_no("   ").is_err());
        assert!(validate_contact_no("5551234").is_ok());
    }

    #[test]
    fn tech_stack_normalization() {
        assert_eq!(
            normalize_tech_stack(&stack(&[" Rust", "", "Rust", "Axum "])),
            stack(&["Rust", "Axum"])
        );
    }

    #[test]
    fn optional_links_drop_blank_values() {
        assert_eq!(normalize_optional_link(Some("  ")), None);
        assert_eq!(
            normalize_optional_link(Some(" https://x.dev ")),
            Some("https://x.dev".to_string())
        );
        assert_eq!(normalize_optional_link(None), None);
    }

    #[test]
    fn cooldown_window() {
        let now = Utc::now();
        assert!(check_submission_cooldown(None, now).is_ok());
        assert_matches!(
            check_submission_cooldown(Some(now - Duration::seconds(60)), now),
            Err(CoreError::RateLimited(_))
        );
        assert!(check_submission_cooldown(Some(now - Duration::seconds(301)), now).is_ok());
    }
}
