//! Gallery listing filters.

use crate::error::CoreError;
use crate::status::{ProjectDomain, ProjectStatus};

/// Sentinel the gallery sends for "no filter" on status and domain.
pub const FILTER_ALL: &str = "all";

/// Parsed, normalized gallery filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProjectFilter {
    pub status: Option<ProjectStatus>,
    pub domain: Option<ProjectDomain>,
    /// Case-insensitive substring over title, description and username.
    pub search: Option<String>,
    /// Matches projects using ANY of these technologies.
    pub tech_stack: Vec<String>,
}

impl ProjectFilter {
    /// Build a filter from raw query parameters.
    ///
    /// `tech_stack` is a comma-separated list. Empty values and `all` mean
    /// "unfiltered".
    pub fn from_params(
        status: Option<&str>,
        domain: Option<&str>,
        search: Option<&str>,
        tech_stack: Option<&str>,
    ) -> Result<Self, CoreError> {
        Ok(Self {
            status: selected(status)
                .map(|s| s.parse::<ProjectStatus>())
                .transpose()?,
            domain: selected(domain)
                .map(|d| d.parse::<ProjectDomain>())
                .transpose()?,
            search: search
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_lowercase),
            tech_stack: tech_stack
                .unwrap_or_default()
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        })
    }
}

fn selected(value: Option<&str>) -> Option<&str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty() && *v != FILTER_ALL)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn all_and_blank_mean_unfiltered() {
        let filter = ProjectFilter::from_params(Some("all"), Some(""), Some("  "), None).unwrap();
        assert_eq!(filter, ProjectFilter::default());
    }

    #[test]
    fn parses_every_param() {
        let filter = ProjectFilter::from_params(
            Some("deployed-great"),
            Some("AI/ML"),
            Some(" Campus "),
            Some("Rust, ,Axum"),
        )
        .unwrap();
        assert_eq!(filter.status, Some(ProjectStatus::DeployedGreat));
        assert_eq!(filter.domain, Some(ProjectDomain::AiMl));
        assert_eq!(filter.search.as_deref(), Some("campus"));
        assert_eq!(filter.tech_stack, ["Rust", "Axum"]);
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_matches!(
            ProjectFilter::from_params(Some("shipped"), None, None, None),
            Err(CoreError::Validation(_))
        );
    }
}
