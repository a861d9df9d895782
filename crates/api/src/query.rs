//! Shared query parameter types for API handlers.

use serde::Deserialize;
use showcase_core::error::CoreError;
use showcase_core::filter::ProjectFilter;

/// `?limit=` for ranked listings. Each handler supplies its own default.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<usize>,
}

/// Gallery filter parameters (`?status=&domain=&search=&tech_stack=`).
///
/// `tech_stack` is comma-separated; `all` on status or domain means no filter.
#[derive(Debug, Default, Deserialize)]
pub struct ProjectFilterParams {
    pub status: Option<String>,
    pub domain: Option<String>,
    pub search: Option<String>,
    pub tech_stack: Option<String>,
}

impl ProjectFilterParams {
    pub fn to_filter(&self) -> Result<ProjectFilter, CoreError> {
        ProjectFilter::from_params(
            self.status.as_deref(),
            self.domain.as_deref(),
            self.search.as_deref(),
            self.tech_stack.as_deref(),
        )
    }
}
