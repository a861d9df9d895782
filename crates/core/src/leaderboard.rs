//! Member leaderboard and showcase statistics.
//!
//! Both are computed from a lightweight per-project summary rather than
//! full project rows.

use std::collections::{BTreeMap, HashSet};

use serde::Serialize;

use crate::status::ProjectStatus;

/// Number of members returned by the leaderboard when no limit is given.
pub const DEFAULT_LEADERBOARD_LIMIT: usize = 10;

/// The fields of a project that statistics care about.
#[derive(Debug, Clone)]
pub struct ProjectSummary {
    pub github_username: String,
    pub domain: String,
    pub status: ProjectStatus,
}

/// One row of the member leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberStanding {
    pub github_username: String,
    pub total: u32,
    pub completed: u32,
    pub deployed: u32,
}

/// Group projects by member and rank by completed, then deployed.
///
/// Remaining ties are ordered by username so the board is stable.
pub fn member_leaderboard(projects: &[ProjectSummary], limit: usize) -> Vec<MemberStanding> {
    let mut by_member: BTreeMap<&str, MemberStanding> = BTreeMap::new();
    for project in projects {
        let standing = by_member
            .entry(project.github_username.as_str())
            .or_insert_with(|| MemberStanding {
                github_username: project.github_username.clone(),
                total: 0,
                completed: 0,
                deployed: 0,
            });
        standing.total += 1;
        if project.status.is_completed() {
            standing.completed += 1;
        }
        if project.status.is_deployed() {
            standing.deployed += 1;
        }
    }

    // BTreeMap yields usernames in ascending order; the stable sort keeps it
    // as the final tie-break.
    let mut board: Vec<MemberStanding> = by_member.into_values().collect();
    board.sort_by(|a, b| {
        b.completed
            .cmp(&a.completed)
            .then_with(|| b.deployed.cmp(&a.deployed))
    });
    board.truncate(limit);
    board
}

/// Headline numbers for the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShowcaseStats {
    pub total_projects: usize,
    pub completed_projects: usize,
    pub deployed_projects: usize,
    pub total_members: usize,
}

pub fn showcase_stats(projects: &[ProjectSummary]) -> ShowcaseStats {
    let members: HashSet<&str> = projects
        .iter()
        .map(|p| p.github_username.as_str())
        .collect();
    ShowcaseStats {
        total_projects: projects.len(),
        completed_projects: projects.iter().filter(|p| p.status.is_completed()).count(),
        deployed_projects: projects.iter().filter(|p| p.status.is_deployed()).count(),
        total_members: members.len(),
    }
}

/// Project count for one domain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

/// Per-domain project counts, largest first, then by domain name.
pub fn domain_counts(projects: &[ProjectSummary]) -> Vec<DomainCount> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for project in projects {
        *counts.entry(project.domain.as_str()).or_default() += 1;
    }
    let mut out: Vec<DomainCount> = counts
        .into_iter()
        .map(|(domain, count)| DomainCount {
            domain: domain.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}
