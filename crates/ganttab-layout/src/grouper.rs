//! Repository grouping.
//!
//! Tasks are bucketed by the `owner/repo` pair in their source URL.
//! Grouping is a stable, non-sorting group-by: repositories appear in
//! the order they are first encountered, tasks keep their input order
//! within a repository.

use ganttab_core::{Repo, Task};
use regex::Regex;
use std::sync::OnceLock;

/// Bucket name for tasks whose URL does not look like a repository.
pub const UNKNOWN_REPO: &str = "Unknown";

fn repo_url_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    // host/owner/repo, where neither owner nor repo contains a slash.
    PATTERN.get_or_init(|| {
        Regex::new(r"[\w.-]+\.[A-Za-z]{2,}/([^/\s?#]+/[^/\s?#]+)")
            .expect("repo url pattern is valid")
    })
}

/// Extract "owner/repo" from a task URL, or [`UNKNOWN_REPO`] when the
/// URL does not match the `host/owner/repo` shape.
pub fn repo_name(url: &str) -> String {
    repo_url_pattern()
        .captures(url)
        .map_or_else(|| UNKNOWN_REPO.to_string(), |caps| caps[1].to_string())
}

/// Group tasks into repository buckets, preserving first-seen order.
pub fn group_by_repo(tasks: impl IntoIterator<Item = Task>) -> Vec<Repo> {
    let mut repos: Vec<Repo> = Vec::new();
    for task in tasks {
        let name = repo_name(&task.url);
        match repos.iter_mut().find(|r| r.name == name) {
            Some(repo) => repo.tasks.push(task),
            None => {
                let mut repo = Repo::new(name);
                repo.tasks.push(task);
                repos.push(repo);
            }
        }
    }
    repos
}
