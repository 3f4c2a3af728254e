//! Repository enumeration: which repositories a run scans.

use tracing::{info, instrument};
use tracker::{IssueTracker, IssueTrackerError, RepositoryId, Scope};

use crate::pagination::collect_all_pages;

/// Returns the repositories to scan for tracked items.
///
/// In [`Scope::Repository`] this is just `configured`. In
/// [`Scope::Organization`] it is every repository owned by `configured`'s
/// owner, in the order the tracker lists them.
#[instrument(skip_all, fields(owner = %configured.owner(), scope = ?scope))]
pub async fn repositories_in_scope(
    tracker: &dyn IssueTracker,
    configured: &RepositoryId,
    scope: Scope,
) -> Result<Vec<RepositoryId>, IssueTrackerError> {
    match scope {
        Scope::Repository => Ok(vec![configured.clone()]),
        Scope::Organization => {
            let owner = configured.owner();
            let repositories =
                collect_all_pages(move |page| tracker.list_repositories_page(owner, page)).await?;
            info!(count = repositories.len(), "Enumerated repositories");
            Ok(repositories
                .into_iter()
                .map(|r| RepositoryId::new(owner.clone(), r.name))
                .collect())
        }
    }
}

#[cfg(test)]
#[path = "enumerate_tests.rs"]
mod tests;
