//! Item aggregation across the repositories in scope.

use tracing::{debug, instrument};
use tracker::{IssueTracker, IssueTrackerError, Label, RepositoryId, TrackedItem};

use crate::pagination::collect_all_pages;

/// Fetches every issue in `repository` carrying `label`, open or closed.
///
/// Results are ordered by ascending issue number. The tracker's own order is
/// not stable across calls, and a stable order keeps the rendered listing
/// from churning between runs. An issue that shifts pages mid-listing can be
/// returned twice; duplicates are dropped.
#[instrument(skip(tracker), fields(repository = %repository))]
pub async fn items_for_repository(
    tracker: &dyn IssueTracker,
    repository: &RepositoryId,
    label: &Label,
) -> Result<Vec<TrackedItem>, IssueTrackerError> {
    let mut records =
        collect_all_pages(move |page| tracker.list_issues_page(repository, label, page)).await?;
    records.sort_by_key(|r| r.number);
    records.dedup_by_key(|r| r.number);
    debug!(count = records.len(), "Collected tracked items");

    Ok(records
        .into_iter()
        .map(|r| TrackedItem::new(r.number, repository.clone(), r.assignees, r.state))
        .collect())
}

/// Aggregates the tracked items of every repository, one repository at a
/// time, keeping the order of `repositories`.
///
/// Repositories without matching items contribute nothing. The first error
/// aborts the aggregation.
pub async fn aggregate_items(
    tracker: &dyn IssueTracker,
    repositories: &[RepositoryId],
    label: &Label,
) -> Result<Vec<TrackedItem>, IssueTrackerError> {
    let mut items = Vec::new();
    for repository in repositories {
        items.extend(items_for_repository(tracker, repository, label).await?);
    }
    Ok(items)
}

#[cfg(test)]
#[path = "aggregate_tests.rs"]
mod tests;
