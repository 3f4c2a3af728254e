//! Finding an existing tracking issue by its title.
//!
//! The tracking issue is never remembered between runs. Each run searches for
//! it, so a deleted tracking issue is simply recreated on the next run.

use tracing::{info, instrument};
use tracker::{
    IssueSearchQuery, IssueTitle, IssueTracker, IssueTrackerError, RepositoryId, TrackingIssue,
};

/// Searches `repository` for an open issue titled `title` and authored by
/// `author`.
///
/// Only the first search hit is considered. When nothing matches, the
/// returned [`TrackingIssue`] has no number and an empty body.
#[instrument(skip(tracker), fields(repository = %repository))]
pub async fn locate_tracking_issue(
    tracker: &dyn IssueTracker,
    repository: &RepositoryId,
    title: &IssueTitle,
    author: &str,
) -> Result<TrackingIssue, IssueTrackerError> {
    let query = IssueSearchQuery {
        repository: repository.clone(),
        title: title.clone(),
        author: author.to_string(),
        per_page: 1,
    };
    let result = tracker.search_issues(&query).await?;

    let hit = if result.total_count > 0 {
        result.items.into_iter().next()
    } else {
        None
    };

    Ok(match hit {
        Some(hit) => {
            info!(number = %hit.number, "Found existing tracking issue");
            TrackingIssue {
                number: Some(hit.number),
                title: title.clone(),
                body: hit.body.unwrap_or_default(),
            }
        }
        None => {
            info!("No existing tracking issue");
            TrackingIssue::absent(title.clone())
        }
    })
}

#[cfg(test)]
#[path = "locate_tests.rs"]
mod tests;
