//! Creating or updating the tracking issue.

use tracing::{info, instrument};
use tracker::{IssueTracker, IssueTrackerError, RepositoryId, SyncOutcome, TrackingIssue};

/// Writes `body` to the tracking issue.
///
/// Updates the body of `issue` when it already exists, leaving its title
/// alone; otherwise creates it with `issue.title`. One call either way, with
/// no retry.
#[instrument(skip_all, fields(repository = %repository, exists = issue.exists()))]
pub async fn publish_tracking_issue(
    tracker: &dyn IssueTracker,
    repository: &RepositoryId,
    issue: &TrackingIssue,
    body: &str,
) -> Result<SyncOutcome, IssueTrackerError> {
    let outcome = match issue.number {
        Some(number) => {
            tracker.update_issue(repository, number, body).await?;
            SyncOutcome::Updated(number)
        }
        None => {
            let number = tracker.create_issue(repository, &issue.title, body).await?;
            SyncOutcome::Created(number)
        }
    };
    info!(number = %outcome.issue_number(), "{outcome}");
    Ok(outcome)
}

#[cfg(test)]
#[path = "publish_tests.rs"]
mod tests;
