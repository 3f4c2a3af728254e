//! The run driver: one complete, stateless synchronisation pass.

use std::sync::Arc;

use tracing::{info, instrument};
use tracker::{
    render_body, IssueTracker, RenderContext, SyncConfig, SyncOutcome, SyncRunId, Timestamp,
    TrackerError,
};

use crate::aggregate::aggregate_items;
use crate::enumerate::repositories_in_scope;
use crate::locate::locate_tracking_issue;
use crate::publish::publish_tracking_issue;

/// Drives a synchronisation run against an [`IssueTracker`].
///
/// Every network call is issued sequentially: locate, enumerate, aggregate,
/// then publish. Nothing is carried over between runs.
pub struct TrackerSync {
    tracker: Arc<dyn IssueTracker>,
    config: SyncConfig,
}

impl TrackerSync {
    pub fn new(tracker: Arc<dyn IssueTracker>, config: SyncConfig) -> Self {
        Self { tracker, config }
    }

    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Runs one pass, stamping the rendered section with `now`.
    #[instrument(
        name = "sync_run",
        skip_all,
        fields(
            run_id = %run_id,
            repository = %self.config.repository,
            label = %self.config.label,
            scope = ?self.config.scope,
        )
    )]
    pub async fn run(
        &self,
        run_id: SyncRunId,
        now: Timestamp,
    ) -> Result<SyncOutcome, TrackerError> {
        let tracker = self.tracker.as_ref();
        let config = &self.config;

        let issue = locate_tracking_issue(
            tracker,
            &config.repository,
            &config.issue_title,
            &config.author,
        )
        .await?;

        let repositories = repositories_in_scope(tracker, &config.repository, config.scope).await?;
        let items = aggregate_items(tracker, &repositories, &config.label).await?;
        info!(
            repositories = repositories.len(),
            items = items.len(),
            "Aggregated tracked items"
        );

        let context = RenderContext {
            label: config.label.clone(),
            scope: config.scope,
            issue_exists: issue.exists(),
            updated_at: now,
        };
        let body = render_body(&items, &context, &issue.body);

        Ok(publish_tracking_issue(tracker, &config.repository, &issue, &body).await?)
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
