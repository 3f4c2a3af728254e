//! Label tracker synchronisation steps and run driver.
//!
//! This crate sequences calls between the pure logic in the [`tracker`] crate
//! and the [`tracker::IssueTracker`] port:
//!
//! 1. [`locate_tracking_issue`] finds the existing tracking issue, if any.
//! 2. [`repositories_in_scope`] decides which repositories to scan.
//! 3. [`aggregate_items`] collects every labelled issue from them.
//! 4. The section is rendered and merged by [`tracker::render_body`].
//! 5. [`publish_tracking_issue`] creates or updates the tracking issue.
//!
//! [`TrackerSync`] runs the whole sequence.
//!
//! ## Architectural Layer
//!
//! **Orchestration layer.** Steps contain no rendering or merge rules of their
//! own and never see HTTP details.

pub mod aggregate;
pub mod enumerate;
pub mod locate;
pub mod pagination;
pub mod publish;
pub mod runner;

#[cfg(test)]
pub(crate) mod test_support;

pub use aggregate::{aggregate_items, items_for_repository};
pub use enumerate::repositories_in_scope;
pub use locate::locate_tracking_issue;
pub use pagination::collect_all_pages;
pub use publish::publish_tracking_issue;
pub use runner::TrackerSync;
