//! Core domain for the label tracker.
//!
//! The label tracker maintains one tracking issue that lists every issue
//! carrying a given label, in one repository or across an organization. This
//! crate holds the domain types, the pure rendering and merge logic, and the
//! [`IssueTracker`] port. Infrastructure crates implement the port; they never
//! add domain rules.
//!
//! ## Architectural Layer
//!
//! **Business logic + port definitions.** This crate has no I/O dependencies.
//! It defines *what* is needed; infrastructure crates define *how* to supply it.
//!
//! ## Module Layout
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`identifiers`] | Newtype identifiers (`IssueNumber`, `RepositoryId`, `Label`, etc.) |
//! | [`types`] | Value types (`TrackedItem`, `TrackingIssue`, `SyncConfig`, `Timestamp`, etc.) |
//! | [`errors`] | Collaborator and run-level error types |
//! | [`ports`] | The `IssueTracker` trait and its request/response shapes |
//! | [`render`] | Rendering the tracker-owned section |
//! | [`merge`] | Splicing that section into a human-edited body |

pub mod errors;
pub mod identifiers;
pub mod merge;
pub mod ports;
pub mod render;
pub mod types;

// Re-export everything at the crate root for ergonomic usage by downstream crates.
pub use errors::{IssueTrackerError, TrackerError};
pub use identifiers::{
    IssueNumber, IssueTitle, Label, Login, OwnerName, RepositoryId, RepositoryName, SyncRunId,
};
pub use merge::{find_marked_section, merge_section, SECTION_END_MARKER, SECTION_START_MARKER};
pub use ports::{
    IssueRecord, IssueSearchQuery, IssueTracker, Page, PageRequest, SearchHit, SearchResult,
    MAX_PAGE_SIZE,
};
pub use render::{item_line, item_reference, render_body, render_section, RenderContext};
pub use types::{
    ItemState, RepositoryRef, Scope, SyncConfig, SyncOutcome, Timestamp, TrackedItem,
    TrackingIssue, DEFAULT_TRACKER_AUTHOR,
};
