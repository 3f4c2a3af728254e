//! Shared value types for the label tracker domain.
//!
//! Unlike the newtype identifiers in [`crate::identifiers`], these types carry
//! the run's actual data: the items being tracked, the tracking issue itself,
//! and the configuration that scopes a run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{IssueNumber, IssueTitle, Label, Login, RepositoryId, RepositoryName};

/// Search qualifier identifying the automation account that authors the
/// tracking issue when running inside GitHub Actions.
pub const DEFAULT_TRACKER_AUTHOR: &str = "app/github-actions";

// ---------------------------------------------------------------------------
// Scope
// ---------------------------------------------------------------------------

/// How widely a run aggregates tracked items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// Only the configured repository is scanned.
    Repository,
    /// Every repository owned by the configured owner is scanned.
    Organization,
}

impl Scope {
    /// Maps the `org_level` configuration flag onto a scope.
    pub fn from_org_level(org_level: bool) -> Self {
        if org_level {
            Self::Organization
        } else {
            Self::Repository
        }
    }

    /// Returns `true` for [`Scope::Organization`].
    pub fn is_organization(self) -> bool {
        matches!(self, Self::Organization)
    }
}

// ---------------------------------------------------------------------------
// Tracked items
// ---------------------------------------------------------------------------

/// Open/closed state of an issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemState {
    Open,
    Closed,
}

/// A repository discovered while enumerating an owner's repositories.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RepositoryRef {
    /// Short name of the repository.
    pub name: RepositoryName,
}

/// An issue carrying the tracked label, tagged with the repository it lives in.
///
/// Built once per fetched record and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackedItem {
    number: IssueNumber,
    repository: RepositoryId,
    assignees: Vec<Login>,
    state: ItemState,
}

impl TrackedItem {
    pub fn new(
        number: IssueNumber,
        repository: RepositoryId,
        assignees: Vec<Login>,
        state: ItemState,
    ) -> Self {
        Self {
            number,
            repository,
            assignees,
            state,
        }
    }

    pub fn number(&self) -> IssueNumber {
        self.number
    }

    pub fn repository(&self) -> &RepositoryId {
        &self.repository
    }

    /// Assignee handles in the order the tracker reported them. May be empty.
    pub fn assignees(&self) -> &[Login] {
        &self.assignees
    }

    pub fn state(&self) -> ItemState {
        self.state
    }
}

// ---------------------------------------------------------------------------
// Tracking issue
// ---------------------------------------------------------------------------

/// The aggregating issue as found at the start of a run.
///
/// `number` is `None` when no tracking issue exists yet; in that case `body`
/// is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingIssue {
    pub number: Option<IssueNumber>,
    pub title: IssueTitle,
    pub body: String,
}

impl TrackingIssue {
    /// A tracking issue that has not been created yet.
    pub fn absent(title: IssueTitle) -> Self {
        Self {
            number: None,
            title,
            body: String::new(),
        }
    }

    /// Returns `true` if the issue already exists on the tracker.
    pub fn exists(&self) -> bool {
        self.number.is_some()
    }
}

/// What the publish step did with the tracking issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncOutcome {
    Created(IssueNumber),
    Updated(IssueNumber),
}

impl SyncOutcome {
    pub fn issue_number(self) -> IssueNumber {
        match self {
            Self::Created(n) | Self::Updated(n) => n,
        }
    }
}

impl std::fmt::Display for SyncOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created(n) => write!(f, "Created new issue #{n}"),
            Self::Updated(n) => write!(f, "Updated issue #{n}"),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Fully resolved inputs for one synchronisation run.
///
/// Produced by the composition root after all options and environment
/// fallbacks have been applied; every field is already validated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncConfig {
    /// Repository that hosts the tracking issue. In repository scope this is
    /// also the only repository scanned; in organization scope only its owner
    /// is used for enumeration.
    pub repository: RepositoryId,
    pub label: Label,
    pub issue_title: IssueTitle,
    pub scope: Scope,
    /// Search `author:` qualifier identifying the automation account.
    pub author: String,
}

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

/// A UTC wall-clock timestamp.
///
/// Wraps [`chrono::DateTime<Utc>`] so callers never depend on `chrono` types
/// directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Returns the current UTC time as a [`Timestamp`].
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a [`Timestamp`] from a [`DateTime<Utc>`].
    pub fn from_utc(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Returns the underlying [`DateTime<Utc>`].
    pub fn as_datetime(self) -> DateTime<Utc> {
        self.0
    }

    /// Formats as an RFC 1123 HTTP date, e.g. `Fri, 16 Oct 2026 12:00:00 GMT`.
    pub fn to_http_date(self) -> String {
        self.0.format("%a, %d %b %Y %H:%M:%S GMT").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod tests;
