//! The issue tracker port.
//!
//! [`IssueTracker`] is the only seam between the synchronisation logic and
//! the outside world. Infrastructure crates implement it; the `sync` crate
//! drives it.
//!
//! Listing operations are exposed one page at a time. The caller owns the
//! pagination loop so that exhaustive pagination behaves identically for
//! every implementation.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::{
    IssueNumber, IssueTitle, IssueTrackerError, ItemState, Label, Login, OwnerName, RepositoryId,
    RepositoryRef,
};

/// Largest page size the tracker accepts for list operations.
pub const MAX_PAGE_SIZE: u8 = 100;

// ---------------------------------------------------------------------------
// Pagination
// ---------------------------------------------------------------------------

/// Identifies one page of a paginated listing. Pages are 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: u32,
    pub per_page: u8,
}

impl PageRequest {
    /// The first page, at the largest page size the tracker allows.
    pub fn first() -> Self {
        Self {
            page: 1,
            per_page: MAX_PAGE_SIZE,
        }
    }

    /// Requests the given page number at this request's page size.
    pub fn at(self, page: u32) -> Self {
        Self { page, ..self }
    }
}

/// One page of results plus the number of the following page, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub next_page: Option<u32>,
}

impl<T> Page<T> {
    /// A page with no successor.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_page: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// An issue as returned by a repository listing, before it is tagged with
/// its repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssueRecord {
    pub number: IssueNumber,
    pub assignees: Vec<Login>,
    pub state: ItemState,
}

/// Query used to locate the tracking issue.
///
/// Restricted to one repository, open issues only, matching the title and
/// authored by the automation identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueSearchQuery {
    pub repository: RepositoryId,
    pub title: IssueTitle,
    pub author: String,
    pub per_page: u8,
}

impl IssueSearchQuery {
    /// Renders the query in the tracker's search syntax.
    ///
    /// The title is quoted as a phrase. Search has no escape for a quote
    /// inside a phrase, so quotes in the title become word breaks.
    pub fn to_query_string(&self) -> String {
        format!(
            "repo:{} is:issue is:open in:title \"{}\" author:{}",
            self.repository,
            phrase(self.title.as_str()),
            self.author
        )
    }
}

fn phrase(title: &str) -> String {
    title
        .split('"')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    pub number: IssueNumber,
    /// `None` when the issue has never had a body.
    pub body: Option<String>,
}

/// Result of [`IssueTracker::search_issues`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SearchResult {
    pub total_count: u64,
    pub items: Vec<SearchHit>,
}

// ---------------------------------------------------------------------------
// Port
// ---------------------------------------------------------------------------

/// Capabilities the synchronisation logic needs from an issue tracker.
#[async_trait]
pub trait IssueTracker: Send + Sync {
    /// Runs an issue search.
    async fn search_issues(
        &self,
        query: &IssueSearchQuery,
    ) -> Result<SearchResult, IssueTrackerError>;

    /// Lists one page of the repositories owned by `owner`, of any type or
    /// visibility.
    async fn list_repositories_page(
        &self,
        owner: &OwnerName,
        page: PageRequest,
    ) -> Result<Page<RepositoryRef>, IssueTrackerError>;

    /// Lists one page of the issues in `repository` carrying `label`, in any
    /// state.
    async fn list_issues_page(
        &self,
        repository: &RepositoryId,
        label: &Label,
        page: PageRequest,
    ) -> Result<Page<IssueRecord>, IssueTrackerError>;

    /// Creates an issue and returns its number.
    async fn create_issue(
        &self,
        repository: &RepositoryId,
        title: &IssueTitle,
        body: &str,
    ) -> Result<IssueNumber, IssueTrackerError>;

    /// Replaces the body of an existing issue. The title is left untouched.
    async fn update_issue(
        &self,
        repository: &RepositoryId,
        number: IssueNumber,
        body: &str,
    ) -> Result<(), IssueTrackerError>;
}

#[cfg(test)]
#[path = "ports_tests.rs"]
mod tests;
