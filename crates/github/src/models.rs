//! Wire shapes for the subset of the GitHub REST API the tracker uses.
//!
//! Only the fields the tracker reads are declared; serde ignores the rest.

use serde::{Deserialize, Serialize};
use tracker::{
    IssueNumber, IssueRecord, IssueTrackerError, ItemState, Login, RepositoryName, RepositoryRef,
    SearchHit, SearchResult,
};

#[derive(Debug, Deserialize)]
pub(crate) struct UserResponse {
    pub login: String,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
pub(crate) enum StateResponse {
    Open,
    Closed,
}

/// An entry of `GET /repos/{owner}/{repo}/issues`.
#[derive(Debug, Deserialize)]
pub(crate) struct IssueResponse {
    pub number: u64,
    #[serde(default)]
    pub assignees: Vec<UserResponse>,
    pub state: StateResponse,
}

impl From<IssueResponse> for IssueRecord {
    fn from(issue: IssueResponse) -> Self {
        Self {
            number: IssueNumber::new(issue.number),
            assignees: issue
                .assignees
                .into_iter()
                .filter_map(|u| Login::new(u.login))
                .collect(),
            state: match issue.state {
                StateResponse::Open => ItemState::Open,
                StateResponse::Closed => ItemState::Closed,
            },
        }
    }
}

/// An entry of `GET /orgs/{org}/repos`.
#[derive(Debug, Deserialize)]
pub(crate) struct RepositoryResponse {
    pub name: String,
}

impl TryFrom<RepositoryResponse> for RepositoryRef {
    type Error = IssueTrackerError;

    fn try_from(repo: RepositoryResponse) -> Result<Self, Self::Error> {
        let name = RepositoryName::new(repo.name).ok_or_else(|| IssueTrackerError::Decode {
            message: "repository with an empty name".to_string(),
        })?;
        Ok(Self { name })
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItemResponse {
    pub number: u64,
    pub body: Option<String>,
}

/// Response of `GET /search/issues`.
#[derive(Debug, Deserialize)]
pub(crate) struct SearchResponse {
    pub total_count: u64,
    #[serde(default)]
    pub items: Vec<SearchItemResponse>,
}

impl From<SearchResponse> for SearchResult {
    fn from(search: SearchResponse) -> Self {
        Self {
            total_count: search.total_count,
            items: search
                .items
                .into_iter()
                .map(|item| SearchHit {
                    number: IssueNumber::new(item.number),
                    body: item.body,
                })
                .collect(),
        }
    }
}

/// The part of an issue returned by `POST /repos/{owner}/{repo}/issues` that
/// the tracker needs.
#[derive(Debug, Deserialize)]
pub(crate) struct CreatedIssueResponse {
    pub number: u64,
}

/// Error payload GitHub returns alongside non-success statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub message: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateIssueRequest<'a> {
    pub title: &'a str,
    pub body: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct UpdateIssueRequest<'a> {
    pub body: &'a str,
}

#[cfg(test)]
#[path = "models_tests.rs"]
mod tests;
