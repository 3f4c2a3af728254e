//! Label tracker GitHub infrastructure adapter.
//!
//! Implements the [`tracker::IssueTracker`] port over the GitHub REST API
//! using [`reqwest`].
//!
//! ## Architectural Layer
//!
//! **Infrastructure.** This crate must not contain domain rules.
//! All GitHub API details (endpoints, headers, authentication, `Link`-header
//! pagination, error payloads) are handled here; the [`tracker`] crate never
//! sees them.
//!
//! ## Endpoints
//!
//! | Port method | Endpoint |
//! |-------------|----------|
//! | `search_issues` | `GET /search/issues` |
//! | `list_repositories_page` | `GET /orgs/{org}/repos?type=all` |
//! | `list_issues_page` | `GET /repos/{owner}/{repo}/issues?labels=..&state=all` |
//! | `create_issue` | `POST /repos/{owner}/{repo}/issues` |
//! | `update_issue` | `PATCH /repos/{owner}/{repo}/issues/{number}` |

pub mod client;
mod models;

pub use client::{GithubClient, GithubClientConfig, API_VERSION, DEFAULT_API_URL};
