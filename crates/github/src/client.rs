//! [`GithubClient`]: the GitHub REST implementation of [`IssueTracker`].

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, LINK};
use reqwest::{Method, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use tracing::debug;
use tracker::{
    IssueNumber, IssueRecord, IssueSearchQuery, IssueTitle, IssueTracker, IssueTrackerError,
    Label, OwnerName, Page, PageRequest, RepositoryId, RepositoryRef, SearchResult,
};

use crate::models::{
    CreateIssueRequest, CreatedIssueResponse, ErrorResponse, IssueResponse, RepositoryResponse,
    SearchResponse, UpdateIssueRequest,
};

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// REST API version requested on every call.
pub const API_VERSION: &str = "2022-11-28";

const USER_AGENT: &str = concat!("label-tracker/", env!("CARGO_PKG_VERSION"));

/// Connection settings for [`GithubClient`].
#[derive(Debug, Clone)]
pub struct GithubClientConfig {
    /// API root, e.g. `https://api.github.com` or `https://ghe.example.com/api/v3`.
    pub api_url: String,
    /// Bearer token. Requests are sent unauthenticated when `None`.
    pub token: Option<String>,
}

impl Default for GithubClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
        }
    }
}

/// GitHub REST client.
///
/// Each method issues exactly one HTTP request. Errors are mapped onto
/// [`IssueTrackerError`] and never retried.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    api_url: Url,
    token: Option<String>,
}

impl GithubClient {
    pub fn new(config: GithubClientConfig) -> Result<Self, IssueTrackerError> {
        let api_url = Url::parse(&config.api_url).map_err(|e| IssueTrackerError::InvalidRequest {
            message: format!("invalid API URL '{}': {e}", config.api_url),
        })?;
        if api_url.cannot_be_a_base() {
            return Err(IssueTrackerError::InvalidRequest {
                message: format!("API URL '{}' cannot be used as a base", config.api_url),
            });
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/vnd.github+json"));
        headers.insert(
            HeaderName::from_static("x-github-api-version"),
            HeaderValue::from_static(API_VERSION),
        );
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(transport_error)?;

        Ok(Self {
            http,
            api_url,
            token: config.token,
        })
    }

    /// Builds an API URL from path segments. Each segment is percent-encoded.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, IssueTrackerError> {
        let mut url = self.api_url.clone();
        url.path_segments_mut()
            .map_err(|()| IssueTrackerError::InvalidRequest {
                message: format!("API URL '{}' cannot be used as a base", self.api_url),
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        debug!(%method, path = url.path(), "GitHub request");
        let builder = self.http.request(method, url);
        match &self.token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<Response, IssueTrackerError> {
        let response = builder.send().await.map_err(transport_error)?;
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(api_error(status.as_u16(), status.canonical_reason(), &body))
    }

    /// Fetches one page of a list endpoint, converting each entry with
    /// `convert`. The following page number comes from the `Link` header.
    async fn get_page<T, R>(
        &self,
        url: Url,
        query: &[(&str, String)],
        convert: impl Fn(T) -> Result<R, IssueTrackerError>,
    ) -> Result<Page<R>, IssueTrackerError>
    where
        T: DeserializeOwned,
    {
        let response = self
            .execute(self.request(Method::GET, url).query(query))
            .await?;
        let next_page = next_page(response.headers());
        let entries: Vec<T> = decode(response).await?;
        let items = entries
            .into_iter()
            .map(convert)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Page { items, next_page })
    }
}

#[async_trait]
impl IssueTracker for GithubClient {
    async fn search_issues(
        &self,
        query: &IssueSearchQuery,
    ) -> Result<SearchResult, IssueTrackerError> {
        let url = self.endpoint(&["search", "issues"])?;
        let params = [
            ("q", query.to_query_string()),
            ("per_page", query.per_page.to_string()),
        ];
        let response = self
            .execute(self.request(Method::GET, url).query(&params))
            .await?;
        let search: SearchResponse = decode(response).await?;
        Ok(search.into())
    }

    async fn list_repositories_page(
        &self,
        owner: &OwnerName,
        page: PageRequest,
    ) -> Result<Page<RepositoryRef>, IssueTrackerError> {
        let url = self.endpoint(&["orgs", owner.as_str(), "repos"])?;
        let params = [
            ("type", "all".to_string()),
            ("per_page", page.per_page.to_string()),
            ("page", page.page.to_string()),
        ];
        self.get_page(url, &params, |repo: RepositoryResponse| {
            RepositoryRef::try_from(repo)
        })
        .await
    }

    async fn list_issues_page(
        &self,
        repository: &RepositoryId,
        label: &Label,
        page: PageRequest,
    ) -> Result<Page<IssueRecord>, IssueTrackerError> {
        let url = self.endpoint(&[
            "repos",
            repository.owner().as_str(),
            repository.name().as_str(),
            "issues",
        ])?;
        let params = [
            ("labels", label.to_string()),
            ("state", "all".to_string()),
            ("per_page", page.per_page.to_string()),
            ("page", page.page.to_string()),
        ];
        self.get_page(url, &params, |issue: IssueResponse| {
            Ok(IssueRecord::from(issue))
        })
        .await
    }

    async fn create_issue(
        &self,
        repository: &RepositoryId,
        title: &IssueTitle,
        body: &str,
    ) -> Result<IssueNumber, IssueTrackerError> {
        let url = self.endpoint(&[
            "repos",
            repository.owner().as_str(),
            repository.name().as_str(),
            "issues",
        ])?;
        let request = CreateIssueRequest {
            title: title.as_str(),
            body,
        };
        let response = self
            .execute(self.request(Method::POST, url).json(&request))
            .await?;
        let created: CreatedIssueResponse = decode(response).await?;
        Ok(IssueNumber::new(created.number))
    }

    async fn update_issue(
        &self,
        repository: &RepositoryId,
        number: IssueNumber,
        body: &str,
    ) -> Result<(), IssueTrackerError> {
        let url = self.endpoint(&[
            "repos",
            repository.owner().as_str(),
            repository.name().as_str(),
            "issues",
            &number.to_string(),
        ])?;
        self.execute(
            self.request(Method::PATCH, url)
                .json(&UpdateIssueRequest { body }),
        )
        .await?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Response handling
// ---------------------------------------------------------------------------

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, IssueTrackerError> {
    let bytes = response.bytes().await.map_err(transport_error)?;
    serde_json::from_slice(&bytes).map_err(|e| IssueTrackerError::Decode {
        message: e.to_string(),
    })
}

fn transport_error(error: reqwest::Error) -> IssueTrackerError {
    IssueTrackerError::Transport {
        message: error.to_string(),
    }
}

/// Maps a non-success response onto [`IssueTrackerError::Api`], preferring
/// GitHub's own `message` over the status reason phrase.
pub(crate) fn api_error(status: u16, reason: Option<&str>, body: &str) -> IssueTrackerError {
    let message = serde_json::from_str::<ErrorResponse>(body)
        .map(|e| e.message)
        .ok()
        .filter(|m| !m.is_empty())
        .or_else(|| reason.map(str::to_string))
        .unwrap_or_else(|| "unknown error".to_string());
    IssueTrackerError::Api { status, message }
}

fn next_page(headers: &HeaderMap) -> Option<u32> {
    headers
        .get(LINK)
        .and_then(|value| value.to_str().ok())
        .and_then(parse_next_page)
}

/// Extracts the `page` query parameter of the `rel="next"` entry of a `Link`
/// header.
pub(crate) fn parse_next_page(link: &str) -> Option<u32> {
    link.split(',').find_map(|entry| {
        let mut parts = entry.split(';');
        let target = parts.next()?.trim();
        if !parts.any(|p| p.trim() == "rel=\"next\"") {
            return None;
        }
        let url = Url::parse(target.strip_prefix('<')?.strip_suffix('>')?).ok()?;
        url.query_pairs()
            .find(|(key, _)| key == "page")
            .and_then(|(_, value)| value.parse().ok())
    })
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
