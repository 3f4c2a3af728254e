//! In-memory [`IssueTracker`] used by the orchestration tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use tracker::{
    IssueNumber, IssueRecord, IssueSearchQuery, IssueTitle, IssueTracker, IssueTrackerError,
    ItemState, Label, Login, OwnerName, Page, PageRequest, RepositoryId, RepositoryName,
    RepositoryRef, SearchHit, SearchResult,
};

/// The fake ignores the requested page size and serves this many items per
/// page so multi-page listings are easy to set up.
pub const FAKE_PAGE_SIZE: usize = 2;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Search(String),
    ListRepositories { owner: String, page: u32 },
    ListIssues { repository: String, label: String, page: u32 },
    Create { repository: String, title: String, body: String },
    Update { repository: String, number: u64, body: String },
}

#[derive(Default)]
struct FakeState {
    existing: Option<SearchHit>,
    repositories: HashMap<String, Vec<RepositoryRef>>,
    issues: HashMap<String, Vec<IssueRecord>>,
    failing_repository: Option<String>,
    next_number: u64,
    calls: Vec<Call>,
}

#[derive(Default)]
pub struct FakeIssueTracker {
    state: Mutex<FakeState>,
}

impl FakeIssueTracker {
    pub fn new() -> Self {
        let tracker = Self::default();
        tracker.with_state(|s| s.next_number = 100);
        tracker
    }

    fn with_state<R>(&self, f: impl FnOnce(&mut FakeState) -> R) -> R {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut state)
    }

    pub fn set_existing(&self, number: u64, body: Option<&str>) {
        self.with_state(|s| {
            s.existing = Some(SearchHit {
                number: IssueNumber::new(number),
                body: body.map(str::to_string),
            })
        });
    }

    pub fn set_repositories(&self, owner: &str, names: &[&str]) {
        let refs = names
            .iter()
            .map(|n| RepositoryRef {
                name: RepositoryName::new(*n).unwrap(),
            })
            .collect();
        self.with_state(|s| s.repositories.insert(owner.to_string(), refs));
    }

    pub fn set_issues(&self, repository: &str, records: Vec<IssueRecord>) {
        self.with_state(|s| s.issues.insert(repository.to_string(), records));
    }

    pub fn fail_listing_for(&self, repository: &str) {
        self.with_state(|s| s.failing_repository = Some(repository.to_string()));
    }

    pub fn calls(&self) -> Vec<Call> {
        self.with_state(|s| s.calls.clone())
    }
}

fn paginate<T: Clone>(all: &[T], request: PageRequest) -> Page<T> {
    let start = (request.page as usize - 1) * FAKE_PAGE_SIZE;
    let items: Vec<T> = all.iter().skip(start).take(FAKE_PAGE_SIZE).cloned().collect();
    let next_page = (start + FAKE_PAGE_SIZE < all.len()).then_some(request.page + 1);
    Page { items, next_page }
}

#[async_trait]
impl IssueTracker for FakeIssueTracker {
    async fn search_issues(
        &self,
        query: &IssueSearchQuery,
    ) -> Result<SearchResult, IssueTrackerError> {
        self.with_state(|s| {
            s.calls.push(Call::Search(query.to_query_string()));
            let items: Vec<SearchHit> = s.existing.iter().cloned().collect();
            Ok(SearchResult {
                total_count: items.len() as u64,
                items,
            })
        })
    }

    async fn list_repositories_page(
        &self,
        owner: &OwnerName,
        page: PageRequest,
    ) -> Result<Page<RepositoryRef>, IssueTrackerError> {
        self.with_state(|s| {
            s.calls.push(Call::ListRepositories {
                owner: owner.to_string(),
                page: page.page,
            });
            match s.repositories.get(owner.as_str()) {
                Some(all) => Ok(paginate(all, page)),
                None => Err(IssueTrackerError::Api {
                    status: 404,
                    message: "Not Found".to_string(),
                }),
            }
        })
    }

    async fn list_issues_page(
        &self,
        repository: &RepositoryId,
        label: &Label,
        page: PageRequest,
    ) -> Result<Page<IssueRecord>, IssueTrackerError> {
        self.with_state(|s| {
            let key = repository.to_string();
            s.calls.push(Call::ListIssues {
                repository: key.clone(),
                label: label.to_string(),
                page: page.page,
            });
            if s.failing_repository.as_deref() == Some(key.as_str()) {
                return Err(IssueTrackerError::Transport {
                    message: "connection reset".to_string(),
                });
            }
            let all = s.issues.get(&key).cloned().unwrap_or_default();
            Ok(paginate(&all, page))
        })
    }

    async fn create_issue(
        &self,
        repository: &RepositoryId,
        title: &IssueTitle,
        body: &str,
    ) -> Result<IssueNumber, IssueTrackerError> {
        self.with_state(|s| {
            s.calls.push(Call::Create {
                repository: repository.to_string(),
                title: title.to_string(),
                body: body.to_string(),
            });
            let number = IssueNumber::new(s.next_number);
            s.next_number += 1;
            Ok(number)
        })
    }

    async fn update_issue(
        &self,
        repository: &RepositoryId,
        number: IssueNumber,
        body: &str,
    ) -> Result<(), IssueTrackerError> {
        self.with_state(|s| {
            s.calls.push(Call::Update {
                repository: repository.to_string(),
                number: number.as_u64(),
                body: body.to_string(),
            });
            Ok(())
        })
    }
}

/// An open issue record with the given assignees.
pub fn record(number: u64, assignees: &[&str]) -> IssueRecord {
    IssueRecord {
        number: IssueNumber::new(number),
        assignees: assignees.iter().map(|a| Login::new(*a).unwrap()).collect(),
        state: ItemState::Open,
    }
}

pub fn repo(value: &str) -> RepositoryId {
    RepositoryId::parse(value).unwrap()
}

pub fn label(value: &str) -> Label {
    Label::new(value).unwrap()
}
