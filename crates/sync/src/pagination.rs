//! Exhaustive pagination over page-at-a-time listings.

use std::future::Future;

use tracing::debug;
use tracker::{IssueTrackerError, Page, PageRequest};

/// Fetches every page of a listing, starting from [`PageRequest::first`],
/// and concatenates the items in page order.
///
/// Stops at the first page without a successor. A `next_page` that does not
/// move forward also ends the listing.
pub async fn collect_all_pages<T, F, Fut>(mut fetch: F) -> Result<Vec<T>, IssueTrackerError>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Page<T>, IssueTrackerError>>,
{
    let mut request = PageRequest::first();
    let mut items = Vec::new();
    loop {
        let page = fetch(request).await?;
        debug!(page = request.page, fetched = page.items.len(), "Fetched page");
        items.extend(page.items);
        match page.next_page {
            Some(next) if next > request.page => request = request.at(next),
            _ => return Ok(items),
        }
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
