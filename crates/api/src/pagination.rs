//! Offset-style pagination over `page`/`pageSize` endpoints.

use std::future::Future;

use tracing::debug;

use crate::error::Result;

/// Largest page size the API serves.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Default page size for single-page queries.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A zero-based page index and the number of records per page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Records per page.
    pub page_size: u32,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first(DEFAULT_PAGE_SIZE)
    }
}

impl PageRequest {
    /// Create a page request.
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// First page with the given size.
    pub fn first(page_size: u32) -> Self {
        Self::new(0, page_size)
    }

    /// The page that follows this one.
    pub fn next(self) -> Self {
        Self::new(self.page + 1, self.page_size)
    }

    /// Query parameters sent with the request.
    pub fn query_params(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("pageSize", self.page_size.to_string()),
        ]
    }
}

/// Fetch pages until `limit` records are collected or the data runs out.
///
/// Pages are requested one at a time with `pageSize = min(100, limit)`.
/// Collection stops on an empty page, or on a page shorter than the page size,
/// which is taken to mean end of data. A backend that returns a short page
/// mid-stream therefore ends collection early. The result never holds more
/// than `limit` records.
pub async fn collect_pages<T, F, Fut>(limit: usize, mut fetch_page: F) -> Result<Vec<T>>
where
    F: FnMut(PageRequest) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let page_size = u32::try_from(limit).map_or(MAX_PAGE_SIZE, |l| l.min(MAX_PAGE_SIZE));
    let mut request = PageRequest::first(page_size);
    let mut results = Vec::new();

    while results.len() < limit {
        let batch = fetch_page(request).await?;
        let batch_len = batch.len();
        debug!(
            page = request.page,
            page_size = request.page_size,
            received = batch_len,
            "fetched page"
        );

        if batch.is_empty() {
            break;
        }

        results.extend(batch);

        if batch_len < page_size as usize {
            break;
        }

        request = request.next();
    }

    results.truncate(limit);
    Ok(results)
}
