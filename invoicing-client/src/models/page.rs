//! Paged-response envelope returned by the remote paged-query endpoint.

use serde::Deserialize;

/// One bounded slice of the server-side ordered, filtered result set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    pub total_elements: u64,
    /// Zero-based index of this page.
    pub number: u32,
}

impl<T> Page<T> {
    /// Total number of pages at the given page size.
    pub fn total_pages(&self, page_size: u32) -> u32 {
        if page_size == 0 {
            return 0;
        }
        self.total_elements.div_ceil(u64::from(page_size)) as u32
    }
}
