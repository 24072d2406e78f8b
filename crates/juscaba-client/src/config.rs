use std::time::Duration;

use crate::endpoints::DEFAULT_BASE_URL;

/// Entries requested per page of the actuaciones listing.
pub const DEFAULT_PAGE_SIZE: u32 = 100;
/// Candidates requested from the case search.
pub const DEFAULT_SEARCH_SIZE: u32 = 10;
/// Entries whose documents are derived concurrently.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// Settings for [`JuscabaClient`](crate::JuscabaClient).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Root of the `expedientes` API, without a trailing slash.
    pub base_url: String,
    pub page_size: u32,
    pub search_size: u32,
    pub concurrency: usize,
    /// Per-request deadline applied by the HTTP transport. `None` waits indefinitely.
    pub timeout: Option<Duration>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_size: DEFAULT_SEARCH_SIZE,
            concurrency: DEFAULT_CONCURRENCY,
            timeout: None,
        }
    }
}
