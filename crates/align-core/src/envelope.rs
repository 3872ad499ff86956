//! The paginated list envelope returned by collection endpoints.

use serde::{Deserialize, Serialize};

/// One page of a collection: `{count, next, previous, results}`.
///
/// Only the first page is ever requested; `next`/`previous` are kept for
/// callers that want to know whether more data exists.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Page<T> {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    /// Drop the envelope and keep the records.
    #[must_use]
    pub fn into_results(self) -> Vec<T> {
        self.results
    }
}
