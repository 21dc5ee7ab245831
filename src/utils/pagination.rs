// src/utils/pagination.rs

use crate::config::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// A resolved page window. `page` is 1-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub page: i64,
    pub limit: i64,
}

impl Pagination {
    /// Clamps the request into a valid window: page >= 1, limit in 1..=MAX_PAGE_SIZE.
    pub fn from_params(page: Option<i64>, limit: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
            limit: limit.unwrap_or(DEFAULT_PAGE_SIZE).clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Saturates for absurd page numbers; such a page is simply past the end.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// ceil(total / limit)
    pub fn total_pages(&self, total: i64) -> i64 {
        (total + self.limit - 1) / self.limit
    }
}
