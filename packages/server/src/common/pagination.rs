// Offset/limit pagination for the REST endpoints.
//
// Requests carry `page` (1-based) and `itemsPerPage`; responses echo the
// effective values plus the total page count.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: usize = 10;
pub const MAX_PAGE_SIZE: usize = 100;

/// Pagination input parsed from query parameters or a request body.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PageParams {
    pub page: usize,
    pub items_per_page: usize,
}

impl Default for PageParams {
    fn default() -> Self {
        PageParams {
            page: 1,
            items_per_page: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageParams {
    /// Clamp to sane bounds: page >= 1, 1 <= itemsPerPage <= MAX_PAGE_SIZE.
    pub fn normalized(self) -> Self {
        PageParams {
            page: self.page.max(1),
            items_per_page: self.items_per_page.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Number of records to skip before the requested page.
    pub fn offset(&self) -> usize {
        (self.page - 1) * self.items_per_page
    }
}

/// Pagination summary included in paged responses.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub total_items: usize,
}

impl Pagination {
    pub fn new(params: &PageParams, total_items: usize) -> Self {
        Pagination {
            current_page: params.page,
            total_pages: total_items.div_ceil(params.items_per_page),
            items_per_page: params.items_per_page,
            total_items,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_zero_based() {
        let params = PageParams {
            page: 3,
            items_per_page: 10,
        };
        assert_eq!(params.offset(), 20);
    }

    #[test]
    fn normalized_clamps_out_of_range_values() {
        let params = PageParams {
            page: 0,
            items_per_page: 1000,
        }
        .normalized();
        assert_eq!(params.page, 1);
        assert_eq!(params.items_per_page, MAX_PAGE_SIZE);
    }

    #[test]
    fn total_pages_rounds_up() {
        let pagination = Pagination::new(&PageParams::default(), 25);
        assert_eq!(pagination.total_pages, 3);
    }
}
