//! Page windows and page-count metadata for catalog listings.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: u32 = 1;
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// A requested page. Both numbers are 1-based and validated by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageRequest {
    #[serde(default = "default_page")]
    pub page: u32,
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page() -> u32 {
    DEFAULT_PAGE
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PageRequest {
    pub fn new(page: u32, page_size: u32) -> Self {
        Self { page, page_size }
    }

    /// Fill in missing values from the defaults.
    pub fn from_optional(page: Option<u32>, page_size: Option<u32>, default_page_size: u32) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            page_size: page_size.unwrap_or(default_page_size),
        }
    }

    /// Cap the page size.
    pub fn clamped(self, max_page_size: u32) -> Self {
        Self {
            page: self.page,
            page_size: self.page_size.min(max_page_size),
        }
    }

    /// Rows to skip before this page.
    pub fn offset(&self) -> u64 {
        u64::from(self.page.saturating_sub(1)) * u64::from(self.page_size)
    }

    /// Maximum rows on this page.
    pub fn limit(&self) -> u64 {
        u64::from(self.page_size)
    }
}

/// Metadata describing where a page sits in the full listing.
///
/// Derived on every listing; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginationMetadata {
    pub current_page: u32,
    pub page_size: u32,
    pub total_items: u64,
    pub total_pages: u64,
}

impl PaginationMetadata {
    pub fn new(request: PageRequest, total_items: u64) -> Self {
        Self {
            current_page: request.page,
            page_size: request.page_size,
            total_items,
            total_pages: total_pages(total_items, request.page_size),
        }
    }
}

/// `ceil(total_items / page_size)`, zero for an empty listing.
pub fn total_pages(total_items: u64, page_size: u32) -> u64 {
    if page_size == 0 {
        return 0;
    }
    total_items.div_ceil(u64::from(page_size))
}

/// One page of results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    #[serde(rename = "pagination_data")]
    pub pagination: PaginationMetadata,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, request: PageRequest, total_items: u64) -> Self {
        Self {
            items,
            pagination: PaginationMetadata::new(request, total_items),
        }
    }

    /// True when the requested page lies past the last one.
    pub fn is_beyond_end(&self) -> bool {
        u64::from(self.pagination.current_page) > self.pagination.total_pages
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        assert_eq!(PageRequest::new(1, 10).offset(), 0);
        assert_eq!(PageRequest::new(3, 10).offset(), 20);
        assert_eq!(PageRequest::new(2, 25).offset(), 25);
    }

    #[test]
    fn test_offset_does_not_underflow_on_page_zero() {
        assert_eq!(PageRequest::new(0, 10).offset(), 0);
    }

    #[test]
    fn test_total_pages() {
        assert_eq!(total_pages(25, 10), 3);
        assert_eq!(total_pages(30, 10), 3);
        assert_eq!(total_pages(31, 10), 4);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(5, 0), 0);
    }

    #[test]
    fn test_metadata_beyond_last_page_keeps_totals() {
        let metadata = PaginationMetadata::new(PageRequest::new(4, 10), 25);
        assert_eq!(metadata.current_page, 4);
        assert_eq!(metadata.total_items, 25);
        assert_eq!(metadata.total_pages, 3);

        let page: Page<u32> = Page::new(Vec::new(), PageRequest::new(4, 10), 25);
        assert!(page.is_beyond_end());
    }

    #[test]
    fn test_from_optional_defaults() {
        let request = PageRequest::from_optional(None, None, 20);
        assert_eq!(request, PageRequest::new(1, 20));

        let request = PageRequest::from_optional(Some(3), Some(5), 20);
        assert_eq!(request, PageRequest::new(3, 5));
    }

    #[test]
    fn test_clamped() {
        assert_eq!(PageRequest::new(2, 500).clamped(100), PageRequest::new(2, 100));
        assert_eq!(PageRequest::new(2, 50).clamped(100), PageRequest::new(2, 50));
    }

    #[test]
    fn test_request_deserialization_defaults() {
        let request: PageRequest = serde_json::from_str("{}").unwrap();
        assert_eq!(request, PageRequest::default());

        let request: PageRequest = serde_json::from_str(r#"{"page": 2, "pageSize": 5}"#).unwrap();
        assert_eq!(request, PageRequest::new(2, 5));
    }

    #[test]
    fn test_metadata_serialization() {
        let metadata = PaginationMetadata::new(PageRequest::new(1, 10), 25);
        let json = serde_json::to_value(metadata).unwrap();
        assert_eq!(json["currentPage"], 1);
        assert_eq!(json["pageSize"], 10);
        assert_eq!(json["totalItems"], 25);
        assert_eq!(json["totalPages"], 3);
    }
}
