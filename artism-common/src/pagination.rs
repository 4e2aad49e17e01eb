//! Pagination utilities
//!
//! List endpoints return the full matching set unless an explicit page is
//! requested; these helpers compute clamped page metadata when one is.

/// Default page size when a page is requested without an explicit size
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Upper bound on client-supplied page sizes
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pagination metadata calculated from total results
#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    /// Current page number (1-indexed)
    pub page: i64,
    /// Rows per page
    pub page_size: i64,
    /// Total number of pages
    pub total_pages: i64,
    /// Offset of the first row on the page
    pub offset: i64,
}

/// Calculate pagination metadata from total results and requested page.
///
/// The requested page is clamped into `[1, max(total_pages, 1)]`; the page
/// size is clamped into `[1, MAX_PAGE_SIZE]`.
pub fn calculate_pagination(total_results: i64, requested_page: i64, page_size: i64) -> Pagination {
    let page_size = page_size.max(1).min(MAX_PAGE_SIZE);
    let total_pages = (total_results + page_size - 1) / page_size;
    let page = requested_page.max(1).min(total_pages.max(1));
    let offset = (page - 1) * page_size;

    Pagination {
        page,
        page_size,
        total_pages,
        offset,
    }
}

/// Take the slice of `items` belonging to the page
pub fn paginate<T>(items: Vec<T>, p: &Pagination) -> Vec<T> {
    items
        .into_iter()
        .skip(p.offset as usize)
        .take(p.page_size as usize)
        .collect()
}
