//! HTTP API handlers for artism-server

pub mod ai;
pub mod artists;
pub mod artworks;
pub mod health;
pub mod movements;
pub mod timeline;
pub mod ui;

use serde::Serialize;

/// Paginated list envelope, returned when the client asks for a page
/// explicitly; otherwise list endpoints return the full matching set.
#[derive(Debug, Serialize)]
pub struct PagedResponse<T> {
    pub total_results: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
    pub items: Vec<T>,
}

impl<T: Serialize> PagedResponse<T> {
    /// Slice `items` down to the requested page
    pub fn new(items: Vec<T>, requested_page: i64, page_size: Option<i64>) -> Self {
        use artism_common::pagination::{calculate_pagination, paginate, DEFAULT_PAGE_SIZE};

        let total_results = items.len() as i64;
        let p = calculate_pagination(
            total_results,
            requested_page,
            page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        );
        Self {
            total_results,
            page: p.page,
            page_size: p.page_size,
            total_pages: p.total_pages,
            items: paginate(items, &p),
        }
    }
}
