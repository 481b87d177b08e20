//! Shared response types for paginated listings.

use serde::Serialize;

/// One page of a listing plus its window metadata.
///
/// `total_pages` is never below 1, so an empty listing still reports a
/// valid current page.
#[derive(Debug, Serialize)]
pub struct Paginated<T: Serialize> {
    pub items: Vec<T>,
    pub page: i64,
    pub page_size: i64,
    pub total_count: i64,
    pub total_pages: i64,
}

impl<T: Serialize> Paginated<T> {
    /// Assemble a page from query results and the known total row count.
    pub fn new(items: Vec<T>, page: i64, page_size: i64, total_count: i64) -> Self {
        Self {
            items,
            page,
            page_size,
            total_count,
            total_pages: vodboard_core::paging::total_pages(total_count, page_size),
        }
    }
}
