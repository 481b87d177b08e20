//! Offset/limit page-window arithmetic.
//!
//! Every paginated listing (board grids, the admin console) uses the same
//! contract: a 1-based page number and a fixed page size map to an
//! offset/limit window, and a total row count maps to a total page count
//! that is never below 1, so an empty result set still reports a valid
//! current page. Out-of-range navigation is rejected by callers, never
//! silently wrapped.

use crate::error::CoreError;

/// Videos per page on public board grids.
pub const BOARD_PAGE_SIZE: i64 = 30;

/// Videos per page in the admin console listing.
pub const ADMIN_PAGE_SIZE: i64 = 20;

/// Maximum candidate rows fetched for the related-video rail.
pub const RELATED_POOL_LIMIT: i64 = 100;

/// Maximum entries shown in the related-video rail.
pub const RELATED_MAX: usize = 18;

/// An offset/limit pair for one page of a paginated query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    pub offset: i64,
    pub limit: i64,
}

impl PageWindow {
    /// Window for a 1-based page number. Page numbers below 1 clamp to the
    /// first page; callers reject them before querying (see [`validate_page`]).
    pub fn for_page(page: i64, page_size: i64) -> Self {
        Self {
            offset: (page - 1).max(0) * page_size,
            limit: page_size,
        }
    }
}

/// Total page count for a row count: `max(1, ceil(total_count / page_size))`.
///
/// # Examples
///
/// ```
/// use vodboard_core::paging::total_pages;
///
/// assert_eq!(total_pages(0, 20), 1);
/// assert_eq!(total_pages(45, 20), 3);
/// ```
pub fn total_pages(total_count: i64, page_size: i64) -> i64 {
    ((total_count.max(0) + page_size - 1) / page_size).max(1)
}

/// Reject page numbers outside `1..=total_pages`.
pub fn validate_page(page: i64, total_pages: i64) -> Result<(), CoreError> {
    if page < 1 || page > total_pages {
        return Err(CoreError::Validation(format!(
            "Page {page} is out of range (1..={total_pages})"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_window() {
        assert_eq!(
            PageWindow::for_page(1, 20),
            PageWindow { offset: 0, limit: 20 }
        );
    }

    #[test]
    fn third_page_window() {
        assert_eq!(
            PageWindow::for_page(3, 20),
            PageWindow { offset: 40, limit: 20 }
        );
    }

    #[test]
    fn underflow_clamps_to_first_page() {
        assert_eq!(PageWindow::for_page(0, 20).offset, 0);
        assert_eq!(PageWindow::for_page(-5, 20).offset, 0);
    }

    #[test]
    fn empty_set_still_has_one_page() {
        assert_eq!(total_pages(0, 20), 1);
    }

    #[test]
    fn partial_last_page_rounds_up() {
        assert_eq!(total_pages(45, 20), 3);
        assert_eq!(total_pages(40, 20), 2);
        assert_eq!(total_pages(41, 20), 3);
    }

    #[test]
    fn board_navigation_scenario() {
        // Page 2 of a 65-video board at 30 per page.
        let window = PageWindow::for_page(2, BOARD_PAGE_SIZE);
        assert_eq!(window.offset, 30);
        assert_eq!(window.limit, 30);
        assert_eq!(total_pages(65, BOARD_PAGE_SIZE), 3);
    }

    #[test]
    fn out_of_range_pages_rejected() {
        assert!(validate_page(1, 3).is_ok());
        assert!(validate_page(3, 3).is_ok());
        assert!(validate_page(0, 3).is_err());
        assert!(validate_page(4, 3).is_err());
    }
}
