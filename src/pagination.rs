//! Pagination models shared by list templates.

use serde::Serialize;

/// Number of items per list page across the application.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 20;

/// Maximum number of page buttons rendered at once.
pub const MAX_VISIBLE_PAGES: usize = 5;

/// Computes the contiguous run of page numbers to render as buttons.
///
/// The window is centered on `current_page` and clamped to `[1, total_pages]`:
/// near the end it shifts back so the full `max_visible` width is kept
/// whenever enough pages exist. An empty list means pagination controls are
/// hidden entirely.
pub fn page_window(current_page: usize, total_pages: usize, max_visible: usize) -> Vec<usize> {
    if total_pages == 0 || max_visible == 0 {
        return Vec::new();
    }
    let current = current_page.clamp(1, total_pages);

    let start = current.saturating_sub(max_visible / 2).max(1);
    let mut end = start + max_visible - 1;
    let start = if end > total_pages {
        end = total_pages;
        end.saturating_sub(max_visible - 1).max(1)
    } else {
        start
    };

    (start..=end).collect()
}

/// One rendered page of items plus everything the pagination bar needs.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    /// Page buttons to show, centered on the current page.
    pub pages: Vec<usize>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_items: usize, total_pages: usize) -> Self {
        let page = if current_page == 0 { 1 } else { current_page };
        let pages = page_window(page, total_pages, MAX_VISIBLE_PAGES);

        Self {
            items,
            pages,
            page,
            total_pages,
            total_items,
            has_prev: page > 1,
            has_next: total_pages > 0 && page < total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_is_centered_and_clamped() {
        assert_eq!(page_window(1, 10, 5), vec![1, 2, 3, 4, 5]);
        assert_eq!(page_window(5, 10, 5), vec![3, 4, 5, 6, 7]);
        assert_eq!(page_window(8, 10, 5), vec![6, 7, 8, 9, 10]);
        assert_eq!(page_window(10, 10, 5), vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn short_lists_show_every_page() {
        for current in 1..=3 {
            assert_eq!(page_window(current, 3, 5), vec![1, 2, 3]);
        }
    }

    #[test]
    fn empty_list_hides_controls() {
        assert!(page_window(1, 0, 5).is_empty());
        let paginated: Paginated<i32> = Paginated::new(vec![], 1, 0, 0);
        assert!(paginated.pages.is_empty());
        assert!(!paginated.has_prev);
        assert!(!paginated.has_next);
    }

    #[test]
    fn prev_and_next_disable_at_the_edges() {
        let first: Paginated<i32> = Paginated::new(vec![], 1, 100, 5);
        assert!(!first.has_prev);
        assert!(first.has_next);

        let last: Paginated<i32> = Paginated::new(vec![], 5, 100, 5);
        assert!(last.has_prev);
        assert!(!last.has_next);
    }

    #[test]
    fn zero_page_is_treated_as_first() {
        let paginated: Paginated<i32> = Paginated::new(vec![], 0, 10, 2);
        assert_eq!(paginated.page, 1);
    }
}
