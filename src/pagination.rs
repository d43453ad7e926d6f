//! Pagination over an ordered collection.
//!
//! All derivations are pure functions of `(total_items, page_size,
//! max_visible_pages, current_page)`; recomputing them for the same
//! state always yields the same result. Pages are 1-indexed.

use std::ops::{Range, RangeInclusive};

/// Tracks the current page and derives the page slice, the total page
/// count and the sliding window of visible page numbers.
#[derive(Debug, Clone)]
pub struct Pager {
    /// Items per page (>= 1)
    page_size: usize,

    /// Maximum number of page-number entries shown at once (>= 1)
    max_visible_pages: usize,

    /// Total number of items in the collection
    total_items: usize,

    /// Current page, 1-indexed, always within [1, total_pages]
    current_page: usize,
}

impl Pager {
    pub fn new(page_size: usize, max_visible_pages: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            max_visible_pages: max_visible_pages.max(1),
            total_items: 0,
            current_page: 1,
        }
    }

    /// Set the total number of items, clamping the current page if the
    /// collection shrank below it.
    pub fn set_total_items(&mut self, total: usize) {
        self.total_items = total;
        self.current_page = self.current_page.min(self.total_pages());
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Total number of pages. An empty collection still counts as one
    /// page so the bar reads "Page 1 of 1" rather than "Page 1 of 0".
    pub fn total_pages(&self) -> usize {
        if self.total_items == 0 {
            1
        } else {
            (self.total_items + self.page_size - 1) / self.page_size
        }
    }

    /// Index range of the items on the current page. Offsets past the
    /// end of the collection yield an empty range, never an error.
    pub fn page_range(&self) -> Range<usize> {
        let start = ((self.current_page - 1) * self.page_size).min(self.total_items);
        let end = (start + self.page_size).min(self.total_items);
        start..end
    }

    /// The sliding window of page numbers to expose as controls.
    ///
    /// At most `max_visible_pages` wide. Near the start it pins to the
    /// first pages, near the end to the last pages; in between it sits
    /// asymmetrically around the current page (one slot more after than
    /// before), so the window slides without shrinking.
    pub fn visible_window(&self) -> RangeInclusive<usize> {
        let total = self.total_pages();
        let max = self.max_visible_pages;

        if total <= max {
            return 1..=total;
        }

        let before = (max / 2).saturating_sub(1);
        let after = max - before - 1;

        if self.current_page <= before + 1 {
            1..=max
        } else if self.current_page + after > total {
            (total - max + 1)..=total
        } else {
            (self.current_page - before)..=(self.current_page + after)
        }
    }

    /// Previous is offered on every page but the first.
    pub fn has_previous(&self) -> bool {
        self.current_page > 1
    }

    /// Next is offered on every page but the last.
    pub fn has_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Go to a page, clamped to [1, total_pages]. Returns the page that
    /// was actually selected.
    pub fn goto_page(&mut self, page: usize) -> usize {
        self.current_page = page.clamp(1, self.total_pages());
        self.current_page
    }

    /// Advance one page; no-op on the last page.
    pub fn next_page(&mut self) -> bool {
        if self.has_next() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Go back one page; no-op on the first page.
    pub fn previous_page(&mut self) -> bool {
        if self.has_previous() {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    pub fn first_page(&mut self) {
        self.current_page = 1;
    }

    pub fn last_page(&mut self) {
        self.current_page = self.total_pages();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pager(total_items: usize) -> Pager {
        let mut pager = Pager::new(5, 10);
        pager.set_total_items(total_items);
        pager
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(pager(25).total_pages(), 5);
        assert_eq!(pager(26).total_pages(), 6);
        assert_eq!(pager(1).total_pages(), 1);
        assert_eq!(pager(4).total_pages(), 1);
        assert_eq!(pager(5).total_pages(), 1);
        assert_eq!(pager(6).total_pages(), 2);
    }

    #[test]
    fn empty_collection_still_has_one_page() {
        let pager = pager(0);
        assert_eq!(pager.total_pages(), 1);
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.page_range(), 0..0);
        assert!(!pager.has_previous());
        assert!(!pager.has_next());
    }

    #[test]
    fn first_page_slice_of_25_items() {
        let pager = pager(25);
        assert_eq!(pager.page_size(), 5);
        assert_eq!(pager.total_items(), 25);
        assert_eq!(pager.total_pages(), 5);
        assert_eq!(pager.page_range(), 0..5);
        assert!(!pager.has_previous());
        assert!(pager.has_next());
    }

    #[test]
    fn last_page_of_25_items() {
        let mut pager = pager(25);
        pager.last_page();
        assert_eq!(pager.current_page(), 5);
        assert_eq!(pager.page_range(), 20..25);
        assert!(pager.has_previous());
        assert!(!pager.has_next());
    }

    #[test]
    fn partial_last_page() {
        let mut pager = pager(23);
        pager.last_page();
        assert_eq!(pager.page_range(), 20..23);
    }

    #[test]
    fn next_then_previous_returns_to_start() {
        let mut pager = pager(25);
        assert!(pager.next_page());
        assert_eq!(pager.current_page(), 2);
        assert!(pager.previous_page());
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn navigation_is_a_noop_at_the_boundaries() {
        let mut pager = pager(25);
        assert!(!pager.previous_page());
        assert_eq!(pager.current_page(), 1);

        pager.last_page();
        assert!(!pager.next_page());
        assert_eq!(pager.current_page(), 5);
    }

    #[test]
    fn goto_page_clamps_to_valid_range() {
        let mut pager = pager(25);
        assert_eq!(pager.goto_page(3), 3);
        assert_eq!(pager.goto_page(99), 5);
        assert_eq!(pager.goto_page(0), 1);
    }

    #[test]
    fn shrinking_collection_clamps_current_page() {
        let mut pager = pager(100);
        pager.goto_page(20);
        assert_eq!(pager.current_page(), 20);

        pager.set_total_items(25);
        assert_eq!(pager.current_page(), 5);
    }

    #[test]
    fn slice_lengths_match_the_remainder() {
        for total in [0usize, 1, 4, 5, 6, 23, 25, 101] {
            let mut pager = pager(total);
            for page in 1..=pager.total_pages() {
                pager.goto_page(page);
                let range = pager.page_range();
                let expected = total.saturating_sub((page - 1) * 5).min(5);
                assert_eq!(range.len(), expected, "total={} page={}", total, page);
            }
        }
    }

    #[test]
    fn window_shows_every_page_when_few() {
        assert_eq!(pager(25).visible_window(), 1..=5);
        assert_eq!(pager(50).visible_window(), 1..=10);
        assert_eq!(pager(0).visible_window(), 1..=1);
    }

    #[test]
    fn window_pins_to_the_start() {
        // 100 pages; pages 1..=5 all see the first ten
        let mut pager = pager(500);
        for page in 1..=5 {
            pager.goto_page(page);
            assert_eq!(pager.visible_window(), 1..=10, "page={}", page);
        }
    }

    #[test]
    fn window_pins_to_the_end() {
        let mut pager = pager(500);
        for page in 96..=100 {
            pager.goto_page(page);
            assert_eq!(pager.visible_window(), 91..=100, "page={}", page);
        }
    }

    #[test]
    fn window_slides_around_the_middle() {
        let mut pager = pager(500);
        pager.goto_page(50);
        // 4 before, current, 5 after
        assert_eq!(pager.visible_window(), 46..=55);

        pager.goto_page(6);
        assert_eq!(pager.visible_window(), 2..=11);

        pager.goto_page(95);
        assert_eq!(pager.visible_window(), 91..=100);
    }

    #[test]
    fn window_always_contains_the_current_page() {
        let mut pager = pager(500);
        for page in 1..=pager.total_pages() {
            pager.goto_page(page);
            let window = pager.visible_window();
            assert!(window.contains(&page), "page={} window={:?}", page, window);
            assert!(*window.start() >= 1);
            assert!(*window.end() <= pager.total_pages());
            assert_eq!(window.count(), 10, "page={}", page);
        }
    }

    #[test]
    fn window_is_deterministic() {
        let mut pager = pager(500);
        pager.goto_page(42);
        assert_eq!(pager.visible_window(), pager.visible_window());
        assert_eq!(pager.page_range(), pager.page_range());
    }

    #[test]
    fn window_handles_a_one_wide_bar() {
        let mut pager = Pager::new(5, 1);
        pager.set_total_items(500);
        pager.goto_page(42);
        assert_eq!(pager.visible_window(), 42..=42);
    }
}
