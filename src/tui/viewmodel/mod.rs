//! View model for the catalog browser.
//!
//! Pure state and arithmetic, free of any terminal dependency, so every
//! transition can be exercised directly in tests.
//!
//! # Components
//!
//! - [`filter_products`] - Case-insensitive substring filter
//! - [`page_controls`] and friends - Page arithmetic and the sliding window
//! - [`CatalogView`] - Filtered view, current page and card cursor
//! - [`DetailOverlay`] - Hidden/Visible overlay state machine
//! - [`SearchState`] - Search box input
//! - [`StatusMessage`] - Temporary status line message

mod filter;
mod overlay;
pub mod pagination;
mod search;
mod status;

pub use filter::filter_products;
pub use overlay::{DetailOverlay, OverlayState};
pub use pagination::{
    page_controls, page_count, page_range, page_window, PageControl, MAX_VISIBLE_PAGES, PAGE_SIZE,
};
pub use search::SearchState;
pub use status::{StatusMessage, STATUS_TIMEOUT};

use crate::model::{Catalog, Product};
use crate::tui::action::CardMove;
use crate::tui::state::{GridCursor, ListNavigation};

/// Cards per grid row.
pub const GRID_COLUMNS: usize = 3;

/// The filtered, paginated view of the catalog.
///
/// Owns the view state exclusively: only [`CatalogView::apply_search`]
/// replaces the filtered set and only the page methods move the current
/// page. `current_page` stays within `[1, page_count]` whenever there is at
/// least one page, and is `1` otherwise.
#[derive(Debug, Clone)]
pub struct CatalogView {
    /// Catalog positions of the matching products, in catalog order
    filtered: Vec<usize>,
    /// 1-indexed current page
    current_page: usize,
    /// Last applied search term
    search_term: String,
    /// Keyboard cursor within the visible page
    cursor: GridCursor,
}

impl CatalogView {
    /// Start with the whole catalog on page 1.
    #[must_use]
    pub fn new(catalog: &Catalog) -> Self {
        let mut view = Self {
            filtered: (0..catalog.len()).collect(),
            current_page: 1,
            search_term: String::new(),
            cursor: GridCursor::new(GRID_COLUMNS),
        };
        view.sync_cursor();
        view
    }

    /// Re-filter the catalog and return to page 1.
    pub fn apply_search(&mut self, catalog: &Catalog, term: &str) {
        term.clone_into(&mut self.search_term);
        self.filtered = filter_products(catalog, term);
        self.current_page = 1;
        self.cursor.go_first();
        self.sync_cursor();
        tracing::debug!(
            term,
            matches = self.filtered.len(),
            pages = self.page_count(),
            "applied search"
        );
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// Catalog positions of every matching product.
    #[must_use]
    pub fn filtered(&self) -> &[usize] {
        &self.filtered
    }

    /// True when the search matched nothing ("no results" state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub fn page_count(&self) -> usize {
        page_count(self.filtered.len())
    }

    /// Catalog positions on the current page.
    #[must_use]
    pub fn visible_indices(&self) -> &[usize] {
        &self.filtered[page_range(self.filtered.len(), self.current_page)]
    }

    /// Products on the current page, in display order.
    pub fn visible_products<'a>(
        &'a self,
        catalog: &'a Catalog,
    ) -> impl Iterator<Item = &'a Product> + 'a {
        self.visible_indices()
            .iter()
            .filter_map(move |&index| catalog.get_index(index))
    }

    /// Pagination bar for the current state.
    #[must_use]
    pub fn controls(&self) -> Vec<PageControl> {
        page_controls(self.current_page, self.page_count())
    }

    /// Jump to `page`, clamped to the valid range.
    pub fn go_to_page(&mut self, page: usize) {
        let count = self.page_count();
        if count == 0 {
            return;
        }
        let target = page.clamp(1, count);
        if target != self.current_page {
            tracing::debug!(from = self.current_page, to = target, "page change");
            self.current_page = target;
            self.cursor.go_first();
        }
        self.sync_cursor();
    }

    /// Previous page; no-op on the first page.
    pub fn prev_page(&mut self) {
        if self.current_page > 1 {
            self.go_to_page(self.current_page - 1);
        }
    }

    /// Next page; no-op on the last page.
    pub fn next_page(&mut self) {
        if self.current_page < self.page_count() {
            self.go_to_page(self.current_page + 1);
        }
    }

    pub fn first_page(&mut self) {
        self.go_to_page(1);
    }

    pub fn last_page(&mut self) {
        self.go_to_page(self.page_count());
    }

    /// Index of the highlighted card within the visible page.
    #[must_use]
    pub const fn selected(&self) -> usize {
        self.cursor.selected
    }

    pub fn move_selection(&mut self, direction: CardMove) {
        self.cursor.apply(direction);
    }

    /// Product under the card cursor.
    #[must_use]
    pub fn selected_product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.visible_indices()
            .get(self.cursor.selected)
            .and_then(|&index| catalog.get_index(index))
    }

    fn sync_cursor(&mut self) {
        let visible = self.visible_indices().len();
        self.cursor.set_total(visible);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};

    fn catalog(n: u32) -> Catalog {
        Catalog::from_products((1..=n).map(|i| {
            let kind = if i % 2 == 0 { "Even" } else { "Odd" };
            Product::new(i, format!("{kind} item {i}"), format!("Product number {i}"), "$1")
        }))
        .unwrap()
    }

    fn visible_ids(view: &CatalogView, catalog: &Catalog) -> Vec<u32> {
        view.visible_products(catalog).map(|p| p.id.0).collect()
    }

    #[test]
    fn test_initial_state() {
        let catalog = catalog(23);
        let view = CatalogView::new(&catalog);
        assert_eq!(view.search_term(), "");
        assert_eq!(view.filtered().len(), 23);
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.page_count(), 3);
    }

    #[test]
    fn test_twenty_three_products() {
        let catalog = catalog(23);
        let mut view = CatalogView::new(&catalog);
        assert_eq!(visible_ids(&view, &catalog), (1..=9).collect::<Vec<_>>());
        view.go_to_page(3);
        assert_eq!(visible_ids(&view, &catalog), (19..=23).collect::<Vec<_>>());
    }

    #[test]
    fn test_search_resets_page() {
        let catalog = catalog(40);
        let mut view = CatalogView::new(&catalog);
        view.go_to_page(4);
        assert_eq!(view.current_page(), 4);

        view.apply_search(&catalog, "EVEN");
        assert_eq!(view.current_page(), 1);
        assert_eq!(view.filtered().len(), 20);
        assert!(visible_ids(&view, &catalog).iter().all(|id| id % 2 == 0));
    }

    #[test]
    fn test_empty_result_state() {
        let catalog = catalog(12);
        let mut view = CatalogView::new(&catalog);
        view.apply_search(&catalog, "nothing matches this");
        assert!(view.is_empty());
        assert_eq!(view.page_count(), 0);
        assert_eq!(view.current_page(), 1);
        assert!(view.controls().is_empty());
        assert!(view.selected_product(&catalog).is_none());

        // Page moves are harmless with no pages
        view.next_page();
        view.last_page();
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_go_to_page_clamps() {
        let catalog = catalog(23);
        let mut view = CatalogView::new(&catalog);
        view.go_to_page(99);
        assert_eq!(view.current_page(), 3);
        view.go_to_page(0);
        assert_eq!(view.current_page(), 1);
    }

    #[test]
    fn test_prev_next_boundaries() {
        let catalog = catalog(23);
        let mut view = CatalogView::new(&catalog);
        view.prev_page();
        assert_eq!(view.current_page(), 1);
        view.next_page();
        view.next_page();
        view.next_page();
        assert_eq!(view.current_page(), 3);
        view.first_page();
        assert_eq!(view.current_page(), 1);
        view.last_page();
        assert_eq!(view.current_page(), 3);
    }

    #[test]
    fn test_cursor_resets_and_clamps_on_page_change() {
        let catalog = catalog(23);
        let mut view = CatalogView::new(&catalog);
        for _ in 0..8 {
            view.move_selection(CardMove::Right);
        }
        assert_eq!(view.selected(), 8);
        assert_eq!(view.selected_product(&catalog).map(|p| p.id), Some(ProductId(9)));

        view.last_page();
        assert_eq!(view.selected(), 0);
        for _ in 0..8 {
            view.move_selection(CardMove::Right);
        }
        // Only five cards on the last page
        assert_eq!(view.selected(), 4);
        assert_eq!(view.selected_product(&catalog).map(|p| p.id), Some(ProductId(23)));
    }

    #[test]
    fn test_hundred_products_window() {
        let catalog = catalog(100);
        let mut view = CatalogView::new(&catalog);
        view.go_to_page(6);
        let labels: Vec<_> = view.controls().iter().map(PageControl::label).collect();
        assert_eq!(
            labels,
            ["« Prev", "1", "...", "4", "5", "6", "7", "8", "...", "12", "Next »"]
        );
    }
}
