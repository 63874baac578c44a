//! Application state for the catalog browser.
//!
//! [`App`] owns the catalog and every piece of view state. All changes go
//! through [`App::dispatch`], which key and mouse handlers feed with
//! [`Action`]s.

use super::action::Action;
use super::clipboard::copy_to_clipboard;
use super::hitmap::HitMap;
use super::theme::toggle_theme;
use super::viewmodel::{CatalogView, DetailOverlay, SearchState, StatusMessage, STATUS_TIMEOUT};
use crate::config::TuiPreferences;
use crate::model::{Catalog, Product, ProductId};

/// Main application state
pub struct App {
    /// The loaded catalog, immutable for the session
    pub catalog: Catalog,
    /// Filtered, paginated view
    pub view: CatalogView,
    /// Detail overlay
    pub overlay: DetailOverlay,
    /// Search box
    pub search: SearchState,
    /// Status line message
    pub status: StatusMessage,
    /// Click regions of the last frame
    pub hits: HitMap,
    /// Title shown in the header
    pub title: String,
    /// Whether mouse events are handled
    pub mouse_enabled: bool,
    /// Save the theme to the preferences file when it changes
    pub persist_theme: bool,
    /// Should quit
    pub should_quit: bool,
    /// Animation tick
    pub tick: u64,
}

impl App {
    /// Create an app showing the whole catalog on page 1.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        let view = CatalogView::new(&catalog);
        Self {
            catalog,
            view,
            overlay: DetailOverlay::new(),
            search: SearchState::new(),
            status: StatusMessage::with_auto_clear(STATUS_TIMEOUT),
            hits: HitMap::new(),
            title: "Catalog".to_string(),
            mouse_enabled: true,
            persist_theme: false,
            should_quit: false,
            tick: 0,
        }
    }

    /// Apply a search term before the first frame.
    #[must_use]
    pub fn with_search(mut self, term: impl Into<String>) -> Self {
        self.dispatch(Action::SetSearch(term.into()));
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Apply one action. This is the only method that mutates view state.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(?action, "dispatch");
        match action {
            Action::StartSearch => self.search.start(),
            Action::StopSearch => self.search.stop(),
            Action::SearchPush(c) => {
                self.search.push_char(c);
                self.refilter();
            }
            Action::SearchPop => {
                self.search.pop_char();
                self.refilter();
            }
            Action::SetSearch(term) => {
                self.search.set(term);
                self.refilter();
            }
            Action::ClearSearch => {
                self.search.clear();
                self.refilter();
            }
            Action::PrevPage => self.view.prev_page(),
            Action::NextPage => self.view.next_page(),
            Action::GoToPage(page) => self.view.go_to_page(page),
            Action::FirstPage => self.view.first_page(),
            Action::LastPage => self.view.last_page(),
            Action::MoveSelection(direction) => self.view.move_selection(direction),
            Action::OpenSelected => {
                if let Some(id) = self.view.selected_product(&self.catalog).map(|p| p.id) {
                    self.open_product(id);
                }
            }
            Action::OpenProduct(id) => self.open_product(id),
            Action::CloseOverlay => self.overlay.close(),
            Action::CopyBuyLink => self.copy_buy_link(),
            Action::ToggleTheme => self.toggle_theme(),
            Action::Quit => self.should_quit = true,
        }
    }

    /// Product shown in the overlay, if it is open.
    #[must_use]
    pub fn overlay_product(&self) -> Option<&Product> {
        self.overlay.product(&self.catalog)
    }

    /// Advance the animation tick and expire the status message.
    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
        self.status.expire();
    }

    fn refilter(&mut self) {
        self.view.apply_search(&self.catalog, &self.search.query);
    }

    fn open_product(&mut self, id: ProductId) {
        if !self.overlay.open(&self.catalog, id) {
            tracing::debug!(%id, "no product with this id, overlay unchanged");
        }
    }

    fn copy_buy_link(&mut self) {
        let Some(link) = self.overlay_product().map(|p| p.buy_link.clone()) else {
            return;
        };
        if link.is_empty() {
            self.status.set("This product has no buy link");
        } else if copy_to_clipboard(&link) {
            self.status.set("Copied buy link to clipboard");
        } else {
            self.status.set(format!("Clipboard unavailable: {link}"));
        }
    }

    fn toggle_theme(&mut self) {
        let name = toggle_theme();
        self.status.set(format!("Theme: {name}"));
        if self.persist_theme {
            let prefs = TuiPreferences {
                theme: name.to_string(),
            };
            if let Err(e) = prefs.save() {
                tracing::warn!("Failed to save theme preference: {e}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::action::CardMove;
    use crate::tui::viewmodel::OverlayState;

    fn catalog(n: u32) -> Catalog {
        Catalog::from_products((1..=n).map(|i| {
            let color = if i % 3 == 0 { "Red" } else { "Blue" };
            Product::new(i, format!("{color} Widget {i}"), "A widget", "$5")
                .with_features([format!("Size {i}")])
        }))
        .unwrap()
    }

    #[test]
    fn test_initial_state() {
        let app = App::new(catalog(23));
        assert_eq!(app.view.current_page(), 1);
        assert_eq!(app.view.page_count(), 3);
        assert_eq!(app.overlay.state(), OverlayState::Hidden);
        assert!(!app.search.active);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_typing_filters_and_resets_page() {
        let mut app = App::new(catalog(30));
        app.dispatch(Action::NextPage);
        assert_eq!(app.view.current_page(), 2);

        app.dispatch(Action::StartSearch);
        for c in "red".chars() {
            app.dispatch(Action::SearchPush(c));
        }
        assert_eq!(app.view.current_page(), 1);
        assert_eq!(app.view.search_term(), "red");
        assert_eq!(app.view.filtered().len(), 10);

        app.dispatch(Action::SearchPop);
        assert_eq!(app.view.search_term(), "re");
        app.dispatch(Action::ClearSearch);
        assert_eq!(app.view.filtered().len(), 30);
    }

    #[test]
    fn test_with_search() {
        let app = App::new(catalog(9)).with_search("size 7");
        assert_eq!(app.view.filtered(), &[6]);
        assert_eq!(app.search.query, "size 7");
    }

    #[test]
    fn test_open_selected_uses_current_page() {
        let mut app = App::new(catalog(20));
        app.dispatch(Action::NextPage);
        app.dispatch(Action::MoveSelection(CardMove::Right));
        app.dispatch(Action::MoveSelection(CardMove::Down));
        app.dispatch(Action::OpenSelected);
        // Page 2 starts at product 10; cursor at index 4
        assert_eq!(app.overlay.state(), OverlayState::Visible(ProductId(14)));
    }

    #[test]
    fn test_open_missing_product_is_noop() {
        let mut app = App::new(catalog(5));
        app.dispatch(Action::OpenProduct(ProductId(999)));
        assert_eq!(app.overlay.state(), OverlayState::Hidden);

        app.dispatch(Action::OpenProduct(ProductId(2)));
        app.dispatch(Action::OpenProduct(ProductId(999)));
        assert_eq!(app.overlay.state(), OverlayState::Visible(ProductId(2)));
    }

    #[test]
    fn test_overlay_resolves_against_full_catalog() {
        let mut app = App::new(catalog(9)).with_search("red");
        // Product 1 is filtered out but still opens
        app.dispatch(Action::OpenProduct(ProductId(1)));
        assert_eq!(app.overlay_product().map(|p| p.id), Some(ProductId(1)));
        app.dispatch(Action::CloseOverlay);
        app.dispatch(Action::CloseOverlay);
        assert!(!app.overlay.is_visible());
    }

    #[test]
    fn test_copy_without_buy_link_sets_status() {
        let mut app = App::new(catalog(3));
        app.dispatch(Action::CopyBuyLink);
        assert_eq!(app.status.peek(), None);

        app.dispatch(Action::OpenProduct(ProductId(1)));
        app.dispatch(Action::CopyBuyLink);
        assert_eq!(app.status.peek(), Some("This product has no buy link"));
    }

    #[test]
    fn test_quit() {
        let mut app = App::new(catalog(1));
        app.dispatch(Action::Quit);
        assert!(app.should_quit);
    }
}
