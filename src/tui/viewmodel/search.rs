//! Search box state.
//!
//! Holds the text being typed and whether the box has keyboard focus. The
//! term itself is applied to the catalog by `CatalogView::apply_search`.

/// Search input state.
#[derive(Debug, Clone, Default)]
pub struct SearchState {
    /// Whether the search box has focus
    pub active: bool,
    /// Current search query
    pub query: String,
}

impl SearchState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Focus the search box. The existing query is kept so it can be edited.
    pub fn start(&mut self) {
        self.active = true;
    }

    pub fn stop(&mut self) {
        self.active = false;
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    pub fn set(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.query.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_start_keeps_query() {
        let mut search = SearchState::new();
        search.set("lamp");
        search.start();
        assert!(search.active);
        assert_eq!(search.query, "lamp");
    }

    #[test]
    fn test_edit_query() {
        let mut search = SearchState::new();
        search.push_char('a');
        search.push_char('é');
        assert_eq!(search.query, "aé");
        search.pop_char();
        assert_eq!(search.query, "a");
        search.clear();
        assert!(search.is_empty());
        // Popping an empty query is harmless
        search.pop_char();
        assert!(search.is_empty());
    }
}
