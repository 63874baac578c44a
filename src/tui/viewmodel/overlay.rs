//! Detail overlay state machine.
//!
//! Two states: `Hidden` (initial) and `Visible(id)`. Opening resolves the id
//! against the full catalog, never the filtered view, and a miss leaves the
//! state untouched. Every dismissal gesture maps to the single `close`
//! transition.

use crate::model::{Catalog, Product, ProductId};

/// Overlay visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Hidden,
    Visible(ProductId),
}

/// Single-product detail overlay.
///
/// # Example
///
/// ```ignore
/// let mut overlay = DetailOverlay::new();
///
/// assert!(overlay.open(&catalog, ProductId(3)));
/// assert!(overlay.is_visible());
///
/// overlay.close();
/// assert_eq!(overlay.state(), OverlayState::Hidden);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DetailOverlay {
    state: OverlayState,
}

impl DetailOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> OverlayState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        matches!(self.state, OverlayState::Visible(_))
    }

    /// Id of the product being shown, if any.
    pub fn product_id(&self) -> Option<ProductId> {
        match self.state {
            OverlayState::Visible(id) => Some(id),
            OverlayState::Hidden => None,
        }
    }

    /// Resolve the shown product against the catalog.
    pub fn product<'a>(&self, catalog: &'a Catalog) -> Option<&'a Product> {
        self.product_id().and_then(|id| catalog.get(id))
    }

    /// Show the product with `id`.
    ///
    /// Returns `false` and leaves the state unchanged when the catalog has no
    /// such product.
    pub fn open(&mut self, catalog: &Catalog, id: ProductId) -> bool {
        if catalog.get(id).is_none() {
            return false;
        }
        self.state = OverlayState::Visible(id);
        true
    }

    /// Hide the overlay. Idempotent.
    pub fn close(&mut self) {
        self.state = OverlayState::Hidden;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_products([
            Product::new(1, "Lamp", "Desk lamp", "$10"),
            Product::new(2, "Chair", "Office chair", "$120"),
        ])
        .unwrap()
    }

    #[test]
    fn test_initially_hidden() {
        let overlay = DetailOverlay::new();
        assert_eq!(overlay.state(), OverlayState::Hidden);
        assert!(!overlay.is_visible());
        assert!(overlay.product_id().is_none());
    }

    #[test]
    fn test_open_valid_id() {
        let catalog = catalog();
        let mut overlay = DetailOverlay::new();
        assert!(overlay.open(&catalog, ProductId(2)));
        assert_eq!(overlay.state(), OverlayState::Visible(ProductId(2)));
        assert_eq!(overlay.product(&catalog).map(|p| p.title.as_str()), Some("Chair"));
    }

    #[test]
    fn test_open_missing_id_is_noop() {
        let catalog = catalog();
        let mut overlay = DetailOverlay::new();
        assert!(!overlay.open(&catalog, ProductId(999)));
        assert_eq!(overlay.state(), OverlayState::Hidden);

        overlay.open(&catalog, ProductId(1));
        assert!(!overlay.open(&catalog, ProductId(999)));
        assert_eq!(overlay.state(), OverlayState::Visible(ProductId(1)));
    }

    #[test]
    fn test_open_while_visible_switches_product() {
        let catalog = catalog();
        let mut overlay = DetailOverlay::new();
        overlay.open(&catalog, ProductId(1));
        overlay.open(&catalog, ProductId(2));
        assert_eq!(overlay.product_id(), Some(ProductId(2)));
    }

    #[test]
    fn test_close_is_idempotent() {
        let catalog = catalog();
        let mut overlay = DetailOverlay::new();
        overlay.close();
        assert_eq!(overlay.state(), OverlayState::Hidden);

        overlay.open(&catalog, ProductId(1));
        overlay.close();
        overlay.close();
        assert_eq!(overlay.state(), OverlayState::Hidden);
    }
}
