//! Text filtering of the catalog.
//!
//! Matching is a case-insensitive, unanchored substring test against the
//! title, the description and every feature string. There is no tokenizing
//! and no ranking; the result keeps catalog order.

use crate::model::Catalog;

/// Return the catalog positions of every product matching `term`.
///
/// An empty term matches the whole catalog.
#[must_use]
pub fn filter_products(catalog: &Catalog, term: &str) -> Vec<usize> {
    let term_lower = term.to_lowercase();
    catalog
        .iter()
        .enumerate()
        .filter(|(_, product)| product.matches(&term_lower))
        .map(|(index, _)| index)
        .collect()
}
