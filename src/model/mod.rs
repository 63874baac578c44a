//! Catalog data model.
//!
//! Products are loaded once from a catalog document and never change for the
//! rest of the session. [`Catalog`] keeps them in document order and answers
//! id lookups.

mod catalog;
mod product;

pub use catalog::{load_catalog, parse_catalog_str, Catalog, CatalogFormat};
pub use product::{Product, ProductId};
