//! **A searchable, paginated product catalog browser for the terminal.**
//!
//! `catalog-browser` loads a static product catalog (JSON or YAML) and lets
//! you filter it by a free-text query, page through the matches nine at a
//! time with a sliding window of page-number controls, and open any product
//! in a detail overlay. It powers both an interactive terminal UI and a
//! non-interactive CLI for printing pages and products.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: [`Product`] and the ordered, id-keyed [`Catalog`], plus
//!   catalog file loading with automatic format detection.
//! - **[`tui::viewmodel`]**: the terminal-free view state: the
//!   case-insensitive filter, page arithmetic and the sliding page window,
//!   the [`CatalogView`] that owns the filtered set and current page, and
//!   the [`DetailOverlay`] state machine.
//! - **[`tui`]**: the interactive browser. Every key press and mouse click
//!   becomes an [`Action`] applied by [`App::dispatch`].
//! - **[`reports`]**: text and JSON output of a page or a product.
//! - **[`config`]**: YAML config file discovery, validation and merging.
//!
//! ## Getting Started
//!
//! ```no_run
//! use std::path::Path;
//! use catalog_browser::{load_catalog, CatalogView};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let catalog = load_catalog(Path::new("catalog.json"))?;
//!     let mut view = CatalogView::new(&catalog);
//!
//!     view.apply_search(&catalog, "wireless");
//!     view.next_page();
//!
//!     println!("page {} of {}", view.current_page(), view.page_count());
//!     for product in view.visible_products(&catalog) {
//!         println!("{} {}", product.title, product.price);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Driving the App without a terminal
//!
//! ```
//! use catalog_browser::{Action, App, Catalog, OverlayState, Product, ProductId};
//!
//! let catalog = Catalog::from_products(
//!     (1..=23).map(|i| Product::new(i, format!("Item {i}"), "A thing", "$1")),
//! )
//! .unwrap();
//! let mut app = App::new(catalog);
//!
//! app.dispatch(Action::LastPage);
//! assert_eq!(app.view.current_page(), 3);
//!
//! app.dispatch(Action::OpenProduct(ProductId(999)));
//! assert_eq!(app.overlay.state(), OverlayState::Hidden);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize/u16/u32 casts in TUI layout math are bounded in practice
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // TUI render functions are inherently long
    clippy::too_many_lines,
    clippy::module_name_repetitions
)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod reports;
pub mod tui;

// Re-export main types for convenience
pub use config::{AppConfig, ConfigError, OutputConfig, TuiConfig, Validatable};
pub use config::{BrowseConfig, ListConfig, ShowConfig};
pub use error::{CatalogError, ParseErrorKind, Result};
pub use model::{load_catalog, parse_catalog_str, Catalog, CatalogFormat, Product, ProductId};
pub use reports::{ReportFormat, ReportGenerator};

pub use tui::viewmodel::{
    filter_products, page_controls, page_count, page_range, page_window, CatalogView,
    DetailOverlay, OverlayState, PageControl, SearchState, StatusMessage, MAX_VISIBLE_PAGES,
    PAGE_SIZE,
};
pub use tui::{Action, App, CardMove, ListNavigation};
