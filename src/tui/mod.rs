//! Interactive catalog browser using ratatui.
//!
//! # Architecture
//!
//! All state lives in [`App`]. Raw terminal events are mapped to
//! [`Action`]s by pure functions in `events`, and [`App::dispatch`] is the
//! single place that applies them. The view model in [`viewmodel`] has no
//! terminal dependency. Rendering rebuilds a [`HitMap`] every frame so mouse
//! clicks resolve against what was last drawn.

pub mod action;
mod app;
pub(crate) mod clipboard;
pub mod events;
pub mod hitmap;
pub mod state;
pub mod theme;
mod ui;
pub mod viewmodel;
pub mod views;
pub(crate) mod widgets;

// Theme exports
pub use theme::{
    colors, current_theme_name, set_theme, toggle_theme, ColorScheme, FooterHints, Styles, Theme,
};

pub use action::{Action, CardMove};
pub use app::App;
pub use events::{map_key, map_mouse, Event};
pub use hitmap::{ClickTarget, HitMap};
pub use state::{GridCursor, ListNavigation};
pub use ui::{render, run_tui};
pub use viewmodel::{CatalogView, DetailOverlay, OverlayState, PageControl};
