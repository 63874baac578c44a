//! Views for the catalog browser.

mod cards;
mod detail;
mod pagination;

pub use cards::{card_lines, render_grid};
pub use detail::{detail_lines, render_detail};
pub use pagination::{layout_controls, render_pagination};
