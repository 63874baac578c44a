//! Selection state shared by list-like views.
//!
//! The card grid is a list laid out in rows; [`GridCursor`] adds row moves on
//! top of the plain [`ListNavigation`] behavior.

use crate::tui::action::CardMove;

/// Trait for list-based navigation state.
pub trait ListNavigation {
    /// Get the current selection index.
    fn selected(&self) -> usize;

    /// Set the selection index.
    fn set_selected(&mut self, idx: usize);

    /// Get the total number of items.
    fn total(&self) -> usize;

    /// Set the total number of items.
    fn set_total(&mut self, total: usize);

    /// Move selection to the next item.
    fn select_next(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total > 0 && selected < total.saturating_sub(1) {
            self.set_selected(selected + 1);
        }
    }

    /// Move selection to the previous item.
    fn select_prev(&mut self) {
        let selected = self.selected();
        if selected > 0 {
            self.set_selected(selected - 1);
        }
    }

    /// Ensure selection is within valid bounds.
    fn clamp_selection(&mut self) {
        let total = self.total();
        let selected = self.selected();
        if total == 0 {
            self.set_selected(0);
        } else if selected >= total {
            self.set_selected(total.saturating_sub(1));
        }
    }

    /// Move to the first item.
    fn go_first(&mut self) {
        self.set_selected(0);
    }
}

/// Cursor over a row-major grid of `total` cells, `columns` wide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridCursor {
    pub selected: usize,
    pub total: usize,
    pub columns: usize,
}

impl GridCursor {
    #[must_use]
    pub const fn new(columns: usize) -> Self {
        Self {
            selected: 0,
            total: 0,
            columns,
        }
    }

    /// Apply a directional move. Moves that would leave the grid are ignored.
    pub fn apply(&mut self, direction: CardMove) {
        match direction {
            CardMove::Left => self.select_prev(),
            CardMove::Right => self.select_next(),
            CardMove::Up => {
                if self.selected >= self.columns {
                    self.selected -= self.columns;
                }
            }
            CardMove::Down => {
                if self.selected + self.columns < self.total {
                    self.selected += self.columns;
                }
            }
        }
    }
}

impl ListNavigation for GridCursor {
    fn selected(&self) -> usize {
        self.selected
    }

    fn set_selected(&mut self, idx: usize) {
        self.selected = idx;
    }

    fn total(&self) -> usize {
        self.total
    }

    fn set_total(&mut self, total: usize) {
        self.total = total;
        self.clamp_selection();
    }
}
