//! User intents the input layer can produce.
//!
//! Key presses, mouse clicks and pagination controls all resolve to an
//! [`Action`]; `App::dispatch` is the only place that turns one into a state
//! change.

use crate::model::ProductId;

/// Direction for moving the card cursor inside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardMove {
    Left,
    Right,
    Up,
    Down,
}

/// A single state transition request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Focus the search box, keeping the current term
    StartSearch,
    /// Leave the search box, keeping the current term
    StopSearch,
    /// Append a character to the search term and re-filter
    SearchPush(char),
    /// Remove the last character of the search term and re-filter
    SearchPop,
    /// Replace the search term and re-filter
    SetSearch(String),
    /// Empty the search term and re-filter
    ClearSearch,

    PrevPage,
    NextPage,
    GoToPage(usize),
    FirstPage,
    LastPage,

    /// Move the card cursor
    MoveSelection(CardMove),
    /// Open the overlay for the card under the cursor
    OpenSelected,
    /// Open the overlay for a specific product
    OpenProduct(ProductId),
    /// Hide the overlay (close button, outside click, Esc)
    CloseOverlay,
    /// Copy the open product's buy link to the clipboard
    CopyBuyLink,

    ToggleTheme,
    Quit,
}
