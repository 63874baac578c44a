//! Event handling for the TUI.
//!
//! This module provides event handling for the TUI, including:
//! - Key and mouse event polling
//! - Mapping raw events to [`Action`]s, without touching state
//!
//! The mapping functions are pure so bindings can be tested without a
//! terminal; `App::dispatch` applies the result.

pub mod mouse;

use super::action::{Action, CardMove};
use super::App;
use crossterm::event::{
    self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEvent,
};
use std::time::Duration;

pub use mouse::map_mouse;

/// Application event
#[derive(Debug)]
pub enum Event {
    /// Key press event
    Key(KeyEvent),
    /// Mouse event
    Mouse(MouseEvent),
    /// Terminal tick (for status expiry)
    Tick,
    /// Resize event
    Resize(u16, u16),
}

/// Event handler
pub struct EventHandler {
    /// Tick rate in milliseconds
    tick_rate: Duration,
}

impl EventHandler {
    /// Create a new event handler
    pub const fn new(tick_rate: u64) -> Self {
        Self {
            tick_rate: Duration::from_millis(tick_rate),
        }
    }

    /// Poll for the next event
    pub fn next(&self) -> Result<Event, std::io::Error> {
        if event::poll(self.tick_rate)? {
            match event::read()? {
                // Windows reports releases too
                CrosstermEvent::Key(key) if key.kind != KeyEventKind::Release => Ok(Event::Key(key)),
                CrosstermEvent::Mouse(mouse) => Ok(Event::Mouse(mouse)),
                CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
                _ => Ok(Event::Tick),
            }
        } else {
            Ok(Event::Tick)
        }
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_TICK_RATE_MS)
    }
}

/// Handle key events and update app state
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    if let Some(action) = map_key(app, key) {
        app.dispatch(action);
    }
}

/// Handle mouse events and update app state
pub fn handle_mouse_event(app: &mut App, mouse: MouseEvent) {
    if let Some(action) = map_mouse(app, mouse) {
        app.dispatch(action);
    }
}

/// Translate a key press into an action for the current mode.
///
/// The overlay is modal: while it is open only its own keys apply. While
/// the search box has focus, printable characters edit the term.
#[must_use]
pub fn map_key(app: &App, key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if app.overlay.is_visible() {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('q' | 'x') => Some(Action::CloseOverlay),
            KeyCode::Char('y') => Some(Action::CopyBuyLink),
            KeyCode::Char('t') => Some(Action::ToggleTheme),
            _ => None,
        };
    }

    if app.search.active {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::StopSearch),
            KeyCode::Backspace => Some(Action::SearchPop),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::ClearSearch)
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(Action::SearchPush(c))
            }
            _ => None,
        };
    }

    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Esc if !app.search.is_empty() => Some(Action::ClearSearch),
        KeyCode::Char('/') => Some(Action::StartSearch),
        KeyCode::Left | KeyCode::Char('h') => Some(Action::MoveSelection(CardMove::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Action::MoveSelection(CardMove::Right)),
        KeyCode::Up | KeyCode::Char('k') => Some(Action::MoveSelection(CardMove::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Action::MoveSelection(CardMove::Down)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::OpenSelected),
        KeyCode::Char('n') | KeyCode::PageDown => Some(Action::NextPage),
        KeyCode::Char('p') | KeyCode::PageUp => Some(Action::PrevPage),
        KeyCode::Home | KeyCode::Char('g') => Some(Action::FirstPage),
        KeyCode::End | KeyCode::Char('G') => Some(Action::LastPage),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Action::GoToPage(digit as usize)),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        _ => None,
    }
}
