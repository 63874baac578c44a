//! Mouse event mapping.
//!
//! Clicks are hit-tested against the regions the previous frame registered
//! in the app's [`HitMap`](crate::tui::hitmap::HitMap).

use crate::tui::action::Action;
use crate::tui::hitmap::ClickTarget;
use crate::tui::App;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

/// Translate a mouse event into an action.
#[must_use]
pub fn map_mouse(app: &App, mouse: MouseEvent) -> Option<Action> {
    if !app.mouse_enabled {
        return None;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            match app.hits.resolve(mouse.column, mouse.row) {
                ClickTarget::Region(action) => Some(action),
                ClickTarget::OutsideOverlay => Some(Action::CloseOverlay),
                ClickTarget::Nothing => None,
            }
        }
        // Right-click closes the overlay
        MouseEventKind::Down(MouseButton::Right) if app.overlay.is_visible() => {
            Some(Action::CloseOverlay)
        }
        MouseEventKind::ScrollDown if !app.overlay.is_visible() => Some(Action::NextPage),
        MouseEventKind::ScrollUp if !app.overlay.is_visible() => Some(Action::PrevPage),
        _ => None,
    }
}
