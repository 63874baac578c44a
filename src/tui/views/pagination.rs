//! Pagination bar.
//!
//! Draws the controls produced by `page_controls` on one row and registers
//! each clickable control in the hit map.

use crate::tui::hitmap::HitMap;
use crate::tui::theme::{colors, Styles};
use crate::tui::viewmodel::PageControl;
use crate::tui::widgets::display_width;
use ratatui::prelude::*;

/// Cells between two controls.
const GAP: u16 = 1;

fn control_text(control: &PageControl) -> String {
    format!(" {} ", control.label())
}

fn control_style(control: &PageControl) -> Style {
    match control {
        PageControl::Page { active: true, .. } => Styles::selected(),
        PageControl::Page { .. } => Style::default().fg(colors().accent),
        PageControl::Ellipsis => Styles::text_muted(),
        PageControl::Prev { disabled } | PageControl::Next { disabled } => {
            if *disabled {
                Style::default().fg(colors().muted)
            } else {
                Style::default().fg(colors().primary).bold()
            }
        }
    }
}

/// Horizontal placement of each control, centered in `area`.
///
/// Controls that do not fit are dropped from the right.
pub fn layout_controls(controls: &[PageControl], area: Rect) -> Vec<Rect> {
    let widths: Vec<u16> = controls
        .iter()
        .map(|control| display_width(&control_text(control)))
        .collect();
    let gaps = GAP.saturating_mul(u16::try_from(widths.len().saturating_sub(1)).unwrap_or(0));
    let total = widths.iter().fold(gaps, |acc, w| acc.saturating_add(*w));

    let mut x = area.x + area.width.saturating_sub(total) / 2;
    let right = area.x.saturating_add(area.width);
    let mut rects = Vec::with_capacity(widths.len());
    for width in widths {
        if x.saturating_add(width) > right {
            break;
        }
        rects.push(Rect::new(x, area.y, width, area.height.min(1)));
        x = x.saturating_add(width + GAP);
    }
    rects
}

/// Render the pagination bar. Nothing is drawn for an empty control list.
pub fn render_pagination(frame: &mut Frame, area: Rect, controls: &[PageControl], hits: &mut HitMap) {
    for (control, rect) in controls.iter().zip(layout_controls(controls, area)) {
        frame.render_widget(
            Span::styled(control_text(control), control_style(control)),
            rect,
        );
        if let Some(action) = control.action() {
            hits.register(rect, action);
        }
    }
}
