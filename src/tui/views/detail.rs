//! Product detail overlay.

use super::cards::{heading, price_spans};
use crate::model::Product;
use crate::tui::action::Action;
use crate::tui::hitmap::HitMap;
use crate::tui::theme::{colors, Styles};
use crate::tui::widgets::{centered_rect, display_width};
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

const CLOSE_LABEL: &str = " ✕ Close ";
const BUY_LABEL: &str = " 🛒 Copy buy link ";

/// Full detail of one product.
pub fn detail_lines(product: &Product) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(heading(product), Styles::header_title()),
        Line::from(""),
        Line::from(price_spans(product)),
        Line::from(""),
        Line::styled(product.description.clone(), Styles::text()),
    ];

    if !product.features.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::styled("Features", Styles::card_title()));
        lines.extend(product.features.iter().map(|feature| {
            Line::from(vec![
                Span::styled("  ✓ ", Style::default().fg(colors().success)),
                Span::styled(feature.clone(), Styles::text()),
            ])
        }));
    }

    if !product.buy_link.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Buy: ", Styles::text_muted()),
            Span::styled(product.buy_link.clone(), Styles::link()),
        ]));
    }

    lines
}

/// Render the overlay for `product` over `area`.
///
/// Everything registered in the hit map before this call is covered; the
/// close and copy buttons are registered on top.
pub fn render_detail(frame: &mut Frame, area: Rect, product: &Product, hits: &mut HitMap) {
    let overlay_area = centered_rect(70, 70, area);
    frame.render_widget(Clear, overlay_area);
    hits.set_overlay(overlay_area);

    let block = Block::default()
        .title(format!(" Product #{} ", product.id))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Styles::border_focused())
        .style(Style::default().bg(colors().background_alt));
    let inner = block.inner(overlay_area);
    frame.render_widget(block, overlay_area);

    let [content, buttons] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    frame.render_widget(
        Paragraph::new(detail_lines(product)).wrap(Wrap { trim: false }),
        content,
    );

    let close_width = display_width(CLOSE_LABEL);
    let close_rect = Rect::new(
        buttons.right().saturating_sub(close_width),
        buttons.y,
        close_width.min(buttons.width),
        buttons.height,
    );
    frame.render_widget(
        Span::styled(CLOSE_LABEL, Style::default().fg(colors().badge_fg).bg(colors().error)),
        close_rect,
    );
    hits.register(close_rect, Action::CloseOverlay);

    if !product.buy_link.is_empty() {
        let buy_width = display_width(BUY_LABEL).min(close_rect.x.saturating_sub(buttons.x));
        let buy_rect = Rect::new(buttons.x, buttons.y, buy_width, buttons.height);
        frame.render_widget(
            Span::styled(BUY_LABEL, Style::default().fg(colors().badge_fg).bg(colors().success)),
            buy_rect,
        );
        hits.register(buy_rect, Action::CopyBuyLink);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::hitmap::ClickTarget;
    use ratatui::{backend::TestBackend, Terminal};

    fn product() -> Product {
        Product::new(7, "Kettle", "Boils water", "$40")
            .with_icon("🫖")
            .with_pricing("$50", "-20%")
            .with_features(["1.7 L", "Auto shut-off"])
            .with_buy_link("https://shop.test/kettle")
    }

    fn text(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_detail_lines_populated_from_product() {
        let lines = text(&detail_lines(&product()));
        assert_eq!(lines[0], "🫖 Kettle");
        assert_eq!(lines[2], "$40 $50  -20% ");
        assert_eq!(lines[4], "Boils water");
        assert!(lines.contains(&"Features".to_string()));
        assert!(lines.contains(&"  ✓ Auto shut-off".to_string()));
        assert_eq!(lines.last().map(String::as_str), Some("Buy: https://shop.test/kettle"));
    }

    #[test]
    fn test_detail_lines_skip_empty_sections() {
        let lines = text(&detail_lines(&Product::new(1, "Mug", "Ceramic", "$8")));
        assert_eq!(lines, ["Mug", "", "$8", "", "Ceramic"]);
    }

    #[test]
    fn test_render_registers_buttons_and_covers_grid() {
        let mut hits = HitMap::new();
        hits.register(Rect::new(0, 0, 100, 40), Action::OpenProduct(product().id));

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal
            .draw(|frame| render_detail(frame, frame.area(), &product(), &mut hits))
            .unwrap();

        let overlay = hits.overlay_area().unwrap();
        assert_eq!(hits.resolve(0, 0), ClickTarget::OutsideOverlay);
        // Bottom row inside the border holds the buttons
        let row = overlay.bottom() - 2;
        assert_eq!(
            hits.resolve(overlay.right() - 3, row),
            ClickTarget::Region(Action::CloseOverlay)
        );
        assert_eq!(
            hits.resolve(overlay.x + 2, row),
            ClickTarget::Region(Action::CopyBuyLink)
        );
        // The card underneath does not receive clicks through the overlay
        assert_eq!(hits.resolve(overlay.x + 5, overlay.y + 3), ClickTarget::Nothing);
    }
}
