//! Product cards and the card grid.

use crate::model::{Catalog, Product};
use crate::tui::action::Action;
use crate::tui::hitmap::HitMap;
use crate::tui::theme::Styles;
use crate::tui::viewmodel::{CatalogView, GRID_COLUMNS, PAGE_SIZE};
use crate::tui::widgets::truncate_str;
use ratatui::{
    prelude::*,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

const GRID_ROWS: usize = PAGE_SIZE / GRID_COLUMNS;

/// Price, crossed-out compare price and discount badge, skipping empty parts.
pub fn price_spans(product: &Product) -> Vec<Span<'static>> {
    let mut spans = vec![Span::styled(product.price.clone(), Styles::price())];
    if !product.compare_price.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            product.compare_price.clone(),
            Styles::compare_price(),
        ));
    }
    if !product.discount.is_empty() {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!(" {} ", product.discount),
            Styles::discount_badge(),
        ));
    }
    spans
}

/// Heading with the icon in front of the title.
pub fn heading(product: &Product) -> String {
    if product.icon.is_empty() {
        product.title.clone()
    } else {
        format!("{} {}", product.icon, product.title)
    }
}

/// Display fragment for one product card.
pub fn card_lines(product: &Product) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::styled(heading(product), Styles::card_title()),
        Line::styled(product.description.clone(), Styles::text_muted()),
        Line::from(price_spans(product)),
    ];
    lines.extend(
        product
            .features
            .iter()
            .map(|feature| Line::styled(format!("• {feature}"), Styles::text())),
    );
    lines
}

/// Cell rectangles for a full page, row-major.
fn grid_cells(area: Rect) -> Vec<Rect> {
    let row_constraints = [Constraint::Ratio(1, GRID_ROWS as u32); GRID_ROWS];
    let col_constraints = [Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS];

    Layout::vertical(row_constraints)
        .split(area)
        .iter()
        .flat_map(|row| Layout::horizontal(col_constraints).split(*row).to_vec())
        .collect()
}

/// Render the visible page as a 3x3 grid and register each card as a click
/// target that opens its detail.
pub fn render_grid(
    frame: &mut Frame,
    area: Rect,
    catalog: &Catalog,
    view: &CatalogView,
    hits: &mut HitMap,
) {
    let cells = grid_cells(area);

    for (index, (product, cell)) in view.visible_products(catalog).zip(cells).enumerate() {
        let selected = index == view.selected();
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(if selected {
                Styles::border_focused()
            } else {
                Styles::border()
            })
            .title(Span::styled(format!(" #{} ", product.id), Styles::text_muted()));

        // The heading stays on one line; the rest wraps
        let mut lines = card_lines(product);
        let inner_width = usize::from(block.inner(cell).width);
        lines[0] = Line::styled(truncate_str(&heading(product), inner_width), Styles::card_title());

        let card = Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: true });
        frame.render_widget(card, cell);
        hits.register(cell, Action::OpenProduct(product.id));
    }
}
