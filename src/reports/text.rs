//! Plain-text report generator for shell output.
//!
//! Renders the same cards and pagination bar as the TUI, one card per block.

use super::{PageReport, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::Product;
use std::fmt::Write as _;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored && !text.is_empty() {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "cyan" => format!("\x1b[36m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            "strike" => format!("\x1b[9m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Text reporter for shell output
pub struct TextReporter;

impl TextReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    fn pricing_line(product: &Product, colored: bool) -> String {
        let parts = [
            ansi_color(&product.price, "green", colored),
            ansi_color(&product.compare_price, "strike", colored),
            ansi_color(&product.discount, "red", colored),
        ];
        parts
            .iter()
            .filter(|part| !part.is_empty())
            .cloned()
            .collect::<Vec<_>>()
            .join("  ")
    }

    fn write_card(out: &mut String, product: &Product, colored: bool) -> std::fmt::Result {
        let heading = if product.icon.is_empty() {
            product.title.clone()
        } else {
            format!("{} {}", product.icon, product.title)
        };
        writeln!(
            out,
            "{} {}",
            ansi_color(&format!("#{}", product.id), "dim", colored),
            ansi_color(&heading, "bold", colored)
        )?;
        writeln!(out, "  {}", product.description)?;
        writeln!(out, "  {}", Self::pricing_line(product, colored))?;
        for feature in &product.features {
            writeln!(out, "  • {feature}")?;
        }
        Ok(())
    }

    fn controls_line(page: &PageReport<'_>, colored: bool) -> String {
        page.controls
            .iter()
            .map(|control| {
                if control.target.is_none() && !control.disabled {
                    control.label.clone()
                } else if control.active {
                    ansi_color(&format!("[{}]", control.label), "cyan", colored)
                } else if control.disabled {
                    ansi_color(&format!("({})", control.label), "dim", colored)
                } else {
                    format!(" {} ", control.label)
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl Default for TextReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for TextReporter {
    fn generate_page_report(
        &self,
        page: &PageReport<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let colored = config.colored;
        let mut out = String::new();

        if page.is_empty() {
            writeln!(
                out,
                "{}",
                ansi_color("No products match your search.", "bold", colored)
            )?;
            if !page.search_term.is_empty() {
                writeln!(out, "Search: \"{}\"", page.search_term)?;
            }
            return Ok(out);
        }

        let matches = if page.search_term.is_empty() {
            format!("{} products", page.total_matches)
        } else {
            format!("{} matches for \"{}\"", page.total_matches, page.search_term)
        };
        writeln!(
            out,
            "{}  (page {} of {})",
            ansi_color(&matches, "bold", colored),
            page.page,
            page.page_count
        )?;
        writeln!(out)?;

        for product in &page.products {
            Self::write_card(&mut out, product, colored)?;
            writeln!(out)?;
        }

        if !page.controls.is_empty() {
            writeln!(out, "{}", Self::controls_line(page, colored))?;
        }

        Ok(out)
    }

    fn generate_product_report(
        &self,
        product: &Product,
        config: &ReportConfig,
    ) -> Result<String, ReportError> {
        let colored = config.colored;
        let mut out = String::new();
        Self::write_card(&mut out, product, colored)?;
        if !product.buy_link.is_empty() {
            writeln!(out)?;
            writeln!(out, "  Buy: {}", ansi_color(&product.buy_link, "cyan", colored))?;
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
