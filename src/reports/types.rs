//! Report types and configuration

use crate::model::{Catalog, Product};
use crate::tui::viewmodel::{CatalogView, PageControl};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for non-interactive reports
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Human-readable cards for the terminal
    #[default]
    Text,
    /// Structured JSON output
    Json,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for report generation
#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Emit ANSI colors (text format only)
    pub colored: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self { colored: true }
    }
}

/// One control of the pagination bar, flattened for output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ControlEntry {
    pub label: String,
    /// Page the control navigates to; `None` for ellipses and disabled buttons
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<usize>,
    pub active: bool,
    pub disabled: bool,
}

impl ControlEntry {
    fn from_control(control: &PageControl, current: usize) -> Self {
        let target = match *control {
            PageControl::Prev { disabled: false } => Some(current - 1),
            PageControl::Next { disabled: false } => Some(current + 1),
            PageControl::Page { number, .. } => Some(number),
            _ => None,
        };
        Self {
            label: control.label(),
            target,
            active: control.is_active(),
            disabled: control.is_disabled(),
        }
    }
}

/// A rendered page of the filtered catalog.
#[derive(Debug, Clone, Serialize)]
pub struct PageReport<'a> {
    pub search_term: &'a str,
    pub total_matches: usize,
    pub page: usize,
    pub page_count: usize,
    pub products: Vec<&'a Product>,
    pub controls: Vec<ControlEntry>,
}

impl<'a> PageReport<'a> {
    /// Snapshot the current page of `view`.
    #[must_use]
    pub fn from_view(catalog: &'a Catalog, view: &'a CatalogView) -> Self {
        let page = view.current_page();
        Self {
            search_term: view.search_term(),
            total_matches: view.filtered().len(),
            page,
            page_count: view.page_count(),
            products: view.visible_products(catalog).collect(),
            controls: view
                .controls()
                .iter()
                .map(|control| ControlEntry::from_control(control, page))
                .collect(),
        }
    }

    /// True when the search matched nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_matches == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(n: u32) -> Catalog {
        Catalog::from_products(
            (1..=n).map(|i| Product::new(i, format!("Item {i}"), "Thing", "$1")),
        )
        .unwrap()
    }

    #[test]
    fn test_page_report_snapshot() {
        let catalog = catalog(23);
        let mut view = CatalogView::new(&catalog);
        view.go_to_page(3);
        let report = PageReport::from_view(&catalog, &view);
        assert_eq!(report.page, 3);
        assert_eq!(report.page_count, 3);
        assert_eq!(report.products.len(), 5);
        assert_eq!(report.controls.first().map(|c| c.target), Some(Some(2)));
        let next = report.controls.last().unwrap();
        assert!(next.disabled);
        assert_eq!(next.target, None);
    }

    #[test]
    fn test_empty_report() {
        let catalog = catalog(3);
        let mut view = CatalogView::new(&catalog);
        view.apply_search(&catalog, "zzz");
        let report = PageReport::from_view(&catalog, &view);
        assert!(report.is_empty());
        assert!(report.controls.is_empty());
        assert!(report.products.is_empty());
    }

    #[test]
    fn test_format_display() {
        assert_eq!(ReportFormat::Text.to_string(), "text");
        assert_eq!(ReportFormat::Json.to_string(), "json");
    }
}
