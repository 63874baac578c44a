//! List command handler.
//!
//! Implements the `list` subcommand: prints one page of the (optionally
//! filtered) catalog together with its pagination controls.

use super::output::{should_use_color, write_output, OutputTarget};
use super::{EXIT_NOT_FOUND, EXIT_SUCCESS};
use crate::config::ListConfig;
use crate::model::load_catalog;
use crate::reports::{create_reporter, PageReport, ReportConfig, ReportFormat};
use crate::tui::viewmodel::CatalogView;
use anyhow::{Context, Result};

/// Run the list command
#[allow(clippy::needless_pass_by_value)]
pub fn run_list(config: ListConfig) -> Result<i32> {
    let catalog = load_catalog(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;

    let mut view = CatalogView::new(&catalog);
    if let Some(ref term) = config.search {
        view.apply_search(&catalog, term);
    }
    if config.page > view.page_count() && !view.is_empty() {
        tracing::debug!(
            requested = config.page,
            pages = view.page_count(),
            "requested page out of range, clamping"
        );
    }
    view.go_to_page(config.page);

    let page = PageReport::from_view(&catalog, &view);
    let target = OutputTarget::from_option(config.output_file.clone());
    let report_config = ReportConfig {
        colored: config.output.format == ReportFormat::Text
            && should_use_color(config.output.no_color)
            && target.is_terminal(),
    };

    let reporter = create_reporter(config.output.format);
    let content = reporter.generate_page_report(&page, &report_config)?;
    write_output(&content, &target)?;

    Ok(if page.is_empty() {
        EXIT_NOT_FOUND
    } else {
        EXIT_SUCCESS
    })
}
