//! Show command handler.
//!
//! Implements the `show` subcommand: prints the full detail of one product,
//! the same content the detail overlay displays.

use super::output::{should_use_color, write_output, OutputTarget};
use super::{EXIT_NOT_FOUND, EXIT_SUCCESS};
use crate::config::ShowConfig;
use crate::model::{load_catalog, ProductId};
use crate::reports::{create_reporter, ReportConfig, ReportFormat};
use anyhow::{Context, Result};

/// Run the show command
#[allow(clippy::needless_pass_by_value)]
pub fn run_show(config: ShowConfig) -> Result<i32> {
    let catalog = load_catalog(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;

    let id = ProductId(config.product_id);
    let Some(product) = catalog.get(id) else {
        tracing::debug!(%id, "product lookup missed");
        eprintln!(
            "No product with id {id} in {}",
            config.catalog_path.display()
        );
        return Ok(EXIT_NOT_FOUND);
    };

    let target = OutputTarget::from_option(config.output_file.clone());
    let report_config = ReportConfig {
        colored: config.output.format == ReportFormat::Text
            && should_use_color(config.output.no_color)
            && target.is_terminal(),
    };

    let reporter = create_reporter(config.output.format);
    let content = reporter.generate_product_report(product, &report_config)?;
    write_output(&content, &target)?;

    Ok(EXIT_SUCCESS)
}
