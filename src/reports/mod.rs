//! Non-interactive output for catalog pages and products.
//!
//! This module provides the output formats used by the `list` and `show`
//! commands:
//! - Text: card-style terminal output with optional ANSI colors
//! - JSON: structured data for programmatic integration

mod json;
mod text;
mod types;

pub use json::JsonReporter;
pub use text::TextReporter;
pub use types::{ControlEntry, PageReport, ReportConfig, ReportFormat};

use crate::model::Product;
use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render one page of the filtered catalog with its pagination bar
    fn generate_page_report(
        &self,
        page: &PageReport<'_>,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Render the full detail of one product
    fn generate_product_report(
        &self,
        product: &Product,
        config: &ReportConfig,
    ) -> Result<String, ReportError>;

    /// Write a page report to a writer
    fn write_page_report(
        &self,
        page: &PageReport<'_>,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_page_report(page, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Write a product report to a writer
    fn write_product_report(
        &self,
        product: &Product,
        config: &ReportConfig,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate_product_report(product, config)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => Box::new(TextReporter::new()),
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}
