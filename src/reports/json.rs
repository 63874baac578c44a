//! JSON report generator.

use super::{PageReport, ReportConfig, ReportError, ReportFormat, ReportGenerator};
use crate::model::Product;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn to_json<T: Serialize>(&self, value: &T) -> Result<String, ReportError> {
        let mut json = if self.pretty {
            serde_json::to_string_pretty(value)
        } else {
            serde_json::to_string(value)
        }
        .map_err(|e| ReportError::SerializationError(e.to_string()))?;
        json.push('\n');
        Ok(json)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

const TOOL: ToolInfo = ToolInfo {
    name: env!("CARGO_PKG_NAME"),
    version: env!("CARGO_PKG_VERSION"),
};

#[derive(Serialize)]
struct JsonPageReport<'a> {
    tool: ToolInfo,
    #[serde(flatten)]
    page: &'a PageReport<'a>,
}

#[derive(Serialize)]
struct JsonProductReport<'a> {
    tool: ToolInfo,
    product: &'a Product,
}

impl ReportGenerator for JsonReporter {
    fn generate_page_report(
        &self,
        page: &PageReport<'_>,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.to_json(&JsonPageReport { tool: TOOL, page })
    }

    fn generate_product_report(
        &self,
        product: &Product,
        _config: &ReportConfig,
    ) -> Result<String, ReportError> {
        self.to_json(&JsonProductReport {
            tool: TOOL,
            product,
        })
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}
