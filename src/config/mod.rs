//! Configuration module for catalog-browser.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Configuration File
//!
//! Place a `.catalog-browser.yaml` file in the current directory or
//! `~/.config/catalog-browser/`:
//!
//! ```yaml
//! catalog:
//!   path: ./catalog.json
//! tui:
//!   theme: light
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_THEME, DEFAULT_TICK_RATE_MS};
pub use types::{
    AppConfig, BrowseConfig, CatalogConfig, ListConfig, OutputConfig, ShowConfig, TuiConfig,
    TuiPreferences,
};
pub use validation::{ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_full_example_config, load_config_file, load_or_default,
    ConfigFileError, ConfigOverrides,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.catalog-browser.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_lists_sections() {
        let schema = generate_json_schema().unwrap();
        assert!(schema.contains("\"AppConfig\""));
        assert!(schema.contains("tick_rate_ms"));
        assert!(schema.contains("mouse_enabled"));
    }
}
