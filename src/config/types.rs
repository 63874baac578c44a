//! Configuration types for catalog-browser operations.
//!
//! Provides the file-backed [`AppConfig`] plus the per-command run
//! configurations built from it and the CLI flags.

use super::defaults::{CONFIG_DIR_NAME, DEFAULT_THEME, DEFAULT_TICK_RATE_MS};
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI flags are merged over the file values, see [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Catalog source
    pub catalog: CatalogConfig,
    /// Output configuration for `list` and `show`
    pub output: OutputConfig,
    /// TUI-specific configuration
    pub tui: TuiConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

// ============================================================================
// Sections
// ============================================================================

/// Where the product catalog comes from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct CatalogConfig {
    /// Catalog file used when no path is given on the command line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Output-related configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Disable colored output
    pub no_color: bool,
}

/// TUI-specific configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct TuiConfig {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
    /// Enable mouse support
    pub mouse_enabled: bool,
    /// Event poll interval in milliseconds
    #[schemars(range(min = 1))]
    pub tick_rate_ms: u64,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
            mouse_enabled: true,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
        }
    }
}

// ============================================================================
// TUI Preferences (persisted)
// ============================================================================

/// TUI preferences that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TuiPreferences {
    /// Theme name: "dark", "light", or "high-contrast"
    pub theme: String,
}

impl Default for TuiPreferences {
    fn default() -> Self {
        Self {
            theme: DEFAULT_THEME.to_string(),
        }
    }
}

impl TuiPreferences {
    /// Get the path to the preferences file.
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join(CONFIG_DIR_NAME).join("preferences.json"))
    }

    /// Load preferences from disk, or return `None` if there are none.
    #[must_use]
    pub fn load() -> Option<Self> {
        Self::config_path()
            .and_then(|p| std::fs::read_to_string(p).ok())
            .and_then(|s| serde_json::from_str(&s).ok())
    }

    /// Save preferences to disk.
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let json = serde_json::to_string_pretty(self)
                .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
            std::fs::write(path, json)?;
        }
        Ok(())
    }
}

// ============================================================================
// Command-specific Configuration Types
// ============================================================================

/// Configuration for the interactive browser
#[derive(Debug, Clone)]
pub struct BrowseConfig {
    /// Catalog file to load
    pub catalog_path: PathBuf,
    /// Search term applied before the first frame
    pub initial_search: Option<String>,
    /// Theme given with `--theme`; wins over the saved and configured themes
    pub theme: Option<String>,
    /// TUI settings
    pub tui: TuiConfig,
}

/// Configuration for printing one catalog page
#[derive(Debug, Clone)]
pub struct ListConfig {
    /// Catalog file to load
    pub catalog_path: PathBuf,
    /// Search term to filter by
    pub search: Option<String>,
    /// Requested page, clamped to the available range
    pub page: usize,
    /// Output configuration
    pub output: OutputConfig,
    /// Output file path (None for stdout)
    pub output_file: Option<PathBuf>,
}

/// Configuration for printing one product
#[derive(Debug, Clone)]
pub struct ShowConfig {
    /// Catalog file to load
    pub catalog_path: PathBuf,
    /// Product to print
    pub product_id: u32,
    /// Output configuration
    pub output: OutputConfig,
    /// Output file path (None for stdout)
    pub output_file: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.tui.theme, "dark");
        assert!(config.tui.mouse_enabled);
        assert_eq!(config.tui.tick_rate_ms, 250);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: AppConfig = serde_yaml::from_str("tui:\n  theme: light\n").unwrap();
        assert_eq!(config.tui.theme, "light");
        assert_eq!(config.tui.tick_rate_ms, DEFAULT_TICK_RATE_MS);
        assert!(config.tui.mouse_enabled);
    }

    #[test]
    fn test_preferences_json() {
        let prefs: TuiPreferences = serde_json::from_str(r#"{"theme":"high-contrast"}"#).unwrap();
        assert_eq!(prefs.theme, "high-contrast");
        assert_eq!(TuiPreferences::default().theme, "dark");
    }
}
