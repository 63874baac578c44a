//! Browse command handler.
//!
//! Implements the `browse` subcommand: the interactive catalog TUI.

use super::EXIT_SUCCESS;
use crate::config::{BrowseConfig, TuiPreferences, DEFAULT_TICK_RATE_MS};
use crate::model::load_catalog;
use crate::tui::{run_tui, set_theme, App, Theme};
use anyhow::{Context, Result};

/// Pick the start-up theme: `--theme`, then the theme saved by a previous
/// session, then the configured one.
fn resolve_theme(flag: Option<&str>, saved: Option<TuiPreferences>, configured: &str) -> String {
    flag.map(str::to_string)
        .or_else(|| saved.map(|prefs| prefs.theme))
        .unwrap_or_else(|| configured.to_string())
}

/// Run the browse command
#[allow(clippy::needless_pass_by_value)]
pub fn run_browse(config: BrowseConfig) -> Result<i32> {
    let catalog = load_catalog(&config.catalog_path)
        .with_context(|| format!("Failed to load catalog {}", config.catalog_path.display()))?;

    let theme = resolve_theme(
        config.theme.as_deref(),
        TuiPreferences::load(),
        &config.tui.theme,
    );
    set_theme(Theme::from_name(&theme));

    let title = config
        .catalog_path
        .file_stem()
        .map_or_else(|| "Catalog".to_string(), |stem| stem.to_string_lossy().into_owned());

    let mut app = App::new(catalog).with_title(title);
    app.mouse_enabled = config.tui.mouse_enabled;
    app.persist_theme = true;
    if let Some(term) = config.initial_search {
        app = app.with_search(term);
    }

    let tick_rate = if config.tui.tick_rate_ms == 0 {
        DEFAULT_TICK_RATE_MS
    } else {
        config.tui.tick_rate_ms
    };
    run_tui(&mut app, tick_rate).context("Terminal UI failed")?;

    Ok(EXIT_SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(theme: &str) -> Option<TuiPreferences> {
        Some(TuiPreferences {
            theme: theme.to_string(),
        })
    }

    #[test]
    fn test_flag_beats_saved_preference() {
        assert_eq!(resolve_theme(Some("dark"), saved("light"), "high-contrast"), "dark");
    }

    #[test]
    fn test_saved_preference_beats_config() {
        assert_eq!(resolve_theme(None, saved("light"), "high-contrast"), "light");
    }

    #[test]
    fn test_config_theme_without_flag_or_preference() {
        assert_eq!(resolve_theme(None, None, "high-contrast"), "high-contrast");
    }
}
