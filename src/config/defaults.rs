//! Default values for catalog-browser configuration.

/// Theme used when neither the config file nor saved preferences name one.
pub const DEFAULT_THEME: &str = "dark";

/// Default event poll interval for the TUI, in milliseconds.
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

/// Directory name under the user config dir.
pub const CONFIG_DIR_NAME: &str = "catalog-browser";
