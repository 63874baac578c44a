//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler implements the business logic for a specific CLI subcommand
//! and returns the process exit code.

mod browse;
mod list;
mod output;
mod show;

pub use browse::run_browse;
pub use list::run_list;
pub use output::{should_use_color, write_output, OutputTarget};
pub use show::run_show;

// Re-export config types used by handlers
pub use crate::config::{BrowseConfig, ListConfig, ShowConfig};

/// Command succeeded.
pub const EXIT_SUCCESS: i32 = 0;
/// The search matched nothing, or the requested product does not exist.
pub const EXIT_NOT_FOUND: i32 = 1;
/// An error occurred.
pub const EXIT_ERROR: i32 = 3;
