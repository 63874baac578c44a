//! catalog-browser: searchable, paginated product catalog browser
//!
//! Browse a static product catalog interactively, or print pages and
//! products for scripts.

#![allow(clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use catalog_browser::{
    cli::{self, EXIT_ERROR},
    config::{self, AppConfig, BrowseConfig, ConfigOverrides, ListConfig, ShowConfig, Validatable},
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "catalog-browser")]
#[command(version)]
#[command(about = "Searchable, paginated product catalog browser", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Success
    1  No products match the search / product not found
    3  Error occurred

EXAMPLES:
    # Browse a catalog interactively
    catalog-browser browse catalog.json

    # Start with a search applied
    catalog-browser browse catalog.yaml --search wireless

    # Print page 2 of the matches as JSON
    catalog-browser list catalog.json --search lamp --page 2 -o json

    # Show one product
    catalog-browser show catalog.json 42")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR")]
    no_color: bool,

    /// Config file (default: discovered .catalog-browser.yaml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

// ============================================================================
// Command argument structs
// ============================================================================

#[derive(Parser)]
struct BrowseArgs {
    /// Catalog file (JSON or YAML); defaults to `catalog.path` from the config
    catalog: Option<PathBuf>,

    /// Search term applied on start
    #[arg(short, long)]
    search: Option<String>,

    /// Disable mouse support
    #[arg(long)]
    no_mouse: bool,

    /// Color theme
    #[arg(long, value_parser = ["dark", "light", "high-contrast"])]
    theme: Option<String>,
}

#[derive(Parser)]
struct ListArgs {
    /// Catalog file (JSON or YAML); defaults to `catalog.path` from the config
    catalog: Option<PathBuf>,

    /// Only list products matching this term
    #[arg(short, long)]
    search: Option<String>,

    /// Page to print (clamped to the available pages)
    #[arg(short, long, default_value = "1")]
    page: usize,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Write to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Parser)]
struct ShowArgs {
    /// Catalog file (JSON or YAML)
    catalog: PathBuf,

    /// Product id
    id: u32,

    /// Output format
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Write to a file instead of stdout
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse a catalog in the interactive terminal UI
    Browse(BrowseArgs),

    /// Print one page of the catalog with its pagination controls
    List(ListArgs),

    /// Print the detail of one product
    Show(ShowArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .catalog-browser.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging. The TUI owns the terminal, so browse stays quiet
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else if matches!(cli.command, Commands::Browse(_)) {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .init();

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(EXIT_ERROR);
        }
    }
}

/// Config values the `browse` flags set explicitly.
fn browse_overrides(args: &BrowseArgs) -> ConfigOverrides {
    ConfigOverrides {
        theme: args.theme.clone(),
        no_mouse: args.no_mouse,
        ..ConfigOverrides::default()
    }
}

/// Config values the `-o` and `--no-color` flags set explicitly.
fn output_overrides(format: Option<ReportFormat>, no_color: bool) -> ConfigOverrides {
    ConfigOverrides {
        format,
        no_color,
        ..ConfigOverrides::default()
    }
}

/// Load the config file, layer the CLI overrides on top and report problems.
fn effective_config(path: Option<&std::path::Path>, overrides: &ConfigOverrides) -> AppConfig {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(path, overrides);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    for error in config.validate() {
        tracing::warn!("Invalid configuration: {error}");
    }
    config
}

fn resolve_catalog(explicit: Option<PathBuf>, config: &AppConfig) -> Result<PathBuf> {
    explicit.or_else(|| config.catalog.path.clone()).context(
        "no catalog file given; pass a path or set catalog.path in the config file",
    )
}

fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Browse(args) => {
            let config = effective_config(cli.config.as_deref(), &browse_overrides(&args));

            cli::run_browse(BrowseConfig {
                catalog_path: resolve_catalog(args.catalog, &config)?,
                initial_search: args.search,
                theme: args.theme,
                tui: config.tui,
            })
        }

        Commands::List(args) => {
            let overrides = output_overrides(args.output, cli.no_color);
            let config = effective_config(cli.config.as_deref(), &overrides);

            cli::run_list(ListConfig {
                catalog_path: resolve_catalog(args.catalog, &config)?,
                search: args.search,
                page: args.page,
                output: config.output,
                output_file: args.output_file,
            })
        }

        Commands::Show(args) => {
            let overrides = output_overrides(args.output, cli.no_color);
            let config = effective_config(cli.config.as_deref(), &overrides);

            cli::run_show(ShowConfig {
                catalog_path: args.catalog,
                product_id: args.id,
                output: config.output,
                output_file: args.output_file,
            })
        }

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "catalog-browser", &mut io::stdout());
            Ok(cli::EXIT_SUCCESS)
        }

        Commands::ConfigSchema { output } => {
            let schema =
                config::generate_json_schema().context("failed to serialize config schema")?;
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(cli::EXIT_SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(cli::EXIT_SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    ::dirs::config_dir()
                        .map(|p| p.join("catalog-browser").display().to_string()),
                    ::dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in &[
                    ".catalog-browser.yaml",
                    ".catalog-browser.yml",
                    "catalog-browser.yaml",
                    "catalog-browser.yml",
                ] {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(cli::EXIT_SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".catalog-browser.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(cli::EXIT_SUCCESS)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_list_args() {
        let cli = Cli::try_parse_from([
            "catalog-browser",
            "list",
            "shop.json",
            "--search",
            "lamp",
            "-p",
            "3",
            "-o",
            "json",
        ])
        .unwrap();
        let Commands::List(args) = cli.command else {
            panic!("expected list");
        };
        assert_eq!(args.catalog, Some(PathBuf::from("shop.json")));
        assert_eq!(args.search.as_deref(), Some("lamp"));
        assert_eq!(args.page, 3);
        assert_eq!(args.output, Some(ReportFormat::Json));
    }

    #[test]
    fn test_parse_show_args() {
        let cli = Cli::try_parse_from(["catalog-browser", "show", "shop.yaml", "42"]).unwrap();
        let Commands::Show(args) = cli.command else {
            panic!("expected show");
        };
        assert_eq!(args.id, 42);
        assert!(args.output.is_none());
    }

    #[test]
    fn test_theme_flag_overrides_config_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "tui:\n  theme: light\n").unwrap();

        let cli =
            Cli::try_parse_from(["catalog-browser", "browse", "shop.json", "--theme", "dark"])
                .unwrap();
        let Commands::Browse(args) = cli.command else {
            panic!("expected browse");
        };
        let (config, _) =
            AppConfig::from_file_with_overrides(Some(&config_path), &browse_overrides(&args));
        assert_eq!(config.tui.theme, "dark");
        assert!(config.tui.mouse_enabled);
    }

    #[test]
    fn test_output_flag_overrides_config_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");
        std::fs::write(&config_path, "output:\n  format: json\n").unwrap();

        let overrides = output_overrides(Some(ReportFormat::Text), false);
        let (config, _) = AppConfig::from_file_with_overrides(Some(&config_path), &overrides);
        assert_eq!(config.output.format, ReportFormat::Text);

        let (config, _) = AppConfig::from_file_with_overrides(
            Some(&config_path),
            &output_overrides(None, false),
        );
        assert_eq!(config.output.format, ReportFormat::Json);
    }

    #[test]
    fn test_resolve_catalog_falls_back_to_config() {
        let mut config = AppConfig::default();
        assert!(resolve_catalog(None, &config).is_err());
        config.catalog.path = Some(PathBuf::from("from-config.json"));
        assert_eq!(
            resolve_catalog(None, &config).unwrap(),
            PathBuf::from("from-config.json")
        );
        assert_eq!(
            resolve_catalog(Some(PathBuf::from("cli.json")), &config).unwrap(),
            PathBuf::from("cli.json")
        );
    }
}
