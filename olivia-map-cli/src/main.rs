//! olivia-map CLI - Command-line interface
//!
//! Inspects map object layouts the way the map widget reads them: resolves
//! base layers, reads result cubes and builds the map view.

mod commands;
mod error;

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

use olivia_map::config::{config_file_path, ConfigFile};
use olivia_map::logging::{init_logging, LoggingGuard, DEFAULT_FILTER, VERBOSE_FILTER};

use commands::config::ConfigAction;
use error::CliError;

#[derive(Parser)]
#[command(name = "olivia-map")]
#[command(version = olivia_map::VERSION)]
#[command(about = "Inspect olivia-map layouts, base layers and result cubes", long_about = None)]
struct Cli {
    /// Config file to use (default: ~/.olivia-map/config.ini)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log debug output (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the base layer ids and CRS options
    Layers,

    /// Resolve a layout's base layer and print it as JSON
    Resolve {
        /// Layout JSON file
        #[arg(long)]
        layout: PathBuf,
    },

    /// Summarize a layout's result cube
    Inspect {
        /// Layout JSON file
        #[arg(long)]
        layout: PathBuf,

        /// Upper-case dimension and measure labels before printing
        #[arg(long)]
        upper_labels: bool,

        /// Print the cube payload as JSON instead of the summary
        #[arg(long)]
        payload: bool,
    },

    /// Build the map view for a layout and print it as JSON
    View {
        /// Layout JSON file
        #[arg(long)]
        layout: PathBuf,
    },

    /// Read a point layer's markers from its cube and print them as JSON
    Points {
        /// Layout JSON file defining the point layers
        #[arg(long)]
        layout: PathBuf,

        /// Index of the point layer in the layout
        #[arg(long, default_value_t = 0)]
        layer: usize,

        /// Layout JSON file holding the point layer's result cube
        #[arg(long)]
        cube: PathBuf,
    },

    /// Click the map at a position and print the pin update as JSON
    Click {
        /// Layout JSON file
        #[arg(long)]
        layout: PathBuf,

        /// Latitude of the click in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lat: f64,

        /// Longitude of the click in decimal degrees
        #[arg(long, allow_negative_numbers = true)]
        lng: f64,
    },

    /// Manage the configuration file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        e.exit();
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = cli.config.unwrap_or_else(config_file_path);
    let session = || Session::start(&config_path, cli.verbose);

    match cli.command {
        Commands::Layers => {
            let _session = session()?;
            commands::layers::run()
        }
        Commands::Resolve { layout } => {
            let _session = session()?;
            commands::resolve::run(&layout)
        }
        Commands::Inspect {
            layout,
            upper_labels,
            payload,
        } => {
            let _session = session()?;
            commands::inspect::run(&layout, upper_labels, payload)
        }
        Commands::View { layout } => {
            let session = session()?;
            commands::view::run(&layout, &session.config)
        }
        Commands::Points {
            layout,
            layer,
            cube,
        } => {
            let _session = session()?;
            commands::points::run(&layout, layer, &cube)
        }
        Commands::Click { layout, lat, lng } => {
            let session = session()?;
            commands::click::run(&layout, &session.config, lat, lng)
        }
        // Runs without logging so a broken config can still be inspected
        Commands::Config { action } => commands::config::run(action, &config_path),
    }
}

/// Loaded configuration plus the logging guard for one command run.
struct Session {
    config: ConfigFile,
    _logging_guard: LoggingGuard,
}

impl Session {
    fn start(config_path: &Path, verbose: bool) -> Result<Self, CliError> {
        let config = ConfigFile::load_from(config_path)?;
        let filter = if verbose {
            VERBOSE_FILTER
        } else {
            DEFAULT_FILTER
        };
        let logging_guard = init_logging(&config.logging.directory, &config.logging.file, filter)
            .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            config,
            _logging_guard: logging_guard,
        })
    }
}
