//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::process;

use olivia_map::config::ConfigFileError;
use olivia_map::layer::ResolutionError;
use olivia_map::layout::LayoutError;
use olivia_map::view::ViewError;

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration file could not be read or written
    Config(ConfigFileError),
    /// Layout file could not be read
    Layout(LayoutError),
    /// Base layer did not resolve
    Layer(ResolutionError),
    /// Map view could not be built
    View(ViewError),
    /// Layout has no point layer at the requested index
    NoPointLayer { index: usize, count: usize },
    /// Failed to render command output
    Output(serde_json::Error),
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        // Print additional help for specific errors
        match self {
            CliError::Layer(ResolutionError::UnknownLayerId { .. })
            | CliError::View(ViewError::BaseLayer(ResolutionError::UnknownLayerId { .. })) => {
                eprintln!();
                eprintln!("Run 'olivia-map layers' to list the available base layer ids.");
            }
            CliError::Layer(ResolutionError::MissingCustomUrl)
            | CliError::View(ViewError::BaseLayer(ResolutionError::MissingCustomUrl)) => {
                eprintln!();
                eprintln!("A Custom base layer needs a tile URL template in baseLayer.customUrl,");
                eprintln!("e.g. https://tile.example.org/{{z}}/{{x}}/{{y}}.png");
            }
            CliError::Config(ConfigFileError::InvalidValue { .. }) => {
                eprintln!();
                eprintln!("Fix the value in config.ini, or run 'olivia-map config show' to");
                eprintln!("see the settings with their defaults.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(e) => write!(f, "Configuration error: {}", e),
            CliError::Layout(e) => write!(f, "{}", e),
            CliError::Layer(e) => write!(f, "Base layer error: {}", e),
            CliError::View(e) => write!(f, "Failed to build map view: {}", e),
            CliError::NoPointLayer { index, count } => write!(
                f,
                "No point layer at index {} (the layout defines {})",
                index, count
            ),
            CliError::Output(e) => write!(f, "Failed to render output: {}", e),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Config(e) => Some(e),
            CliError::Layout(e) => Some(e),
            CliError::Layer(e) => Some(e),
            CliError::View(e) => Some(e),
            CliError::Output(e) => Some(e),
            CliError::LoggingInit(_) | CliError::NoPointLayer { .. } => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::Config(e)
    }
}

impl From<LayoutError> for CliError {
    fn from(e: LayoutError) -> Self {
        CliError::Layout(e)
    }
}

impl From<ResolutionError> for CliError {
    fn from(e: ResolutionError) -> Self {
        CliError::Layer(e)
    }
}

impl From<ViewError> for CliError {
    fn from(e: ViewError) -> Self {
        CliError::View(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Output(e)
    }
}
