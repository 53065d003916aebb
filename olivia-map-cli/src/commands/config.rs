//! Configuration management CLI commands.
//!
//! Provides `config init`, `config path` and `config show`.

use clap::Subcommand;
use std::path::Path;

use olivia_map::config::ConfigFile;

use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a config file with default settings if none exists
    Init,

    /// Show the configuration file path
    Path,

    /// Show the effective settings as config.ini text
    Show,
}

/// Run a config subcommand against the config file at `path`.
pub fn run(action: ConfigAction, path: &Path) -> Result<(), CliError> {
    match action {
        ConfigAction::Init => run_init(path),
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
        ConfigAction::Show => run_show(path),
    }
}

fn run_init(path: &Path) -> Result<(), CliError> {
    if path.exists() {
        println!("Config file already exists: {}", path.display());
        return Ok(());
    }

    ConfigFile::ensure_exists(path)?;
    println!("Created config file: {}", path.display());
    Ok(())
}

fn run_show(path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;
    print!("{}", config.to_config_string());
    Ok(())
}
