//! Common utilities shared across CLI commands.

use serde::Serialize;
use std::path::Path;

use olivia_map::layout::MapLayout;

use crate::error::CliError;

/// Read a layout JSON file.
pub fn load_layout(path: &Path) -> Result<MapLayout, CliError> {
    Ok(MapLayout::load_from(path)?)
}

/// Print a value to stdout as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
