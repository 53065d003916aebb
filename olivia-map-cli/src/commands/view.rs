//! Map view.

use std::path::Path;

use olivia_map::config::ConfigFile;
use olivia_map::notify::TracingNotifier;
use olivia_map::view::MapView;

use super::common::{load_layout, print_json};
use crate::error::CliError;

/// Build the map view for a layout and print it.
pub fn run(layout_path: &Path, config: &ConfigFile) -> Result<(), CliError> {
    let layout = load_layout(layout_path)?;
    let view = MapView::build(&layout, &config.map, &TracingNotifier::new())?;
    print_json(&view)
}
