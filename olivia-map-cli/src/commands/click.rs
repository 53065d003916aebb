//! Pin update for a map click.

use std::path::Path;

use olivia_map::config::ConfigFile;
use olivia_map::coord::LatLng;
use olivia_map::notify::TracingNotifier;
use olivia_map::view::MapView;

use super::common::{load_layout, print_json};
use crate::error::CliError;

/// Click the layout's map at `lat`/`lng` and print the resulting pin update,
/// including the app variable assignments it triggers.
pub fn run(layout_path: &Path, config: &ConfigFile, lat: f64, lng: f64) -> Result<(), CliError> {
    let layout = load_layout(layout_path)?;
    let view = MapView::build(&layout, &config.map, &TracingNotifier::new())?;

    let mut pin = view.pin_controller();
    let update = pin.click(LatLng::new(lat, lng));
    print_json(&update)
}
