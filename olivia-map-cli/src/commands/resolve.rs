//! Base layer resolution.

use std::path::Path;

use olivia_map::layer::{resolve_and_notify, LayerConfig};
use olivia_map::notify::TracingNotifier;

use super::common::{load_layout, print_json};
use crate::error::CliError;

/// Resolve the layout's base layer and print the descriptor.
///
/// A layout without a base layer section resolves as an empty id, which is
/// reported like any other unknown id.
pub fn run(layout_path: &Path) -> Result<(), CliError> {
    let layout = load_layout(layout_path)?;
    let config = layout.base_layer.unwrap_or_else(|| LayerConfig::new(""));

    let descriptor = resolve_and_notify(&config, &TracingNotifier::new())?;
    print_json(&descriptor)
}
