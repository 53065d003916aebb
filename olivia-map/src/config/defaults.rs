//! Default values for configuration settings.

use std::path::PathBuf;

use super::file::config_directory;

/// Base layer used when a layout has no `baseLayer` section.
pub const DEFAULT_LAYER: &str = "Open Street Map";

/// Zoom level the map opens at.
pub const DEFAULT_INITIAL_ZOOM: u8 = 4;

/// Highest zoom level the tile layers serve.
pub const MAX_ZOOM: u8 = 19;

/// Log file name inside the log directory.
pub const DEFAULT_LOG_FILE: &str = "olivia-map.log";

/// Default log directory (~/.olivia-map/logs).
pub fn default_log_directory() -> PathBuf {
    config_directory().join("logs")
}
