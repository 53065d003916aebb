//! Configuration settings structs.

use std::path::PathBuf;

use super::defaults::{default_log_directory, DEFAULT_INITIAL_ZOOM, DEFAULT_LAYER, DEFAULT_LOG_FILE};

/// Configuration loaded from config.ini.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigFile {
    /// Map view settings
    pub map: MapSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Map view configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct MapSettings {
    /// Catalog id of the base layer used when a layout names none
    pub default_layer: String,
    /// Zoom level the map opens at
    pub initial_zoom: u8,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct LoggingSettings {
    /// Directory the log file is written to
    pub directory: PathBuf,
    /// Log file name
    pub file: String,
}

impl Default for MapSettings {
    fn default() -> Self {
        Self {
            default_layer: DEFAULT_LAYER.to_string(),
            initial_zoom: DEFAULT_INITIAL_ZOOM,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            directory: default_log_directory(),
            file: DEFAULT_LOG_FILE.to_string(),
        }
    }
}

impl LoggingSettings {
    /// Full path of the log file.
    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.file)
    }
}
