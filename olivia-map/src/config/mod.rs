//! User configuration for olivia-map.
//!
//! Settings are read from `~/.olivia-map/config.ini`. A missing file yields the
//! defaults, so the library and CLI work without any setup.
//!
//! # Example
//!
//! ```
//! use olivia_map::config::{ConfigFile, DEFAULT_INITIAL_ZOOM};
//!
//! let config = ConfigFile::default();
//! assert_eq!(config.map.default_layer, "Open Street Map");
//! assert_eq!(config.map.initial_zoom, DEFAULT_INITIAL_ZOOM);
//! ```

mod defaults;
mod file;
mod parser;
mod settings;
mod writer;

pub use defaults::{
    default_log_directory, DEFAULT_INITIAL_ZOOM, DEFAULT_LAYER, DEFAULT_LOG_FILE, MAX_ZOOM,
};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use settings::{ConfigFile, LoggingSettings, MapSettings};
