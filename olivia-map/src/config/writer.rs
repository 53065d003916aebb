//! INI serialization logic for converting `ConfigFile` → INI string.

use std::path::Path;

use super::defaults::MAX_ZOOM;
use super::settings::ConfigFile;
use crate::layer::catalog;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let layer_ids: Vec<&str> = catalog::BUILT_IN_LAYERS.iter().map(|l| l.id).collect();

    format!(
        r#"[map]
; Base layer used when a map object has no base layer configured.
; One of: {}
default_layer = {}
; Zoom level the map opens at (0-{})
initial_zoom = {}

[logging]
; Directory for the log file (cleared at the start of each run)
directory = {}
; Log file name
file = {}
"#,
        layer_ids.join(", "),
        config.map.default_layer,
        MAX_ZOOM,
        config.map.initial_zoom,
        path_to_string(&config.logging.directory),
        config.logging.file,
    )
}

/// Render a path for the config file, using `~` for the home directory.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_string_sections() {
        let content = to_config_string(&ConfigFile::default());

        assert!(content.contains("[map]"));
        assert!(content.contains("default_layer = Open Street Map"));
        assert!(content.contains("initial_zoom = 4"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("file = olivia-map.log"));
    }

    #[test]
    fn test_home_paths_use_tilde() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path_to_string(&home.join("logs")), "~/logs");
        }
        assert_eq!(path_to_string(&PathBuf::from("/tmp/logs")), "/tmp/logs");
    }
}
