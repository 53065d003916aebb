//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::PathBuf;

use super::defaults::MAX_ZOOM;
use super::file::ConfigFileError;
use super::settings::ConfigFile;
use crate::layer::catalog;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [map] section
    if let Some(section) = ini.section(Some("map")) {
        if let Some(v) = section.get("default_layer") {
            let v = v.trim();
            if catalog::find(v).is_none() {
                return Err(ConfigFileError::InvalidValue {
                    section: "map".to_string(),
                    key: "default_layer".to_string(),
                    value: v.to_string(),
                    reason: format!("must be one of: {}", built_in_ids().join(", ")),
                });
            }
            config.map.default_layer = v.to_string();
        }
        if let Some(v) = section.get("initial_zoom") {
            config.map.initial_zoom = v
                .trim()
                .parse::<u8>()
                .ok()
                .filter(|zoom| *zoom <= MAX_ZOOM)
                .ok_or_else(|| ConfigFileError::InvalidValue {
                    section: "map".to_string(),
                    key: "initial_zoom".to_string(),
                    value: v.to_string(),
                    reason: format!("must be an integer between 0 and {}", MAX_ZOOM),
                })?;
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.directory = expand_tilde(v);
            }
        }
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = v.to_string();
            }
        }
    }

    Ok(config)
}

fn built_in_ids() -> Vec<&'static str> {
    catalog::BUILT_IN_LAYERS.iter().map(|layer| layer.id).collect()
}

/// Expand ~ to home directory in paths.
pub(super) fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LAYER;
    use tempfile::TempDir;

    fn load(content: &str) -> Result<ConfigFile, ConfigFileError> {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.ini");
        std::fs::write(&config_path, content).unwrap();
        ConfigFile::load_from(&config_path)
    }

    #[test]
    fn test_partial_config() {
        let config = load(
            r#"
[map]
initial_zoom = 12
"#,
        )
        .unwrap();

        assert_eq!(config.map.initial_zoom, 12);
        assert_eq!(config.map.default_layer, DEFAULT_LAYER);
    }

    #[test]
    fn test_default_layer_from_catalog() {
        let config = load("[map]\ndefault_layer = NGA Hillshade\n").unwrap();
        assert_eq!(config.map.default_layer, "NGA Hillshade");
    }

    #[test]
    fn test_unknown_default_layer() {
        let err = load("[map]\ndefault_layer = Stamen Toner\n").unwrap_err();
        assert!(matches!(err, ConfigFileError::InvalidValue { .. }));
        assert!(err.to_string().contains("must be one of:"));
        assert!(err.to_string().contains("NGA Slate"));
    }

    #[test]
    fn test_custom_is_not_a_default_layer() {
        assert!(load("[map]\ndefault_layer = Custom\n").is_err());
    }

    #[test]
    fn test_invalid_zoom() {
        for value in ["20", "-1", "four"] {
            let err = load(&format!("[map]\ninitial_zoom = {}\n", value)).unwrap_err();
            assert!(err.to_string().contains("initial_zoom"), "{}", value);
        }
        assert_eq!(
            load("[map]\ninitial_zoom = 0\n").unwrap().map.initial_zoom,
            0
        );
    }

    #[test]
    fn test_logging_section() {
        let config = load("[logging]\ndirectory = /var/log/olivia\nfile = map.log\n").unwrap();
        assert_eq!(config.logging.directory, PathBuf::from("/var/log/olivia"));
        assert_eq!(config.logging.path(), PathBuf::from("/var/log/olivia/map.log"));
    }

    #[test]
    fn test_empty_logging_values_keep_defaults() {
        let config = load("[logging]\ndirectory =\nfile =\n").unwrap();
        assert_eq!(config.logging, ConfigFile::default().logging);
    }

    #[test]
    fn test_expand_tilde() {
        let path = expand_tilde("~/test/path");
        if let Some(home) = dirs::home_dir() {
            assert_eq!(path, home.join("test/path"));
        }

        // Non-tilde paths should be unchanged
        let path = expand_tilde("/absolute/path");
        assert_eq!(path, PathBuf::from("/absolute/path"));
    }
}
