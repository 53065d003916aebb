//! The host layout document.
//!
//! A layout is the property tree the host evaluates for the map object: the
//! start position (already resolved from the bound app variables), the names
//! of those variables, the base layer section, the point layer list and an
//! optional result cube.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs;
use std::path::Path;
use thiserror::Error;

use crate::coord::{lat_lng_from_text, CoordError, LatLng};
use crate::cube::{HyperCube, ResultCube};
use crate::layer::LayerConfig;
use crate::point_layer::PointLayerProps;

/// Errors reading a layout document.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("Failed to read layout file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid layout JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// A host-evaluated scalar: the host delivers numbers or strings, and an
/// unevaluated expression object before the first calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AppValue {
    Number(f64),
    Text(String),
    Other(Value),
}

impl AppValue {
    /// Text form used for number parsing.
    pub fn as_text(&self) -> String {
        match self {
            Self::Number(n) => n.to_string(),
            Self::Text(t) => t.clone(),
            Self::Other(_) => String::new(),
        }
    }
}

/// Names of the app variables the pin position is bound to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppVariables {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude_variable: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude_variable: Option<String>,
}

impl AppVariables {
    /// The expression written into `latitude`/`longitude` when a variable is
    /// picked, so the host evaluates the variable's value: `="<name>"`.
    pub fn string_expression(name: &str) -> String {
        format!("=\"{}\"", name)
    }
}

/// The layout of one map object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapLayout {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<AppValue>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<AppValue>,
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub app_variables: AppVariables,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_layer: Option<LayerConfig>,
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub point_layers: Vec<PointLayerProps>,
    /// Raw cube payload; read through [`MapLayout::result_cube`]
    #[serde(
        rename = "qHyperCube",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub hyper_cube: Option<Value>,
}

impl MapLayout {
    pub fn from_json_str(json: &str) -> Result<Self, LayoutError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load_from(path: &Path) -> Result<Self, LayoutError> {
        let content = fs::read_to_string(path).map_err(|source| LayoutError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// The start position from the evaluated `latitude`/`longitude` values.
    ///
    /// Missing values read as empty text and fail like any other non-number.
    pub fn start_position(&self) -> Result<LatLng, CoordError> {
        let text = |value: &Option<AppValue>| {
            value.as_ref().map(AppValue::as_text).unwrap_or_default()
        };
        lat_lng_from_text(&text(&self.latitude), &text(&self.longitude))
    }

    /// A read model over this layout's cube; empty when there is none.
    pub fn result_cube(&self) -> ResultCube {
        self.hyper_cube
            .as_ref()
            .map(ResultCube::from_cube_json)
            .unwrap_or_default()
    }

    /// Replaces the cube payload, e.g. after labels were rewritten.
    pub fn set_result_cube(&mut self, payload: HyperCube) -> Result<(), LayoutError> {
        self.hyper_cube = Some(serde_json::to_value(payload)?);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_layout() -> Value {
        json!({
            "latitude": "12.5",
            "longitude": -70.1,
            "appVariables": {"latitudeVariable": "vLat", "longitudeVariable": "vLng"},
            "baseLayer": {"id": "Open Street Map", "options": {"bool": {"noWrap": true}}},
            "pointLayers": [
                {"layerLabel": "Cities", "latitudeField": "City_Lat",
                 "longitudeField": "City_Lng", "labelField": "City"}
            ],
            "qHyperCube": {"qDimensionInfo": [{"qFallbackTitle": "latitude"}]},
            "showTitles": true
        })
    }

    #[test]
    fn test_parse_full_layout() {
        let layout = MapLayout::from_json_str(&sample_layout().to_string()).unwrap();

        assert_eq!(layout.latitude, Some(AppValue::Text("12.5".to_string())));
        assert_eq!(layout.longitude, Some(AppValue::Number(-70.1)));
        assert_eq!(layout.app_variables.latitude_variable.as_deref(), Some("vLat"));
        assert_eq!(layout.base_layer.as_ref().unwrap().id, "Open Street Map");
        assert_eq!(layout.point_layers.len(), 1);
        assert_eq!(layout.result_cube().labels(), vec!["latitude"]);
    }

    #[test]
    fn test_start_position() {
        let layout = MapLayout::from_json_str(&sample_layout().to_string()).unwrap();
        assert_eq!(layout.start_position().unwrap(), LatLng::new(12.5, -70.1));
    }

    #[test]
    fn test_start_position_missing() {
        let layout = MapLayout::default();
        assert!(matches!(
            layout.start_position(),
            Err(CoordError::InvalidLatitude(_))
        ));
    }

    #[test]
    fn test_unevaluated_position_is_invalid() {
        let layout = MapLayout::from_json_str(
            r#"{"latitude": {"qStringExpression": "=\"vLat\""}, "longitude": "1"}"#,
        )
        .unwrap();
        assert!(matches!(
            layout.latitude,
            Some(AppValue::Other(_))
        ));
        assert!(layout.start_position().is_err());
    }

    #[test]
    fn test_empty_layout_parses() {
        let layout = MapLayout::from_json_str("{}").unwrap();
        assert_eq!(layout, MapLayout::default());
        assert_eq!(layout.result_cube(), ResultCube::default());
    }

    #[test]
    fn test_null_sections_parse() {
        let layout =
            MapLayout::from_json_str(r#"{"appVariables": null, "pointLayers": null, "qHyperCube": null}"#)
                .unwrap();
        assert!(layout.point_layers.is_empty());
        assert!(layout.hyper_cube.is_none());
    }

    #[test]
    fn test_invalid_json() {
        assert!(matches!(
            MapLayout::from_json_str("{not json"),
            Err(LayoutError::Json(_))
        ));
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let result = MapLayout::load_from(&dir.path().join("missing.json"));
        assert!(matches!(result, Err(LayoutError::Io { .. })));
    }

    #[test]
    fn test_set_result_cube_round_trips_labels() {
        let mut layout = MapLayout::from_json_str(&sample_layout().to_string()).unwrap();
        let mut cube = layout.result_cube();
        cube.update_dimension_labels(|label| label.to_uppercase());
        layout.set_result_cube(cube.into_payload()).unwrap();

        assert_eq!(layout.result_cube().labels(), vec!["LATITUDE"]);
    }

    #[test]
    fn test_string_expression() {
        assert_eq!(AppVariables::string_expression("vLat"), "=\"vLat\"");
    }
}
