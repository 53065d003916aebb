//! Point layers drawn from result cubes.
//!
//! Each point layer names three fields. The layer asks the host for a cube
//! with one dimension per field, labelled `latitude`, `longitude` and `label`,
//! and reads its markers back from that cube by label.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::coord::LatLng;
use crate::cube::{CellValue, ResultCube};

pub const LATITUDE_LABEL: &str = "latitude";
pub const LONGITUDE_LABEL: &str = "longitude";
pub const LABEL_LABEL: &str = "label";

/// One entry of the layout's `pointLayers` list.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointLayerProps {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layer_label: Option<String>,
    #[serde(default)]
    pub latitude_field: String,
    #[serde(default)]
    pub longitude_field: String,
    #[serde(default)]
    pub label_field: String,
    #[serde(
        rename = "markerSVG",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub marker_svg: Option<String>,
}

/// Cube request sent to the host (`{ qHyperCubeDef: ... }`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CubeRequest {
    #[serde(rename = "qHyperCubeDef")]
    pub definition: HyperCubeDef,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HyperCubeDef {
    #[serde(rename = "qDimensions")]
    pub dimensions: Vec<DimensionDef>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DimensionDef {
    #[serde(rename = "qDef")]
    pub def: FieldDef,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDef {
    #[serde(rename = "qFieldDefs")]
    pub field_defs: Vec<String>,
    #[serde(rename = "qFieldLabels")]
    pub field_labels: Vec<String>,
}

impl DimensionDef {
    pub fn new(field_name: &str, label: &str) -> Self {
        Self {
            def: FieldDef {
                field_defs: vec![field_name.to_string()],
                field_labels: vec![label.to_string()],
            },
        }
    }
}

/// A marker read from a point layer's cube.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub position: LatLng,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl PointLayerProps {
    /// The cube this layer needs from the host.
    pub fn cube_request(&self) -> CubeRequest {
        CubeRequest {
            definition: HyperCubeDef {
                dimensions: vec![
                    DimensionDef::new(&self.latitude_field, LATITUDE_LABEL),
                    DimensionDef::new(&self.longitude_field, LONGITUDE_LABEL),
                    DimensionDef::new(&self.label_field, LABEL_LABEL),
                ],
            },
        }
    }

    /// Markers for every row of `cube` that has a numeric, in-range position.
    pub fn points(&self, cube: &ResultCube) -> Vec<MapPoint> {
        let cells: Vec<usize> = (0..cube.dimension_info().len()).collect();

        (0..cube.row_count())
            .filter_map(|row| {
                let values = cube.map_labels_to_values(row, cells.iter().copied());
                let number = |label: &str| {
                    values
                        .get(label)
                        .and_then(Option::as_ref)
                        .and_then(CellValue::as_f64)
                };

                let position = match (number(LATITUDE_LABEL), number(LONGITUDE_LABEL)) {
                    (Some(lat), Some(lng)) => LatLng::new(lat, lng),
                    _ => {
                        debug!(row, "Point row without numeric position, skipping");
                        return None;
                    }
                };
                if !position.is_in_range() {
                    debug!(row, %position, "Point row out of range, skipping");
                    return None;
                }

                let label = values
                    .get(LABEL_LABEL)
                    .and_then(Option::as_ref)
                    .map(CellValue::to_string);
                Some(MapPoint { position, label })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cities() -> PointLayerProps {
        PointLayerProps {
            layer_label: Some("Cities".to_string()),
            latitude_field: "City_Lat".to_string(),
            longitude_field: "City_Lng".to_string(),
            label_field: "City".to_string(),
            marker_svg: None,
        }
    }

    #[test]
    fn test_cube_request_wire_shape() {
        let value = serde_json::to_value(cities().cube_request()).unwrap();
        assert_eq!(
            value,
            json!({"qHyperCubeDef": {"qDimensions": [
                {"qDef": {"qFieldDefs": ["City_Lat"], "qFieldLabels": ["latitude"]}},
                {"qDef": {"qFieldDefs": ["City_Lng"], "qFieldLabels": ["longitude"]}},
                {"qDef": {"qFieldDefs": ["City"], "qFieldLabels": ["label"]}}
            ]}})
        );
    }

    #[test]
    fn test_points_from_cube() {
        let cube = ResultCube::from_layout_json(&json!({
            "qHyperCube": {
                "qDimensionInfo": [
                    {"qFallbackTitle": "latitude"},
                    {"qFallbackTitle": "longitude"},
                    {"qFallbackTitle": "label"}
                ],
                "qDataPages": [{"qMatrix": [
                    [{"qNum": 52.37, "qText": "52.37"}, {"qNum": 4.89, "qText": "4.89"}, {"qNum": "NaN", "qText": "Amsterdam"}],
                    [{"qNum": "NaN", "qText": "-"}, {"qNum": 1.0}, {"qText": "Nowhere"}],
                    [{"qNum": 95.0}, {"qNum": 1.0}, {"qText": "Beyond the pole"}],
                    [{"qNum": -33.87}, {"qNum": 151.21}]
                ]}]
            }
        }));

        let points = cities().points(&cube);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].position, LatLng::new(52.37, 4.89));
        assert_eq!(points[0].label.as_deref(), Some("Amsterdam"));
        assert_eq!(points[1].position, LatLng::new(-33.87, 151.21));
        assert_eq!(points[1].label, None);
    }

    #[test]
    fn test_points_from_empty_cube() {
        assert!(cities().points(&ResultCube::default()).is_empty());
    }

    #[test]
    fn test_props_parse_marker_svg() {
        let props: PointLayerProps = serde_json::from_value(json!({
            "latitudeField": "Lat", "markerSVG": "<svg/>"
        }))
        .unwrap();
        assert_eq!(props.marker_svg.as_deref(), Some("<svg/>"));
        assert_eq!(props.longitude_field, "");
    }
}
