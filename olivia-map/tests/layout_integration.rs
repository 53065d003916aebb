//! Integration tests for reading a map object layout end to end.
//!
//! These tests verify the flows a host layout goes through:
//! - Layout file → MapView (start position, base layer, CRS, pin)
//! - Pin moves → app variable assignments
//! - Layout cube → label rewrite → layout cube
//! - Point layer cube → markers
//!
//! Run with: `cargo test --test layout_integration`

use std::fs;

use serde_json::json;
use tempfile::TempDir;

use olivia_map::config::ConfigFile;
use olivia_map::coord::LatLng;
use olivia_map::cube::{CellValue, ResultCube};
use olivia_map::layer::{resolve, Crs, LayerConfig, OptionValue};
use olivia_map::layout::MapLayout;
use olivia_map::notify::{NoticeKind, RecordingNotifier};
use olivia_map::view::{MapView, ViewError};

// ============================================================================
// Test Helpers
// ============================================================================

/// A layout as the host delivers it after the first calculation.
fn host_layout() -> serde_json::Value {
    json!({
        "latitude": "48.8566",
        "longitude": "2.3522",
        "appVariables": {"latitudeVariable": "vPinLat", "longitudeVariable": "vPinLng"},
        "baseLayer": {
            "id": "NGA Worldwide Street",
            "options": {"bool": {"noWrap": true, "detectRetina": null}},
            "refresh": 3
        },
        "pointLayers": [
            {"layerLabel": "Stores", "latitudeField": "StoreLat",
             "longitudeField": "StoreLng", "labelField": "StoreName",
             "markerSVG": "<svg></svg>"}
        ],
        "qHyperCube": {
            "qDimensionInfo": [
                {"qFallbackTitle": "Store", "qGroupFieldDefs": ["StoreName"]}
            ],
            "qMeasureInfo": [{"qFallbackTitle": "Revenue"}],
            "qDataPages": [{"qMatrix": [
                [{"qText": "Louvre"}, {"qNum": 1200.5, "qText": "1,200.50"}],
                [{"qText": "Bastille"}, {"qNum": "NaN", "qText": "-"}]
            ]}],
            "qSize": {"qcx": 2, "qcy": 2}
        }
    })
}

// ============================================================================
// Layout → MapView
// ============================================================================

#[test]
fn test_layout_file_to_view() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("layout.json");
    fs::write(&path, host_layout().to_string()).unwrap();

    let layout = MapLayout::load_from(&path).unwrap();
    let notifier = RecordingNotifier::new();
    let view = MapView::build(&layout, &ConfigFile::default().map, &notifier).unwrap();

    assert_eq!(view.center, LatLng::new(48.8566, 2.3522));
    assert_eq!(view.crs, Some(Crs::Epsg4326));
    assert_eq!(view.base_layer.flag("noWrap"), Some(true));
    assert_eq!(view.base_layer.flag("detectRetina"), Some(false));
    assert_eq!(
        view.base_layer.options.get("tileSize"),
        Some(&OptionValue::Number(256))
    );
    assert_eq!(view.pin.popup, "LatLng(48.8566, 2.3522)");
    assert_eq!(view.point_layers[0].marker_svg.as_deref(), Some("<svg></svg>"));
    assert!(notifier.is_empty());
}

#[test]
fn test_flags_do_not_leak_between_resolutions() {
    let configured = LayerConfig::new("Open Street Map").with_flag("noWrap", Some(true));
    assert_eq!(resolve(&configured).unwrap().flag("noWrap"), Some(true));

    let plain = resolve(&LayerConfig::new("Open Street Map")).unwrap();
    assert_eq!(plain.flag("noWrap"), None);
}

#[test]
fn test_unknown_layer_reported_once() {
    let mut layout: MapLayout = serde_json::from_value(host_layout()).unwrap();
    layout.base_layer = Some(LayerConfig::new("open street map"));

    let notifier = RecordingNotifier::new();
    let result = MapView::build(&layout, &ConfigFile::default().map, &notifier);

    assert!(matches!(result, Err(ViewError::BaseLayer(_))));
    assert_eq!(notifier.len(), 1);
    assert!(notifier.contains(NoticeKind::UnknownLayerId));
}

// ============================================================================
// Pin → app variables
// ============================================================================

#[test]
fn test_pin_moves_write_variables() {
    let layout: MapLayout = serde_json::from_value(host_layout()).unwrap();
    let view = MapView::build(&layout, &ConfigFile::default().map, &RecordingNotifier::new())
        .unwrap();
    let mut pin = view.pin_controller();

    let clicked = pin.click(LatLng::new(91.0, -200.0));
    assert_eq!(clicked.position.lat, 90.0);
    assert!((clicked.position.lng - 160.0).abs() < 1e-9);

    let dragged = pin.drag_end(LatLng::new(45.0, 5.0));
    let names: Vec<_> = dragged.assignments.iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, ["vPinLat", "vPinLng"]);
    assert_eq!(dragged.assignments[0].value, 45.0);
    assert_eq!(pin.popup_text(), "LatLng(45, 5)");
}

// ============================================================================
// Layout cube
// ============================================================================

#[test]
fn test_cube_label_rewrite_round_trip() {
    let mut layout: MapLayout = serde_json::from_value(host_layout()).unwrap();

    let mut cube = layout.result_cube();
    assert!(cube.has_dimensions_and_measures());
    cube.update_measure_labels(|label| format!("{} (EUR)", label));
    layout.set_result_cube(cube.into_payload()).unwrap();

    let cube = layout.result_cube();
    let values = cube.map_labels_to_values(0, 0..2);
    assert_eq!(values["Store"], Some(CellValue::from("Louvre")));
    assert_eq!(values["Revenue (EUR)"], Some(CellValue::Num(1200.5)));
    assert_eq!(cube.measure_cell_value(1, 0), Some(CellValue::from("-")));

    // Keys the map does not model survive the round trip
    let raw = layout.hyper_cube.unwrap();
    assert_eq!(raw["qSize"], json!({"qcx": 2, "qcy": 2}));
}

#[test]
fn test_point_layer_cube_to_markers() {
    let layout: MapLayout = serde_json::from_value(host_layout()).unwrap();
    let props = &layout.point_layers[0];

    let request = serde_json::to_value(props.cube_request()).unwrap();
    assert_eq!(
        request["qHyperCubeDef"]["qDimensions"][0]["qDef"]["qFieldDefs"],
        json!(["StoreLat"])
    );

    let cube = ResultCube::from_layout_json(&json!({"qHyperCube": {
        "qDimensionInfo": [
            {"qFallbackTitle": "latitude"},
            {"qFallbackTitle": "longitude"},
            {"qFallbackTitle": "label"}
        ],
        "qDataPages": [{"qMatrix": [
            [{"qNum": 48.86}, {"qNum": 2.34}, {"qText": "Louvre"}],
            [{"qText": "unknown"}, {"qNum": 2.37}, {"qText": "Bastille"}]
        ]}]
    }}));

    let points = props.points(&cube);
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].label.as_deref(), Some("Louvre"));
}
