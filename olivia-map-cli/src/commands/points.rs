//! Markers of a point layer.

use serde::Serialize;
use std::path::Path;

use olivia_map::notify::TracingNotifier;
use olivia_map::point_layer::MapPoint;

use super::common::{load_layout, print_json};
use crate::error::CliError;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct PointsOutput<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    layer_label: Option<&'a str>,
    rows: usize,
    points: Vec<MapPoint>,
}

/// Read the markers of the layout's point layer `index` from the layer's
/// own layout, as the host returns it for the layer's cube request.
///
/// Field errors in the layer cube are logged and do not fail the command.
pub fn run(layout_path: &Path, index: usize, cube_path: &Path) -> Result<(), CliError> {
    let layout = load_layout(layout_path)?;
    let count = layout.point_layers.len();
    let props = layout
        .point_layers
        .get(index)
        .ok_or(CliError::NoPointLayer { index, count })?;

    let cube = load_layout(cube_path)?.result_cube();
    let context = props.layer_label.as_deref().unwrap_or("point layer");
    cube.alert_dimension_and_measure_errors(context, &TracingNotifier::new());

    print_json(&PointsOutput {
        layer_label: props.layer_label.as_deref(),
        rows: cube.row_count(),
        points: props.points(&cube),
    })
}
