//! Result cube summary.

use std::path::Path;

use olivia_map::notify::RecordingNotifier;

use super::common::{load_layout, print_json};
use crate::error::CliError;

/// Print what the map reads from a layout's result cube.
///
/// Field errors in the cube are reported on stderr and do not fail the
/// command.
pub fn run(layout_path: &Path, upper_labels: bool, payload: bool) -> Result<(), CliError> {
    let layout = load_layout(layout_path)?;
    let mut cube = layout.result_cube();

    if upper_labels {
        cube.update_dimension_labels(|label| label.to_uppercase());
        cube.update_measure_labels(|label| label.to_uppercase());
    }

    let notifier = RecordingNotifier::new();
    cube.alert_dimension_and_measure_errors(&layout_path.display().to_string(), &notifier);
    for notice in notifier.notices() {
        eprintln!("Warning: {}", notice);
    }

    if payload {
        return print_json(cube.payload());
    }

    let dimensions: Vec<&str> = cube
        .dimension_info()
        .iter()
        .map(|field| field.fallback_label.as_str())
        .collect();
    let fields: Vec<&str> = cube
        .dimension_fields()
        .into_iter()
        .map(|field| field.unwrap_or("-"))
        .collect();

    println!("Dimensions: {}", dimensions.join(", "));
    println!("Fields:     {}", fields.join(", "));
    println!("Measures:   {}", cube.measure_labels().join(", "));
    println!("Rows:       {}", cube.row_count());
    println!(
        "Complete:   {}",
        if cube.has_dimensions_and_measures() { "yes" } else { "no" }
    );
    println!("Errors:     {}", cube.field_errors().len());

    Ok(())
}
