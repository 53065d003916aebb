//! Base layer catalog listing.

use olivia_map::layer::{catalog, Crs};

use crate::error::CliError;

/// List every selectable base layer id and the CRS options.
pub fn run() -> Result<(), CliError> {
    println!("Base layers:");
    for id in catalog::ids() {
        match catalog::find(id).and_then(|layer| layer.crs) {
            Some(crs) => println!("  {} ({})", id, crs),
            None => println!("  {}", id),
        }
    }

    println!();
    println!("CRS options:");
    for name in Crs::option_names() {
        println!("  {}", name);
    }

    Ok(())
}
