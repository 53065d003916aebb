//! olivia-map - Pin-and-layers map for analytics dashboards
//!
//! This library holds the non-visual core of the map object: reading the
//! host's result cubes, resolving base tile layers, and the map view
//! controller that ties a layout to the map widget.
//!
//! # Overview
//!
//! ```
//! use olivia_map::config::MapSettings;
//! use olivia_map::layout::MapLayout;
//! use olivia_map::notify::RecordingNotifier;
//! use olivia_map::view::MapView;
//!
//! let layout = MapLayout::from_json_str(
//!     r#"{"latitude": "52.37", "longitude": "4.89", "baseLayer": {"id": "NGA Slate"}}"#,
//! )?;
//! let view = MapView::build(&layout, &MapSettings::default(), &RecordingNotifier::new())?;
//! assert_eq!(view.base_layer.id, "NGA Slate");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod coord;
pub mod cube;
pub mod layer;
pub mod layout;
pub mod logging;
pub mod notify;
pub mod point_layer;
mod serde_util;
pub mod view;

/// Version of the olivia-map library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
