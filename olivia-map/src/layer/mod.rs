//! Base layer configuration and resolution.
//!
//! A layout's `baseLayer` section names either one of the built-in tile
//! layers or the reserved `Custom` layer with a user-supplied URL template.
//! [`resolve`] turns that section into exactly one [`LayerDescriptor`] for the
//! tile widget, or a [`ResolutionError`] when the section cannot be rendered.
//!
//! ```
//! use olivia_map::layer::{resolve, Crs, LayerConfig};
//!
//! let config = LayerConfig::new("NGA Slate").with_flag("noWrap", None);
//! let layer = resolve(&config).unwrap();
//!
//! assert_eq!(layer.crs, Some(Crs::Epsg4326));
//! assert_eq!(layer.flag("noWrap"), Some(false));
//! ```

pub mod catalog;
mod error;
mod resolver;
mod types;

pub use catalog::{BuiltInLayer, BUILT_IN_LAYERS, CUSTOM_ID};
pub use error::ResolutionError;
pub use resolver::{resolve, resolve_and_notify};
pub use types::{Crs, LayerConfig, LayerConfigOptions, LayerDescriptor, LayerOptions, OptionValue};
