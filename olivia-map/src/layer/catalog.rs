//! Built-in base layer catalog.
//!
//! The catalog is a `static` table: it is never mutated, so resolution needs
//! no locking and a configured flag can never leak into a later resolution.

use super::types::{Crs, LayerDescriptor, LayerOptions, OptionValue};

/// Reserved id of the user-supplied layer. Never used by a built-in.
pub const CUSTOM_ID: &str = "Custom";

/// Option value in a built-in's defaults.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StaticOption {
    Bool(bool),
    Number(u32),
    Text(&'static str),
}

impl From<StaticOption> for OptionValue {
    fn from(value: StaticOption) -> Self {
        match value {
            StaticOption::Bool(b) => OptionValue::Bool(b),
            StaticOption::Number(n) => OptionValue::Number(n),
            StaticOption::Text(s) => OptionValue::Text(s.to_string()),
        }
    }
}

/// An immutable built-in layer template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BuiltInLayer {
    pub id: &'static str,
    pub url_template: &'static str,
    pub crs: Option<Crs>,
    pub options: &'static [(&'static str, StaticOption)],
}

impl BuiltInLayer {
    /// An owned descriptor carrying this template's default options.
    pub fn descriptor(&self) -> LayerDescriptor {
        LayerDescriptor {
            id: self.id.to_string(),
            url_template: self.url_template.to_string(),
            crs: self.crs,
            options: self
                .options
                .iter()
                .map(|(name, value)| (name.to_string(), OptionValue::from(*value)))
                .collect::<LayerOptions>(),
        }
    }
}

const OSM_ATTRIBUTION: &str = "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Tiles from the NGA ArcGIS services are XYZ-numbered 256px tiles.
const NGA_OPTIONS: &[(&str, StaticOption)] = &[
    ("tileSize", StaticOption::Number(256)),
    ("tms", StaticOption::Bool(false)),
];

// The CRS of an NGA layer is listed in its "Detailed Service Information
// Document" under https://maps.gvs.nga.mil/arcgis/rest/services/.

pub static BUILT_IN_LAYERS: &[BuiltInLayer] = &[
    BuiltInLayer {
        id: "Open Street Map",
        url_template: "https://tile.openstreetmap.org/{z}/{x}/{y}.png",
        crs: None,
        options: &[("attribution", StaticOption::Text(OSM_ATTRIBUTION))],
    },
    BuiltInLayer {
        id: "NGA World Imagery",
        url_template: "https://maps.gvs.nga.mil/arcgis/rest/services/Basemap/NGA_World_Imagery_2D/MapServer/tile/{z}/{y}/{x}?blankTile=false.png",
        crs: Some(Crs::Epsg4326),
        options: NGA_OPTIONS,
    },
    BuiltInLayer {
        id: "NGA Worldwide Street",
        url_template: "https://maps.gvs.nga.mil/arcgis/rest/services/Basemap/World_StreetMap_2D/MapServer/tile/{z}/{y}/{x}?blankTile=false.png",
        crs: Some(Crs::Epsg4326),
        options: NGA_OPTIONS,
    },
    BuiltInLayer {
        id: "NGA Shaded Relief",
        url_template: "https://maps.gvs.nga.mil/arcgis/rest/services/Basemap/NGA_ShadedRelief_2D/MapServer/tile/{z}/{y}/{x}?blankTile=false.png",
        crs: Some(Crs::Epsg4326),
        options: NGA_OPTIONS,
    },
    BuiltInLayer {
        id: "NGA Hillshade",
        url_template: "https://maps.gvs.nga.mil/arcgis/rest/services/Basemap/NGA_Hillshade_2D/MapServer/tile/{z}/{y}/{x}?blankTile=false.png",
        crs: Some(Crs::Epsg4326),
        options: NGA_OPTIONS,
    },
    BuiltInLayer {
        id: "NGA Slate",
        url_template: "https://maps.gvs.nga.mil/arcgis/rest/services/CanvasMaps/Slate/MapServer/tile/{z}/{y}/{x}?blankTile=false.png",
        crs: Some(Crs::Epsg4326),
        options: NGA_OPTIONS,
    },
];

/// Exact-match lookup of a built-in layer.
pub fn find(id: &str) -> Option<&'static BuiltInLayer> {
    BUILT_IN_LAYERS.iter().find(|layer| layer.id == id)
}

/// Every selectable id: the built-ins in catalog order, then [`CUSTOM_ID`].
pub fn ids() -> Vec<&'static str> {
    BUILT_IN_LAYERS
        .iter()
        .map(|layer| layer.id)
        .chain(std::iter::once(CUSTOM_ID))
        .collect()
}
