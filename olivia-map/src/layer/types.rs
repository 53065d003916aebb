//! Layer descriptor and configuration types

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Tile layer options: URL template parameters and render flags.
pub type LayerOptions = BTreeMap<String, OptionValue>;

/// Coordinate reference systems a base layer can require.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Crs {
    /// World Mercator
    #[serde(rename = "EPSG3395")]
    Epsg3395,
    /// Spherical (Web) Mercator, the widget default
    #[serde(rename = "EPSG3857")]
    Epsg3857,
    /// Plate carrée (WGS 84 lat/lng)
    #[serde(rename = "EPSG4326")]
    Epsg4326,
}

impl Crs {
    /// Name used for the "widget default" choice in CRS pickers.
    pub const DEFAULT_OPTION: &'static str = "Default";

    pub const ALL: [Crs; 3] = [Crs::Epsg3395, Crs::Epsg3857, Crs::Epsg4326];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Epsg3395 => "EPSG3395",
            Self::Epsg3857 => "EPSG3857",
            Self::Epsg4326 => "EPSG4326",
        }
    }

    /// Looks up a CRS picker choice. `"Default"` and unknown names mean "use
    /// the widget default" and give `None`.
    pub fn from_option(name: &str) -> Option<Crs> {
        Self::ALL.into_iter().find(|crs| crs.code() == name)
    }

    /// All picker choices, starting with the default.
    pub fn option_names() -> Vec<&'static str> {
        std::iter::once(Self::DEFAULT_OPTION)
            .chain(Self::ALL.iter().map(Crs::code))
            .collect()
    }
}

impl fmt::Display for Crs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// A single tile layer option value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Bool(bool),
    Number(u32),
    Text(String),
}

impl OptionValue {
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<u32> for OptionValue {
    fn from(n: u32) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A concrete, renderable base layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerDescriptor {
    pub id: String,
    pub url_template: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<Crs>,
    #[serde(default)]
    pub options: LayerOptions,
}

impl LayerDescriptor {
    /// Value of a boolean render flag, if set.
    pub fn flag(&self, name: &str) -> Option<bool> {
        self.options.get(name).and_then(OptionValue::as_bool)
    }
}

/// Base layer section of a layout (`baseLayer`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerConfig {
    #[serde(default, deserialize_with = "crate::serde_util::null_as_default")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<LayerConfigOptions>,
    /// Counter the property panel bumps on every template change
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh: Option<u64>,
}

impl LayerConfig {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }

    pub fn with_custom_url(mut self, url: impl Into<String>) -> Self {
        self.custom_url = Some(url.into());
        self
    }

    /// Sets one boolean flag; `None` records the key with no value.
    pub fn with_flag(mut self, name: impl Into<String>, value: Option<bool>) -> Self {
        self.options
            .get_or_insert_with(LayerConfigOptions::default)
            .flags
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value);
        self
    }

    /// The boolean flags as configured, possibly with missing values.
    pub fn bool_flags(&self) -> Option<&BTreeMap<String, Option<bool>>> {
        self.options.as_ref().and_then(|o| o.flags.as_ref())
    }
}

/// Options section of a base layer config (`baseLayer.options`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LayerConfigOptions {
    /// Render flags such as `noWrap` and `tms`; a key may be present with
    /// no value
    #[serde(rename = "bool", default, skip_serializing_if = "Option::is_none")]
    pub flags: Option<BTreeMap<String, Option<bool>>>,
    /// CRS picker choice, see [`Crs::from_option`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub crs: Option<String>,
}
