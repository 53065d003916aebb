//! Result cube payload schema.
//!
//! Mirrors the JSON the host delivers inside a layout. Every level is
//! optional on the wire: a missing or `null` sequence deserializes as empty
//! and a missing or `null` scalar as `None`. A malformed leaf degrades on its
//! own (a numeric `qText` is stringified, a non-object cell is empty) instead
//! of failing the whole payload. Keys this crate does not read are kept in
//! `extra` so a payload serializes back with nothing dropped.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;

use crate::serde_util::{
    lenient_seq, lenient_text, lenient_text_seq, text_or_default, value_or_default,
};

/// One row of the data matrix: dimension cells first, then measure cells.
pub type Row = Vec<Cell>;

/// The result cube payload (`qHyperCube`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HyperCube {
    #[serde(rename = "qDimensionInfo", default, deserialize_with = "lenient_seq")]
    pub dimension_info: Vec<FieldInfo>,

    #[serde(rename = "qMeasureInfo", default, deserialize_with = "lenient_seq")]
    pub measure_info: Vec<FieldInfo>,

    /// Data pages; only the first one is ever read.
    #[serde(rename = "qDataPages", default, deserialize_with = "lenient_seq")]
    pub data_pages: Vec<DataPage>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Descriptor of one dimension or measure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldInfo {
    /// Display label
    #[serde(
        rename = "qFallbackTitle",
        default,
        deserialize_with = "text_or_default"
    )]
    pub fallback_label: String,

    /// Field definitions; only dimensions carry them. An entry that is not a
    /// scalar keeps its slot as `None`.
    #[serde(
        rename = "qGroupFieldDefs",
        default,
        deserialize_with = "lenient_text_seq",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub field_defs: Vec<Option<String>>,

    /// Error reported by the data layer for this field, in whatever shape the
    /// host produced it
    #[serde(rename = "qError", default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FieldInfo {
    pub fn new(fallback_label: impl Into<String>) -> Self {
        Self {
            fallback_label: fallback_label.into(),
            ..Self::default()
        }
    }

    pub fn with_field_defs<I, S>(mut self, defs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.field_defs = defs.into_iter().map(|def| Some(def.into())).collect();
        self
    }

    pub fn with_error(mut self, error: Value) -> Self {
        self.error = Some(error);
        self
    }
}

/// One page of the data matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DataPage {
    #[serde(rename = "qMatrix", default, deserialize_with = "lenient_matrix")]
    pub matrix: Vec<Row>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One matrix entry with its numeric and text representations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    #[serde(
        rename = "qNum",
        default,
        deserialize_with = "lenient_number",
        serialize_with = "non_finite_as_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub num: Option<f64>,

    #[serde(
        rename = "qText",
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub text: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Cell {
    pub fn num(value: f64) -> Self {
        Self {
            num: Some(value),
            ..Self::default()
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Self {
            text: Some(value.into()),
            ..Self::default()
        }
    }

    pub fn dual(num: f64, text: impl Into<String>) -> Self {
        Self {
            num: Some(num),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    /// The value this cell exposes: the number unless it is missing or NaN,
    /// then the text, then nothing.
    pub fn value(&self) -> Option<CellValue> {
        match (self.num, &self.text) {
            (Some(n), _) if !n.is_nan() => Some(CellValue::Num(n)),
            (_, Some(t)) => Some(CellValue::Text(t.clone())),
            _ => None,
        }
    }
}

/// Value read from a cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Num(f64),
    Text(String),
}

impl CellValue {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Num(n) => Some(*n),
            Self::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Num(_) => None,
            Self::Text(t) => Some(t),
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Num(n) => write!(f, "{}", n),
            Self::Text(t) => f.write_str(t),
        }
    }
}

impl From<f64> for CellValue {
    fn from(n: f64) -> Self {
        Self::Num(n)
    }
}

impl From<&str> for CellValue {
    fn from(t: &str) -> Self {
        Self::Text(t.to_string())
    }
}

/// Rows read leniently: a row that is not an array is empty, and a cell
/// that is not a readable object is an empty cell.
fn lenient_matrix<'de, D>(deserializer: D) -> Result<Vec<Row>, D::Error>
where
    D: Deserializer<'de>,
{
    let rows: Vec<Value> = lenient_seq(deserializer)?;
    Ok(rows
        .into_iter()
        .map(|row| match row {
            Value::Array(cells) => cells.into_iter().map(value_or_default).collect(),
            _ => Row::new(),
        })
        .collect())
}

/// The host writes `"NaN"` for cells without a numeric value, so `qNum`
/// arrives either as a JSON number or as a string.
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        None | Some(Value::Null) => None,
        Some(Value::Number(n)) => Some(n.as_f64().unwrap_or(f64::NAN)),
        Some(Value::String(s)) => Some(s.trim().parse().unwrap_or(f64::NAN)),
        Some(_) => Some(f64::NAN),
    })
}

/// JSON has no non-finite numbers; they are written the way the host spells
/// them so [`lenient_number`] reads them back unchanged.
fn non_finite_as_string<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(n) if n.is_finite() => serializer.serialize_f64(*n),
        Some(n) if n.is_nan() => serializer.serialize_str("NaN"),
        Some(n) if n.is_sign_positive() => serializer.serialize_str("Infinity"),
        Some(_) => serializer.serialize_str("-Infinity"),
        None => serializer.serialize_none(),
    }
}
