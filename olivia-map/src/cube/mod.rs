//! Read model over a result cube payload.
//!
//! The host hands the map a multidimensional result (dimensions × measures ×
//! a paged row matrix). [`ResultCube`] turns that payload into positional and
//! label-based lookups that never fail: a payload that is still loading,
//! mid-calculation or dimension-only simply yields empty sequences and `None`
//! values.
//!
//! # Example
//!
//! ```
//! use olivia_map::cube::{CellValue, ResultCube};
//! use serde_json::json;
//!
//! let cube = ResultCube::from_layout_json(&json!({
//!     "qHyperCube": {
//!         "qDimensionInfo": [
//!             {"qFallbackTitle": "Lat", "qGroupFieldDefs": ["lat"]},
//!             {"qFallbackTitle": "Lng", "qGroupFieldDefs": ["lng"]}
//!         ],
//!         "qDataPages": [{"qMatrix": [[{"qNum": 12.5}, {"qNum": -70.1}]]}]
//!     }
//! }));
//!
//! let values = cube.map_labels_to_values(0, [0, 1]);
//! assert_eq!(values["Lat"], Some(CellValue::Num(12.5)));
//! assert_eq!(cube.cell_value(0, 2), None);
//! ```
//!
//! # Label rewrites
//!
//! A cube owns the payload snapshot it was built from. The `update_*_labels`
//! methods rewrite labels in that snapshot through `&mut self`; the host reads
//! the rewritten payload back with [`ResultCube::payload`] or
//! [`ResultCube::into_payload`]. A new snapshot from the host means a new cube.

mod types;

pub use types::{Cell, CellValue, DataPage, FieldInfo, HyperCube, Row};

use crate::notify::{Notice, NoticeKind, Notifier};
use crate::serde_util::is_truthy;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Mapping from field label to the value of one row's cell.
///
/// Cells without a value keep their label with `None`.
pub type LabelValues = BTreeMap<String, Option<CellValue>>;

/// Layout key holding the cube payload.
const LAYOUT_CUBE_KEY: &str = "qHyperCube";

/// Safe read access to a result cube payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultCube {
    payload: HyperCube,
}

impl ResultCube {
    pub fn new(payload: HyperCube) -> Self {
        Self { payload }
    }

    /// Builds a cube from an optional payload; `None` gives an empty cube.
    pub fn from_payload(payload: Option<HyperCube>) -> Self {
        Self::new(payload.unwrap_or_default())
    }

    /// Builds a cube from a raw layout document.
    ///
    /// A missing `qHyperCube` gives an empty cube, and so does one that is not
    /// an object. Malformed sections and leaves inside the cube degrade on
    /// their own; the rest of the payload is still read.
    pub fn from_layout_json(layout: &Value) -> Self {
        match layout.get(LAYOUT_CUBE_KEY) {
            Some(raw) => Self::from_cube_json(raw),
            None => Self::default(),
        }
    }

    /// Builds a cube from a raw `qHyperCube` value, with the same fallbacks
    /// as [`ResultCube::from_layout_json`].
    pub fn from_cube_json(raw: &Value) -> Self {
        if raw.is_null() {
            return Self::default();
        }

        match serde_json::from_value::<HyperCube>(raw.clone()) {
            Ok(payload) => Self::new(payload),
            Err(e) => {
                warn!(error = %e, "Unreadable result cube payload, treating as empty");
                Self::default()
            }
        }
    }

    pub fn payload(&self) -> &HyperCube {
        &self.payload
    }

    pub fn into_payload(self) -> HyperCube {
        self.payload
    }

    /// Rows of the first data page.
    fn matrix(&self) -> &[Row] {
        self.payload
            .data_pages
            .first()
            .map(|page| page.matrix.as_slice())
            .unwrap_or(&[])
    }

    pub fn dimension_info(&self) -> &[FieldInfo] {
        &self.payload.dimension_info
    }

    pub fn measure_info(&self) -> &[FieldInfo] {
        &self.payload.measure_info
    }

    /// Dimensions followed by measures.
    pub fn info(&self) -> Vec<&FieldInfo> {
        self.dimension_info()
            .iter()
            .chain(self.measure_info())
            .collect()
    }

    /// Labels of all dimensions and measures, in cell order.
    pub fn labels(&self) -> Vec<&str> {
        self.info()
            .into_iter()
            .map(|field| field.fallback_label.as_str())
            .collect()
    }

    pub fn measure_labels(&self) -> Vec<&str> {
        self.measure_info()
            .iter()
            .map(|field| field.fallback_label.as_str())
            .collect()
    }

    /// First field definition of every dimension.
    ///
    /// A dimension that declares no field definitions yields `None` in its
    /// slot so positions stay aligned with [`ResultCube::dimension_info`].
    pub fn dimension_fields(&self) -> Vec<Option<&str>> {
        self.dimension_info()
            .iter()
            .map(|field| field.field_defs.first().and_then(Option::as_deref))
            .collect()
    }

    /// Number of rows in the first data page.
    pub fn row_count(&self) -> usize {
        self.matrix().len()
    }

    /// Whether the cube has dimensions, measures and at least one row.
    ///
    /// Data-driven layers are only rendered when this holds.
    pub fn has_dimensions_and_measures(&self) -> bool {
        !self.dimension_info().is_empty()
            && !self.measure_info().is_empty()
            && !self.matrix().is_empty()
    }

    /// Value of a matrix cell.
    ///
    /// `cell_index` is checked against the addressed row's own length. Out of
    /// range indices and empty cells give `None`.
    pub fn cell_value(&self, row_index: usize, cell_index: usize) -> Option<CellValue> {
        self.matrix()
            .get(row_index)
            .and_then(|row| row.get(cell_index))
            .and_then(Cell::value)
    }

    /// Value of a measure cell, with `measure_index` counted from the first
    /// measure.
    pub fn measure_cell_value(&self, row_index: usize, measure_index: usize) -> Option<CellValue> {
        let cell_index = self.dimension_info().len() + measure_index;
        self.cell_value(row_index, cell_index)
    }

    /// Maps the labels of the addressed cells to their values in one row.
    ///
    /// Later cells overwrite earlier ones that share a label. Indices past the
    /// last label are skipped.
    pub fn map_labels_to_values<I>(&self, row_index: usize, cell_indices: I) -> LabelValues
    where
        I: IntoIterator<Item = usize>,
    {
        let labels = self.labels();
        collect_label_values(&labels, cell_indices, |cell_index| {
            self.cell_value(row_index, cell_index)
        })
    }

    /// Maps measure labels to their values in one row.
    pub fn map_measure_labels_to_values<I>(&self, row_index: usize, measure_indices: I) -> LabelValues
    where
        I: IntoIterator<Item = usize>,
    {
        let labels = self.measure_labels();
        collect_label_values(&labels, measure_indices, |measure_index| {
            self.measure_cell_value(row_index, measure_index)
        })
    }

    /// Rewrites every dimension label in place.
    pub fn update_dimension_labels<F>(&mut self, rewrite: F)
    where
        F: FnMut(&str) -> String,
    {
        rewrite_labels(&mut self.payload.dimension_info, rewrite);
    }

    /// Rewrites every measure label in place.
    pub fn update_measure_labels<F>(&mut self, rewrite: F)
    where
        F: FnMut(&str) -> String,
    {
        rewrite_labels(&mut self.payload.measure_info, rewrite);
    }

    /// Errors carried by dimensions and measures, in `info()` order.
    ///
    /// Only set errors count: `null`, `false`, zero and `""` mean "no error".
    pub fn field_errors(&self) -> Vec<&Value> {
        self.info()
            .into_iter()
            .filter_map(|field| field.error.as_ref())
            .filter(|error| is_truthy(error))
            .collect()
    }

    /// Surfaces field errors to the user.
    ///
    /// When any dimension or measure carries an error, sends one
    /// [`NoticeKind::CubeFieldError`] notice with `context` and the errors as
    /// JSON. Returns whether a notice was sent; rendering may continue either
    /// way.
    pub fn alert_dimension_and_measure_errors(&self, context: &str, notifier: &dyn Notifier) -> bool {
        let errors = self.field_errors();
        if errors.is_empty() {
            return false;
        }

        let serialized = Value::Array(errors.into_iter().cloned().collect());
        let message = format!("olivia-map result cube error: {} {}", context, serialized);
        notifier.notify(&Notice::new(NoticeKind::CubeFieldError, message));
        true
    }
}

impl From<HyperCube> for ResultCube {
    fn from(payload: HyperCube) -> Self {
        Self::new(payload)
    }
}

fn collect_label_values<I, F>(labels: &[&str], indices: I, mut value_at: F) -> LabelValues
where
    I: IntoIterator<Item = usize>,
    F: FnMut(usize) -> Option<CellValue>,
{
    let mut map = LabelValues::new();
    for index in indices {
        let Some(label) = labels.get(index) else {
            debug!(index, "No label at index, skipping");
            continue;
        };
        if map.insert((*label).to_string(), value_at(index)).is_some() {
            debug!(label = %label, index, "Duplicate label, later value wins");
        }
    }
    map
}

fn rewrite_labels<F>(fields: &mut [FieldInfo], mut rewrite: F)
where
    F: FnMut(&str) -> String,
{
    for field in fields {
        field.fallback_label = rewrite(&field.fallback_label);
    }
}
