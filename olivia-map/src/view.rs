//! The map view controller.
//!
//! [`MapView::build`] turns a layout into everything the map widget needs at
//! start: centre, zoom, base layer, CRS, the pin and the point layer cube
//! requests. [`PinController`] follows the pin afterwards and reports which
//! app variables to write back when it moves.

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::config::MapSettings;
use crate::coord::{CoordError, LatLng};
use crate::layer::{resolve_and_notify, Crs, LayerConfig, LayerDescriptor, ResolutionError};
use crate::layout::{AppVariables, MapLayout};
use crate::notify::{Notice, NoticeKind, Notifier};
use crate::point_layer::CubeRequest;

/// Errors building a map view.
#[derive(Debug, Error)]
pub enum ViewError {
    #[error("Invalid start position: {0}")]
    Position(#[from] CoordError),

    #[error(transparent)]
    BaseLayer(#[from] ResolutionError),
}

/// The draggable position marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Pin {
    pub position: LatLng,
    pub draggable: bool,
    pub popup: String,
}

impl Pin {
    fn at(position: LatLng) -> Self {
        Self {
            position,
            draggable: true,
            popup: position.to_string(),
        }
    }
}

/// A point layer as handed to the map widget.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PointLayerView {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker_svg: Option<String>,
    pub cube_request: CubeRequest,
}

/// Initial state of one map object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MapView {
    pub center: LatLng,
    pub zoom: u8,
    pub base_layer: LayerDescriptor,
    /// Map projection; only set when the base layer has one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crs: Option<Crs>,
    pub pin: Pin,
    pub point_layers: Vec<PointLayerView>,
    #[serde(skip)]
    app_variables: AppVariables,
}

impl MapView {
    /// Builds the view for `layout`.
    ///
    /// A layout without a base layer section uses `settings.default_layer`.
    /// Failures are reported through `notifier` before they are returned.
    ///
    /// # Errors
    ///
    /// - [`ViewError::Position`] when the start position is not numeric
    /// - [`ViewError::BaseLayer`] when the base layer does not resolve
    pub fn build(
        layout: &MapLayout,
        settings: &MapSettings,
        notifier: &dyn Notifier,
    ) -> Result<Self, ViewError> {
        let center = layout.start_position().map_err(|e| {
            notifier.notify(&Notice::new(NoticeKind::InvalidPosition, e.to_string()));
            e
        })?;

        let layer_config = match &layout.base_layer {
            Some(config) => config.clone(),
            None => {
                debug!(default = %settings.default_layer, "Layout has no base layer, using default");
                LayerConfig::new(settings.default_layer.as_str())
            }
        };
        let base_layer = resolve_and_notify(&layer_config, notifier)?;

        let point_layers = layout
            .point_layers
            .iter()
            .map(|props| PointLayerView {
                label: props.layer_label.clone(),
                marker_svg: props.marker_svg.clone(),
                cube_request: props.cube_request(),
            })
            .collect();

        info!(%center, zoom = settings.initial_zoom, layer = %base_layer.id, "Built map view");

        Ok(Self {
            center,
            zoom: settings.initial_zoom,
            crs: base_layer.crs,
            base_layer,
            pin: Pin::at(center),
            point_layers,
            app_variables: layout.app_variables.clone(),
        })
    }

    /// A controller for this view's pin.
    pub fn pin_controller(&self) -> PinController {
        PinController::new(self.pin.position, self.app_variables.clone())
    }
}

/// A numeric value to write into an app variable.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariableAssignment {
    pub name: String,
    pub value: f64,
}

/// Result of moving the pin.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PinUpdate {
    pub position: LatLng,
    pub popup: String,
    pub assignments: Vec<VariableAssignment>,
}

/// Tracks the pin and maps its moves to app variable assignments.
#[derive(Debug, Clone)]
pub struct PinController {
    position: LatLng,
    variables: AppVariables,
}

impl PinController {
    pub fn new(position: LatLng, variables: AppVariables) -> Self {
        Self {
            position,
            variables,
        }
    }

    pub fn position(&self) -> LatLng {
        self.position
    }

    /// Popup text for the current position.
    pub fn popup_text(&self) -> String {
        self.position.to_string()
    }

    /// Moves the pin to a clicked map position.
    ///
    /// Clicks beyond the valid ranges (the map repeats horizontally) are
    /// wrapped back into range first.
    pub fn click(&mut self, position: LatLng) -> PinUpdate {
        let position = if position.is_in_range() {
            position
        } else {
            let wrapped = position.wrap();
            debug!(%position, %wrapped, "Wrapped click position");
            wrapped
        };
        self.move_to(position)
    }

    /// Moves the pin to where a drag ended.
    pub fn drag_end(&mut self, position: LatLng) -> PinUpdate {
        self.move_to(position)
    }

    fn move_to(&mut self, position: LatLng) -> PinUpdate {
        self.position = position;

        let assignments = [
            (&self.variables.latitude_variable, position.lat),
            (&self.variables.longitude_variable, position.lng),
        ]
        .into_iter()
        .filter_map(|(name, value)| {
            name.as_deref()
                .filter(|name| !name.is_empty())
                .map(|name| VariableAssignment {
                    name: name.to_string(),
                    value,
                })
        })
        .collect();

        PinUpdate {
            position,
            popup: self.popup_text(),
            assignments,
        }
    }
}
