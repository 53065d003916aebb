//! Coordinate type definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// Valid latitude range
pub const MIN_LAT: f64 = -90.0;
pub const MAX_LAT: f64 = 90.0;

/// Valid longitude range
pub const MIN_LON: f64 = -180.0;
pub const MAX_LON: f64 = 180.0;

/// Decimal places shown when a position is rendered as text.
const DISPLAY_PRECISION: i32 = 6;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude, north positive
    pub lat: f64,
    /// Longitude, east positive
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Whether both components are finite and within the valid ranges.
    pub fn is_in_range(&self) -> bool {
        (MIN_LAT..=MAX_LAT).contains(&self.lat) && (MIN_LON..=MAX_LON).contains(&self.lng)
    }

    /// Brings a position picked on the map back into range.
    ///
    /// Longitude wraps around the antimeridian into [-180, 180] (180 itself
    /// is kept, as the map widget does); latitude is clamped to [-90, 90].
    pub fn wrap(&self) -> LatLng {
        LatLng {
            lat: self.lat.clamp(MIN_LAT, MAX_LAT),
            lng: wrap_longitude(self.lng),
        }
    }

    /// Position with both components rounded for display.
    pub fn rounded(&self) -> LatLng {
        LatLng {
            lat: round_to(self.lat, DISPLAY_PRECISION),
            lng: round_to(self.lng, DISPLAY_PRECISION),
        }
    }
}

impl fmt::Display for LatLng {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounded = self.rounded();
        write!(f, "LatLng({}, {})", rounded.lat, rounded.lng)
    }
}

fn wrap_longitude(lng: f64) -> f64 {
    if lng == MAX_LON {
        return lng;
    }
    let span = MAX_LON - MIN_LON;
    ((lng - MIN_LON) % span + span) % span + MIN_LON
}

fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Errors that can occur reading a position.
#[derive(Debug, Clone, PartialEq)]
pub enum CoordError {
    /// The latitude value does not start with a number
    InvalidLatitude(String),
    /// The longitude value does not start with a number
    InvalidLongitude(String),
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::InvalidLatitude(value) => {
                write!(f, "Invalid latitude: '{}' is not a number", value)
            }
            CoordError::InvalidLongitude(value) => {
                write!(f, "Invalid longitude: '{}' is not a number", value)
            }
        }
    }
}

impl std::error::Error for CoordError {}
