//! Geographic positions
//!
//! Provides the [`LatLng`] position used for the map's start view and pin, and
//! the parsing rules for positions the host hands over as app variable values.

mod types;

pub use types::{CoordError, LatLng, MAX_LAT, MAX_LON, MIN_LAT, MIN_LON};

/// Reads the leading decimal number of a string.
///
/// Leading whitespace is skipped and anything after the number is ignored,
/// so `" 12.5°N"` reads as `12.5`. `Infinity` is recognized. Returns `None`
/// when the string does not start with a number.
pub fn parse_leading_float(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    if s[end..].starts_with("Infinity") {
        let negative = bytes.first() == Some(&b'-');
        return Some(if negative {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_start = end;
    end = skip_digits(bytes, end);
    let mut mantissa_digits = end - int_start;

    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        end = skip_digits(bytes, frac_start);
        mantissa_digits += end - frac_start;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }

    s[..end].parse().ok()
}

fn skip_digits(bytes: &[u8], mut index: usize) -> usize {
    while bytes.get(index).is_some_and(u8::is_ascii_digit) {
        index += 1;
    }
    index
}

/// Builds a position from two host values.
///
/// # Errors
///
/// Returns the axis that does not start with a finite number.
pub fn lat_lng_from_text(lat: &str, lng: &str) -> Result<LatLng, CoordError> {
    let lat_value = parse_leading_float(lat)
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoordError::InvalidLatitude(lat.to_string()))?;
    let lng_value = parse_leading_float(lng)
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoordError::InvalidLongitude(lng.to_string()))?;
    Ok(LatLng::new(lat_value, lng_value))
}

#[cfg(test)]
mod tests;
