//! Tests for positions and host value parsing

use super::*;

#[test]
fn test_in_range_position_is_unchanged_by_wrap() {
    let pos = LatLng::new(40.7128, -74.0060);
    assert!(pos.is_in_range());
    assert_eq!(pos.wrap(), pos);
}

#[test]
fn test_wrap_longitude_east_of_antimeridian() {
    let wrapped = LatLng::new(10.0, 190.0).wrap();
    assert!((wrapped.lng - (-170.0)).abs() < 1e-9);
    assert_eq!(wrapped.lat, 10.0);
}

#[test]
fn test_wrap_longitude_west_of_antimeridian() {
    let wrapped = LatLng::new(0.0, -190.0).wrap();
    assert!((wrapped.lng - 170.0).abs() < 1e-9);
}

#[test]
fn test_wrap_several_turns() {
    let wrapped = LatLng::new(0.0, 720.0 + 45.0).wrap();
    assert!((wrapped.lng - 45.0).abs() < 1e-9);
    assert!(wrapped.is_in_range());
}

#[test]
fn test_wrap_keeps_positive_antimeridian() {
    assert_eq!(LatLng::new(0.0, 180.0).wrap().lng, 180.0);
    assert_eq!(LatLng::new(0.0, -180.0).wrap().lng, -180.0);
}

#[test]
fn test_wrap_clamps_latitude() {
    assert_eq!(LatLng::new(95.0, 0.0).wrap().lat, 90.0);
    assert_eq!(LatLng::new(-91.5, 0.0).wrap().lat, -90.0);
}

#[test]
fn test_out_of_range() {
    assert!(!LatLng::new(90.1, 0.0).is_in_range());
    assert!(!LatLng::new(0.0, -180.5).is_in_range());
    assert!(!LatLng::new(f64::NAN, 0.0).is_in_range());
}

#[test]
fn test_display_rounds_to_six_places() {
    assert_eq!(LatLng::new(12.5, -70.1).to_string(), "LatLng(12.5, -70.1)");
    assert_eq!(
        LatLng::new(51.50735123456, -0.12775).to_string(),
        "LatLng(51.507351, -0.12775)"
    );
}

#[test]
fn test_parse_plain_numbers() {
    assert_eq!(parse_leading_float("12.5"), Some(12.5));
    assert_eq!(parse_leading_float("-70.1"), Some(-70.1));
    assert_eq!(parse_leading_float("+3"), Some(3.0));
    assert_eq!(parse_leading_float(".5"), Some(0.5));
    assert_eq!(parse_leading_float("1e3"), Some(1000.0));
}

#[test]
fn test_parse_ignores_trailing_text() {
    assert_eq!(parse_leading_float("  12.5abc"), Some(12.5));
    assert_eq!(parse_leading_float("3.14.15"), Some(3.14));
    assert_eq!(parse_leading_float("7e"), Some(7.0));
    assert_eq!(parse_leading_float("42°N"), Some(42.0));
}

#[test]
fn test_parse_rejects_non_numbers() {
    assert_eq!(parse_leading_float(""), None);
    assert_eq!(parse_leading_float("abc"), None);
    assert_eq!(parse_leading_float("-"), None);
    assert_eq!(parse_leading_float("."), None);
    assert_eq!(parse_leading_float("=\"lat\""), None);
}

#[test]
fn test_parse_infinity() {
    assert_eq!(parse_leading_float("Infinity"), Some(f64::INFINITY));
    assert_eq!(parse_leading_float("-Infinity"), Some(f64::NEG_INFINITY));
}

#[test]
fn test_lat_lng_from_text() {
    let pos = lat_lng_from_text("12.5", " -70.1").unwrap();
    assert_eq!(pos, LatLng::new(12.5, -70.1));
}

#[test]
fn test_lat_lng_from_text_reports_axis() {
    assert!(matches!(
        lat_lng_from_text("north", "1"),
        Err(CoordError::InvalidLatitude(_))
    ));
    assert!(matches!(
        lat_lng_from_text("1", "Infinity"),
        Err(CoordError::InvalidLongitude(_))
    ));
}
