//! Tests for the latitude value object

use crate::coordinate::Latitude;
use crate::errors::{CoordError, ErrorKind};

#[test]
fn test_latitude_creation() {
    let latitude = Latitude::new(40.7128).unwrap();
    assert_eq!(latitude.value(), 40.7128);
}

#[test]
fn test_latitude_out_of_range() {
    for value in [-91.0, 91.0, -90.000001, 90.000001, f64::NAN, f64::INFINITY] {
        let err = Latitude::new(value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    let err = Latitude::new(91.0).unwrap_err();
    assert_eq!(err.to_string(), "Latitude must be between -90 and 90 degrees");
}

#[test]
fn test_latitude_bounds_inclusive() {
    assert_eq!(Latitude::new(-90.0).unwrap().value(), -90.0);
    assert_eq!(Latitude::new(90.0).unwrap().value(), 90.0);
}

#[test]
fn test_latitude_value_preserved_across_range() {
    let mut value = -90.0;
    while value <= 90.0 {
        assert_eq!(Latitude::new(value).unwrap().value(), value);
        value += 0.75;
    }
}

#[test]
fn test_latitude_equality() {
    let a = Latitude::new(40.7128).unwrap();
    let b = Latitude::new(40.7128).unwrap();
    let c = Latitude::new(41.7128).unwrap();

    assert!(a.equals(&a));
    assert!(a.equals(&b));
    assert!(b.equals(&a));
    assert!(!a.equals(&c));
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn test_latitude_equality_is_exact() {
    let a = Latitude::new(10.0).unwrap();
    let b = Latitude::new(10.0 + 1e-12).unwrap();
    assert!(!a.equals(&b));
}

#[test]
fn test_latitude_to_string() {
    assert_eq!(Latitude::new(40.7128).unwrap().to_string(), "40.7128");
    assert_eq!(Latitude::new(-33.8700).unwrap().to_string(), "-33.87");
    assert_eq!(Latitude::new(90.0).unwrap().to_string(), "90");
}

#[test]
fn test_latitude_to_map() {
    let map = Latitude::new(40.7128).unwrap().to_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("latitude"), Some(&40.7128));
}

#[test]
fn test_latitude_from_string() {
    assert_eq!(Latitude::from_string("40.7128").unwrap().value(), 40.7128);
    assert_eq!(Latitude::from_string(" -12.5 ").unwrap().value(), -12.5);
    assert_eq!("45".parse::<Latitude>().unwrap().value(), 45.0);
}

#[test]
fn test_latitude_from_invalid_string() {
    let err = Latitude::from_string("invalid").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(err.to_string(), "Invalid latitude value: invalid");
    assert!(matches!(err, CoordError::InvalidLatitude(ref v) if v == "invalid"));
}

#[test]
fn test_latitude_from_string_rejects_non_ascii() {
    for input in ["\u{a0}12", "12\u{2003}", "\u{663}"] {
        let err = Latitude::from_string(input).unwrap_err();
        assert!(matches!(err, CoordError::InvalidLatitude(_)), "input: {:?}", input);
    }
    assert_eq!(Latitude::from_string("\t12\n").unwrap().value(), 12.0);
}

#[test]
fn test_latitude_from_string_out_of_range() {
    let err = Latitude::from_string("95").unwrap_err();
    assert!(matches!(err, CoordError::LatitudeOutOfRange(v) if v == 95.0));
}

#[test]
fn test_latitude_hemispheres() {
    let north = Latitude::new(40.7128).unwrap();
    let south = Latitude::new(-40.7128).unwrap();
    let equator = Latitude::new(0.0).unwrap();

    assert!(north.is_northern());
    assert!(!north.is_southern());
    assert!(!south.is_northern());
    assert!(south.is_southern());

    assert!(equator.is_equator());
    assert!(!equator.is_northern());
    assert!(!equator.is_southern());
    assert!(!north.is_equator());
}

#[test]
fn test_latitude_conversions() {
    let latitude = Latitude::try_from(12.0).unwrap();
    assert_eq!(f64::from(latitude), 12.0);
    assert!(Latitude::try_from(120.0).is_err());
}
