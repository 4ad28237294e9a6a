//! Tests for the longitude value object

use crate::coordinate::Longitude;
use crate::errors::{CoordError, ErrorKind};

#[test]
fn test_longitude_creation() {
    let longitude = Longitude::new(-74.0060).unwrap();
    assert_eq!(longitude.value(), -74.0060);
}

#[test]
fn test_longitude_out_of_range() {
    for value in [-181.0, 181.0, -180.0001, 180.0001, f64::NAN] {
        let err = Longitude::new(value).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    let err = Longitude::new(-181.0).unwrap_err();
    assert_eq!(err.to_string(), "Longitude must be between -180 and 180 degrees");
}

#[test]
fn test_longitude_bounds_inclusive() {
    assert_eq!(Longitude::new(-180.0).unwrap().value(), -180.0);
    assert_eq!(Longitude::new(180.0).unwrap().value(), 180.0);
}

#[test]
fn test_longitude_value_preserved_across_range() {
    let mut value = -180.0;
    while value <= 180.0 {
        assert_eq!(Longitude::new(value).unwrap().value(), value);
        value += 1.25;
    }
}

#[test]
fn test_longitude_equality() {
    let a = Longitude::new(-74.0060).unwrap();
    let b = Longitude::new(-74.0060).unwrap();
    let c = Longitude::new(-75.0060).unwrap();

    assert!(a.equals(&b));
    assert!(b.equals(&a));
    assert!(!a.equals(&c));
}

#[test]
fn test_longitude_to_string() {
    assert_eq!(Longitude::new(-74.0060).unwrap().to_string(), "-74.006");
    assert_eq!(Longitude::new(180.0).unwrap().to_string(), "180");
}

#[test]
fn test_longitude_to_map() {
    let map = Longitude::new(-74.006).unwrap().to_map();
    assert_eq!(map.len(), 1);
    assert_eq!(map.get("longitude"), Some(&-74.006));
}

#[test]
fn test_longitude_from_string() {
    assert_eq!(Longitude::from_string("-74.0060").unwrap().value(), -74.006);
    assert_eq!("120".parse::<Longitude>().unwrap().value(), 120.0);
}

#[test]
fn test_longitude_from_invalid_string() {
    let err = Longitude::from_string("west").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(err.to_string(), "Invalid longitude value: west");

    let err = Longitude::from_string("181").unwrap_err();
    assert!(matches!(err, CoordError::LongitudeOutOfRange(_)));
}

#[test]
fn test_longitude_hemispheres() {
    let east = Longitude::new(120.0).unwrap();
    let west = Longitude::new(-120.0).unwrap();
    let prime = Longitude::new(0.0).unwrap();

    assert!(east.is_eastern());
    assert!(!east.is_western());
    assert!(west.is_western());
    assert!(!west.is_eastern());

    assert!(prime.is_prime_meridian());
    assert!(!prime.is_eastern());
    assert!(!prime.is_western());
    assert!(!east.is_prime_meridian());
}

#[test]
fn test_longitude_international_date_line() {
    assert!(Longitude::new(180.0).unwrap().is_international_date_line());
    assert!(Longitude::new(-180.0).unwrap().is_international_date_line());
    assert!(!Longitude::new(179.9).unwrap().is_international_date_line());
    assert!(!Longitude::new(0.0).unwrap().is_international_date_line());
}
