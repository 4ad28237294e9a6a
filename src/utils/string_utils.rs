//! String utility functions
//!
//! Numeric recognition for coordinate text. Two flavours exist: a strict
//! check used by the single-axis parsers and a lenient prefix coercion used
//! when splitting a "lat,lon" pair.

use lazy_static::lazy_static;
use regex::Regex;

/// Whitespace allowed around a numeric literal (ASCII only)
const NUMERIC_PADDING: [char; 6] = [' ', '\t', '\n', '\r', '\x0B', '\x0C'];

lazy_static! {
    // Whole-string decimal literal, surrounding ASCII whitespace allowed
    static ref NUMERIC_LITERAL: Regex =
        Regex::new(r"^[ \t\n\r\x0B\x0C]*[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?[ \t\n\r\x0B\x0C]*$").unwrap();

    // Leading decimal literal, anything may follow
    static ref NUMERIC_PREFIX: Regex =
        Regex::new(r"^[ \t\n\r\x0B\x0C]*([+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?)").unwrap();
}

/// Strips the ASCII whitespace accepted around numeric literals
pub fn trim_numeric_padding(value: &str) -> &str {
    value.trim_matches(&NUMERIC_PADDING[..])
}

/// Checks whether a string is a plain decimal number
///
/// Accepts an optional sign, digits with an optional fraction and an
/// optional exponent. Hex, `inf` and `nan` are rejected.
pub fn is_numeric(value: &str) -> bool {
    NUMERIC_LITERAL.is_match(value)
}

/// Parses a string that must be a plain decimal number
///
/// Returns `None` when [`is_numeric`] rejects the input.
pub fn parse_numeric(value: &str) -> Option<f64> {
    if !is_numeric(value) {
        return None;
    }
    trim_numeric_padding(value).parse::<f64>().ok()
}

/// Coerces a string to a float using its longest numeric prefix
///
/// "12.5abc" gives 12.5, text without a numeric prefix gives 0.0. The
/// boolean reports whether a prefix was found.
pub fn coerce_leading_float(value: &str) -> (f64, bool) {
    NUMERIC_PREFIX
        .captures(value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .map(|v| (v, true))
        .unwrap_or((0.0, false))
}
