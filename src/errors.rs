//! Custom error types for coordinate handling

use std::fmt;
use std::io;

/// Broad classification of a [`CoordError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A latitude or longitude outside its closed interval
    Range,
    /// Input text that does not have the expected shape
    Format,
    /// A map without a required key
    MissingKey,
    /// Configuration, I/O and CLI failures
    Other,
}

/// Coordinate error types
#[derive(Debug)]
pub enum CoordError {
    /// Latitude outside [-90, 90]
    LatitudeOutOfRange(f64),
    /// Longitude outside [-180, 180]
    LongitudeOutOfRange(f64),
    /// Latitude text is not a numeric literal
    InvalidLatitude(String),
    /// Longitude text is not a numeric literal
    InvalidLongitude(String),
    /// Coordinate text is not "latitude,longitude"
    InvalidFormat(String),
    /// Required map key is absent
    MissingKey(&'static str),
    /// Unrecognised distance unit code
    UnknownUnit(String),
    /// Invalid configuration
    ConfigError(String),
    /// I/O error
    IoError(io::Error),
    /// Generic error with message
    GenericError(String),
}

impl CoordError {
    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            CoordError::LatitudeOutOfRange(_) | CoordError::LongitudeOutOfRange(_) => ErrorKind::Range,
            CoordError::InvalidLatitude(_)
            | CoordError::InvalidLongitude(_)
            | CoordError::InvalidFormat(_)
            | CoordError::UnknownUnit(_) => ErrorKind::Format,
            CoordError::MissingKey(_) => ErrorKind::MissingKey,
            CoordError::ConfigError(_) | CoordError::IoError(_) | CoordError::GenericError(_) => {
                ErrorKind::Other
            }
        }
    }
}

impl fmt::Display for CoordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordError::LatitudeOutOfRange(_) => write!(f, "Latitude must be between -90 and 90 degrees"),
            CoordError::LongitudeOutOfRange(_) => write!(f, "Longitude must be between -180 and 180 degrees"),
            CoordError::InvalidLatitude(v) => write!(f, "Invalid latitude value: {}", v),
            CoordError::InvalidLongitude(v) => write!(f, "Invalid longitude value: {}", v),
            CoordError::InvalidFormat(_) => {
                write!(f, "Invalid coordinates format. Expected \"latitude,longitude\"")
            }
            CoordError::MissingKey(_) => write!(f, "Array must contain both latitude and longitude keys"),
            CoordError::UnknownUnit(code) => write!(f, "Unknown distance unit: {}", code),
            CoordError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            CoordError::IoError(e) => write!(f, "I/O error: {}", e),
            CoordError::GenericError(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for CoordError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CoordError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CoordError {
    fn from(error: io::Error) -> Self {
        CoordError::IoError(error)
    }
}

impl From<String> for CoordError {
    fn from(msg: String) -> Self {
        CoordError::GenericError(msg)
    }
}

/// Result type for coordinate operations
pub type CoordResult<T> = Result<T, CoordError>;
