//! Error types for the geokit crate.

use thiserror::Error;

/// Result type alias for geokit operations.
pub type Result<T> = std::result::Result<T, GeoError>;

/// Errors that can occur during geokit operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    /// Distance unit token outside the recognized vocabulary
    #[error("Invalid distance unit: {0:?}")]
    UnknownUnit(String),

    /// Distance string without a numeric value or with trailing garbage
    #[error("Cannot parse distance from {0:?}")]
    InvalidDistance(String),

    /// Coordinate string that is not a `lat,lng` pair
    #[error("Cannot parse coordinate from {0:?}")]
    InvalidCoordinate(String),

    /// Polygon element that is not a usable coordinate
    #[error("Position at index {index} is not a valid coordinate: {reason}")]
    InvalidPosition {
        /// Index of the offending element
        index: usize,
        /// What is wrong with it
        reason: String,
    },

    /// Bounding box whose south edge lies north of its north edge
    #[error("Bounding box south latitude ({south}) must not be greater than north latitude ({north})")]
    InvertedLatitudes {
        /// South-west latitude
        south: f64,
        /// North-east latitude
        north: f64,
    },

    /// Bounding box requested from a polygon without vertices
    #[error("Cannot create a bounding box from an empty polygon")]
    EmptyPolygon,
}

/// Broad classification of a [`GeoError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Malformed input handed to a constructor or parser
    InvalidArgument,
    /// Well-typed input that violates an operation's precondition
    Logic,
}

/// Error code for integration with host error handling.
/// Range: 10xxx for geo errors.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoErrorCode {
    /// Unknown distance unit
    UnknownUnit = 10001,
    /// Unparsable distance string
    InvalidDistance = 10002,
    /// Unparsable coordinate string
    InvalidCoordinate = 10003,
    /// Invalid polygon element
    InvalidPosition = 10004,
    /// South latitude above north latitude
    InvertedLatitudes = 10101,
    /// Empty polygon
    EmptyPolygon = 10102,
}

impl GeoError {
    /// Returns the error code for this error.
    pub fn code(&self) -> GeoErrorCode {
        match self {
            GeoError::UnknownUnit(_) => GeoErrorCode::UnknownUnit,
            GeoError::InvalidDistance(_) => GeoErrorCode::InvalidDistance,
            GeoError::InvalidCoordinate(_) => GeoErrorCode::InvalidCoordinate,
            GeoError::InvalidPosition { .. } => GeoErrorCode::InvalidPosition,
            GeoError::InvertedLatitudes { .. } => GeoErrorCode::InvertedLatitudes,
            GeoError::EmptyPolygon => GeoErrorCode::EmptyPolygon,
        }
    }

    /// Returns whether the error is about bad input or a violated precondition.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GeoError::UnknownUnit(_)
            | GeoError::InvalidDistance(_)
            | GeoError::InvalidCoordinate(_)
            | GeoError::InvalidPosition { .. } => ErrorKind::InvalidArgument,
            GeoError::InvertedLatitudes { .. } | GeoError::EmptyPolygon => ErrorKind::Logic,
        }
    }
}
