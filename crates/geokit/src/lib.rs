//! Geometric primitives for geographic coordinates.
//!
//! This crate provides:
//! - Latitude/longitude normalization
//! - Unit-aware distances with a string parser
//! - Spherical distance, heading, midpoint and destination point
//! - Antimeridian-aware bounding boxes
//! - Polygons with point-in-polygon testing
//! - Batch filtering with optional parallelism
//!
//! # Example
//!
//! ```
//! use geokit::{BoundingBox, Coordinate, Distance};
//!
//! let bbox = BoundingBox::new(Coordinate::new(-45.0, 179.0), Coordinate::new(45.0, -179.0))?;
//! assert!(bbox.crosses_antimeridian());
//! assert!(bbox.contains(&Coordinate::new(0.0, 180.0)));
//!
//! let grown = bbox.expand(Distance::from_string("10km")?);
//! assert!(grown.span().longitude > bbox.span().longitude);
//! # Ok::<(), geokit::GeoError>(())
//! ```

mod bounding_box;
mod distance;
mod error;
mod math;
mod normalize;
mod polygon;
pub mod batch;

use std::fmt;
use std::str::FromStr;

pub use batch::{filter_within_bounds, filter_within_polygon};
pub use bounding_box::BoundingBox;
pub use distance::{Distance, DistanceUnit};
pub use error::{ErrorKind, GeoError, GeoErrorCode, Result};
pub use math::{distance_haversine, endpoint, heading, midpoint, EARTH_RADIUS_M};
pub use normalize::{normalize_latitude, normalize_longitude};
pub use polygon::Polygon;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees (-90 to 90)
    pub latitude: f64,
    /// Longitude in degrees (-180 exclusive to 180 inclusive)
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate from values the caller already normalized.
    ///
    /// # Arguments
    /// * `latitude` - Latitude in degrees (-90 to 90)
    /// * `longitude` - Longitude in degrees (-180 to 180)
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Creates a coordinate from arbitrary degree values, normalizing both.
    ///
    /// ```
    /// use geokit::Coordinate;
    ///
    /// let coord = Coordinate::normalized(100.0, -180.0);
    /// assert_eq!(coord, Coordinate::new(80.0, 180.0));
    /// ```
    #[inline]
    pub fn normalized(latitude: f64, longitude: f64) -> Self {
        Self::new(normalize_latitude(latitude), normalize_longitude(longitude))
    }

    /// Returns true if the coordinate has finite values inside the valid ranges.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// Parses `"lat,lng"` or `"lat lng"`.
impl FromStr for Coordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = || {
            tracing::debug!(input = s, "rejected coordinate string");
            GeoError::InvalidCoordinate(s.to_string())
        };

        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|part| !part.is_empty())
            .collect();

        // A comma may appear at most once, between the two numbers.
        if parts.len() != 2 || s.matches(',').count() > 1 {
            return Err(invalid());
        }

        let latitude: f64 = parts[0].parse().map_err(|_| invalid())?;
        let longitude: f64 = parts[1].parse().map_err(|_| invalid())?;

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(invalid());
        }

        Ok(Self::new(latitude, longitude))
    }
}
