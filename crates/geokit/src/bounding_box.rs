//! Axis-aligned latitude/longitude regions.
//!
//! A box whose south-west longitude is greater than its north-east longitude
//! wraps eastward across the antimeridian.

use crate::{
    endpoint, normalize_longitude, Coordinate, Distance, GeoError, Polygon, Result,
    EARTH_RADIUS_M,
};
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_PI_2;

/// Region bounded by a south-west and a north-east corner.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Corners")]
pub struct BoundingBox {
    south_west: Coordinate,
    north_east: Coordinate,
}

/// Unchecked wire form of a [`BoundingBox`].
#[derive(Deserialize)]
struct Corners {
    south_west: Coordinate,
    north_east: Coordinate,
}

impl TryFrom<Corners> for BoundingBox {
    type Error = GeoError;

    fn try_from(corners: Corners) -> Result<Self> {
        BoundingBox::new(corners.south_west, corners.north_east)
    }
}

impl BoundingBox {
    /// Creates a bounding box from its corners.
    ///
    /// Fails if the south-west latitude is greater than the north-east one.
    /// Longitudes are taken as given.
    ///
    /// # Example
    /// ```
    /// use geokit::{BoundingBox, Coordinate};
    ///
    /// assert!(BoundingBox::new(Coordinate::new(1.0, 90.0), Coordinate::new(0.0, 90.0)).is_err());
    /// ```
    pub fn new(south_west: Coordinate, north_east: Coordinate) -> Result<Self> {
        // Written so that a NaN latitude is rejected as well.
        if !(south_west.latitude <= north_east.latitude) {
            tracing::debug!(
                south = south_west.latitude,
                north = north_east.latitude,
                "rejected bounding box with inverted latitudes"
            );
            return Err(GeoError::InvertedLatitudes {
                south: south_west.latitude,
                north: north_east.latitude,
            });
        }

        Ok(Self { south_west, north_east })
    }

    /// Zero-span box at a single coordinate.
    #[inline]
    pub fn from_point(point: Coordinate) -> Self {
        Self { south_west: point, north_east: point }
    }

    /// South-west corner.
    #[inline]
    pub fn south_west(&self) -> Coordinate {
        self.south_west
    }

    /// North-east corner.
    #[inline]
    pub fn north_east(&self) -> Coordinate {
        self.north_east
    }

    /// Returns true if the box wraps eastward through ±180 degrees.
    #[inline]
    pub fn crosses_antimeridian(&self) -> bool {
        self.south_west.longitude > self.north_east.longitude
    }

    /// Center of the box, renormalized when the box wraps.
    pub fn center(&self) -> Coordinate {
        let latitude = (self.south_west.latitude + self.north_east.latitude) / 2.0;

        let longitude = if self.crosses_antimeridian() {
            normalize_longitude((self.south_west.longitude + self.north_east.longitude + 360.0) / 2.0)
        } else {
            (self.south_west.longitude + self.north_east.longitude) / 2.0
        };

        Coordinate::new(latitude, longitude)
    }

    /// Angular extent as a (latitude span, longitude span) pair.
    pub fn span(&self) -> Coordinate {
        Coordinate::new(
            self.north_east.latitude - self.south_west.latitude,
            longitude_span(self.south_west.longitude, self.north_east.longitude),
        )
    }

    /// Returns true if the coordinate lies inside the box or on its edge.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        coordinate.latitude >= self.south_west.latitude
            && coordinate.latitude <= self.north_east.latitude
            && self.contains_longitude(coordinate.longitude)
    }

    fn contains_longitude(&self, longitude: f64) -> bool {
        interval_contains(self.south_west.longitude, self.north_east.longitude, longitude)
    }

    /// Smallest box containing both this box and `coordinate`.
    ///
    /// When the coordinate is outside the longitude range, the box grows
    /// towards whichever side gives the smaller longitude span. Equal spans
    /// grow east.
    ///
    /// # Example
    /// ```
    /// use geokit::{BoundingBox, Coordinate};
    ///
    /// let bbox = BoundingBox::new(Coordinate::new(0.0, 170.0), Coordinate::new(10.0, 175.0))?;
    /// let extended = bbox.extend(&Coordinate::new(5.0, -170.0));
    /// assert!(extended.crosses_antimeridian());
    /// assert_eq!(extended.north_east().longitude, -170.0);
    /// # Ok::<(), geokit::GeoError>(())
    /// ```
    pub fn extend(&self, coordinate: &Coordinate) -> Self {
        let south = self.south_west.latitude.min(coordinate.latitude);
        let north = self.north_east.latitude.max(coordinate.latitude);
        let mut west = self.south_west.longitude;
        let mut east = self.north_east.longitude;

        if !self.contains_longitude(coordinate.longitude) {
            let east_span = longitude_span(west, coordinate.longitude);
            let west_span = longitude_span(coordinate.longitude, east);

            if east_span <= west_span {
                tracing::trace!(east_span, west_span, "extending bounding box east");
                east = coordinate.longitude;
            } else {
                tracing::trace!(east_span, west_span, "extending bounding box west");
                west = coordinate.longitude;
            }
        }

        Self {
            south_west: Coordinate::new(south, west),
            north_east: Coordinate::new(north, east),
        }
    }

    /// Smallest box containing both boxes.
    ///
    /// The longitude range is the shortest eastward interval covering both
    /// boxes' ranges. Of two equally short candidates the one with the
    /// smaller west longitude wins, so `a.union(&b) == b.union(&a)`. When the
    /// two ranges together go all the way round, the result spans
    /// `-180..180`, the one place a corner longitude of -180 is produced.
    ///
    /// # Example
    /// ```
    /// use geokit::{BoundingBox, Coordinate};
    ///
    /// let a = BoundingBox::new(Coordinate::new(0.0, 0.0), Coordinate::new(10.0, 10.0))?;
    /// let b = BoundingBox::new(Coordinate::new(0.0, 20.0), Coordinate::new(10.0, -20.0))?;
    ///
    /// let union = a.union(&b);
    /// assert_eq!(union, b.union(&a));
    /// assert!(union.contains(&Coordinate::new(5.0, 180.0)));
    /// # Ok::<(), geokit::GeoError>(())
    /// ```
    pub fn union(&self, other: &BoundingBox) -> Self {
        let south = self.south_west.latitude.min(other.south_west.latitude);
        let north = self.north_east.latitude.max(other.north_east.latitude);

        let a = (self.south_west.longitude, self.north_east.longitude);
        let b = (other.south_west.longitude, other.north_east.longitude);

        let (west, east) = [a, b, (a.0, b.1), (b.0, a.1), FULL_LONGITUDE]
            .into_iter()
            .filter(|&candidate| interval_covers(candidate, a) && interval_covers(candidate, b))
            .min_by(|x, y| {
                longitude_span(x.0, x.1)
                    .total_cmp(&longitude_span(y.0, y.1))
                    .then(x.0.total_cmp(&y.0))
                    .then(x.1.total_cmp(&y.1))
            })
            .unwrap_or(FULL_LONGITUDE);

        if (west, east) == FULL_LONGITUDE {
            tracing::trace!(?a, ?b, "union covers every longitude");
        }

        Self {
            south_west: Coordinate::new(south, west),
            north_east: Coordinate::new(north, east),
        }
    }

    /// Grows the box by moving every edge `distance` outwards.
    ///
    /// Latitudes saturate at the poles. Once an edge reaches a pole every
    /// meridian passes through the box, so the result spans all longitudes.
    /// A box that would wrap the whole globe does the same. All longitudes
    /// are written as `-180..180`, the one place a corner longitude of -180
    /// is produced.
    pub fn expand(&self, distance: Distance) -> Self {
        let angular = distance.meters() / EARTH_RADIUS_M;

        let south = if self.south_west.latitude.to_radians() - angular < -FRAC_PI_2 {
            -90.0
        } else {
            endpoint(&self.south_west, 180.0, distance).latitude
        };
        let north = if self.north_east.latitude.to_radians() + angular > FRAC_PI_2 {
            90.0
        } else {
            endpoint(&self.north_east, 0.0, distance).latitude
        };

        if angular > 0.0 && (south <= -90.0 || north >= 90.0) {
            tracing::trace!(south, north, "expanded bounding box reaches a pole");
            return Self {
                south_west: Coordinate::new(south, FULL_LONGITUDE.0),
                north_east: Coordinate::new(north, FULL_LONGITUDE.1),
            };
        }

        let mut west = along_parallel(&self.south_west, 270.0, distance);
        let mut east = along_parallel(&self.north_east, 90.0, distance);

        let span = longitude_span(self.south_west.longitude, self.north_east.longitude);
        let grown = longitude_span(west, self.south_west.longitude)
            + longitude_span(self.north_east.longitude, east);
        if span + grown >= 360.0 {
            tracing::trace!(span, grown, "expanded bounding box covers every longitude");
            (west, east) = FULL_LONGITUDE;
        }

        Self {
            south_west: Coordinate::new(south, west),
            north_east: Coordinate::new(north, east),
        }
    }

    /// Shrinks the box by moving every edge `distance` inwards.
    ///
    /// An axis that would be shrunk past its opposite edge collapses onto
    /// the box center. A corner sitting on a pole keeps its longitude.
    pub fn shrink(&self, distance: Distance) -> Self {
        let center = self.center();
        let angular = distance.meters() / EARTH_RADIUS_M;

        let lat_span = self.north_east.latitude - self.south_west.latitude;
        let (south, north) = if 2.0 * angular.to_degrees() > lat_span {
            tracing::trace!(lat_span, "shrink collapsed latitude onto center");
            (center.latitude, center.latitude)
        } else {
            (
                endpoint(&self.south_west, 0.0, distance).latitude,
                endpoint(&self.north_east, 180.0, distance).latitude,
            )
        };

        let west = along_parallel(&self.south_west, 90.0, distance);
        let east = along_parallel(&self.north_east, 270.0, distance);

        let lng_span = longitude_span(self.south_west.longitude, self.north_east.longitude);
        let shrunk = longitude_span(self.south_west.longitude, west)
            + longitude_span(east, self.north_east.longitude);
        let (west, east) = if shrunk > lng_span {
            tracing::trace!(lng_span, shrunk, "shrink collapsed longitude onto center");
            (center.longitude, center.longitude)
        } else {
            (west, east)
        };

        Self {
            south_west: Coordinate::new(south, west),
            north_east: Coordinate::new(north, east),
        }
    }

    /// Closed ring tracing the box counter-clockwise from the south-west corner.
    pub fn to_polygon(&self) -> Polygon {
        let south = self.south_west.latitude;
        let west = self.south_west.longitude;
        let north = self.north_east.latitude;
        let east = self.north_east.longitude;

        Polygon::from_vec_unchecked(vec![
            self.south_west,
            Coordinate::new(south, east),
            self.north_east,
            Coordinate::new(north, west),
            self.south_west,
        ])
    }
}

/// Longitude range written for boxes that cover every meridian.
const FULL_LONGITUDE: (f64, f64) = (-180.0, 180.0);

/// Longitude reached by travelling `distance` due east (90) or west (270)
/// from `corner`.
///
/// On a pole there is no parallel to travel along, so the longitude stays.
fn along_parallel(corner: &Coordinate, heading: f64, distance: Distance) -> f64 {
    if corner.latitude.abs() >= 90.0 {
        corner.longitude
    } else {
        endpoint(corner, heading, distance).longitude
    }
}

/// Returns true if `longitude` lies on the eastward interval `west..=east`.
#[inline]
fn interval_contains(west: f64, east: f64, longitude: f64) -> bool {
    if west > east {
        longitude >= west || longitude <= east
    } else {
        longitude >= west && longitude <= east
    }
}

/// Returns true if the longitude interval `outer` contains all of `inner`.
fn interval_covers(outer: (f64, f64), inner: (f64, f64)) -> bool {
    if longitude_span(outer.0, outer.1) >= 360.0 {
        return true;
    }

    // Both ends inside is not enough: `inner` could leave `outer` and come
    // back round. It is covered only when its west end comes first.
    interval_contains(outer.0, outer.1, inner.0)
        && interval_contains(outer.0, outer.1, inner.1)
        && longitude_span(outer.0, inner.0) <= longitude_span(outer.0, inner.1)
}

/// Eastward angular distance from `west` to `east`.
#[inline]
fn longitude_span(west: f64, east: f64) -> f64 {
    if west > east {
        360.0 - (west - east)
    } else {
        east - west
    }
}
