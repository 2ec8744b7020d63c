//! Polygons as ordered rings of coordinates.

use crate::{BoundingBox, Coordinate, GeoError, Result};
use serde::{Deserialize, Serialize};
use std::slice;

/// An ordered ring of coordinates.
///
/// The ring counts as closed when its first and last vertex are equal; an
/// open ring is treated as implicitly closed by [`Polygon::contains`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Coordinate>", into = "Vec<Coordinate>")]
pub struct Polygon {
    vertices: Vec<Coordinate>,
}

impl Polygon {
    /// Creates a polygon, rejecting the first vertex with a non-finite component.
    ///
    /// # Example
    /// ```
    /// use geokit::{Coordinate, GeoError, Polygon};
    ///
    /// let err = Polygon::new(vec![Coordinate::new(0.0, 0.0), Coordinate::new(f64::NAN, 1.0)]).unwrap_err();
    /// assert!(matches!(err, GeoError::InvalidPosition { index: 1, .. }));
    /// ```
    pub fn new(vertices: Vec<Coordinate>) -> Result<Self> {
        for (index, vertex) in vertices.iter().enumerate() {
            let reason = if !vertex.latitude.is_finite() {
                format!("latitude is {}", vertex.latitude)
            } else if !vertex.longitude.is_finite() {
                format!("longitude is {}", vertex.longitude)
            } else {
                continue;
            };

            tracing::debug!(index, %reason, "rejected polygon vertex");
            return Err(GeoError::InvalidPosition { index, reason });
        }

        Ok(Self { vertices })
    }

    /// Creates a polygon from `(latitude, longitude)` pairs.
    pub fn from_pairs(pairs: &[(f64, f64)]) -> Result<Self> {
        Self::new(pairs.iter().copied().map(Coordinate::from).collect())
    }

    /// Polygon without vertices.
    pub fn empty() -> Self {
        Self::default()
    }

    pub(crate) fn from_vec_unchecked(vertices: Vec<Coordinate>) -> Self {
        Self { vertices }
    }

    /// Returns true if the last vertex equals the first. Empty polygons are open.
    pub fn is_closed(&self) -> bool {
        match (self.vertices.first(), self.vertices.last()) {
            (Some(first), Some(last)) => first == last,
            _ => false,
        }
    }

    /// Returns a copy whose last vertex repeats the first one.
    ///
    /// Already closed and empty polygons come back unchanged.
    pub fn close(&self) -> Self {
        let mut vertices = self.vertices.clone();

        if !self.is_closed() {
            if let Some(first) = self.vertices.first() {
                vertices.push(*first);
            }
        }

        Self { vertices }
    }

    /// Even-odd point-in-polygon test on the plane (x = longitude, y = latitude).
    ///
    /// Rings spanning the antimeridian are not unwrapped first, so they give
    /// wrong answers.
    ///
    /// See <https://wrfranklin.org/Research/Short_Notes/pnpoly.html>.
    pub fn contains(&self, coordinate: &Coordinate) -> bool {
        let Some(last) = self.vertices.last() else {
            return false;
        };

        let x = coordinate.longitude;
        let y = coordinate.latitude;

        let mut x0 = last.longitude;
        let mut y0 = last.latitude;
        let mut inside = false;

        for vertex in &self.vertices {
            let x1 = vertex.longitude;
            let y1 = vertex.latitude;

            if ((y1 > y) != (y0 > y)) && (x < (x0 - x1) * (y - y1) / (y0 - y1) + x1) {
                inside = !inside;
            }

            x0 = x1;
            y0 = y1;
        }

        inside
    }

    /// Smallest bounding box containing every vertex.
    pub fn to_bounding_box(&self) -> Result<BoundingBox> {
        let (first, rest) = self.vertices.split_first().ok_or_else(|| {
            tracing::debug!("bounding box requested for empty polygon");
            GeoError::EmptyPolygon
        })?;

        Ok(rest
            .iter()
            .fold(BoundingBox::from_point(*first), |bbox, vertex| bbox.extend(vertex)))
    }

    /// Number of vertices, counting a closing vertex.
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Returns true if the polygon has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in insertion order.
    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, Coordinate> {
        self.vertices.iter()
    }

    /// Vertices as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[Coordinate] {
        &self.vertices
    }
}

impl TryFrom<Vec<Coordinate>> for Polygon {
    type Error = GeoError;

    fn try_from(vertices: Vec<Coordinate>) -> Result<Self> {
        Self::new(vertices)
    }
}

impl From<Polygon> for Vec<Coordinate> {
    fn from(polygon: Polygon) -> Self {
        polygon.vertices
    }
}

impl<'a> IntoIterator for &'a Polygon {
    type Item = &'a Coordinate;
    type IntoIter = slice::Iter<'a, Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Polygon {
    type Item = Coordinate;
    type IntoIter = std::vec::IntoIter<Coordinate>;

    fn into_iter(self) -> Self::IntoIter {
        self.vertices.into_iter()
    }
}
