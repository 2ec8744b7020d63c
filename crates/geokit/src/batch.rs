//! Batch containment filtering with optional parallelism.
//!
//! Both filters keep the input order. With the `parallel` feature (on by
//! default) the containment tests run on the rayon thread pool.

use crate::{BoundingBox, Coordinate, Polygon};

/// Keeps the coordinates that lie inside `bbox`.
///
/// # Example
/// ```
/// use geokit::{filter_within_bounds, BoundingBox, Coordinate};
///
/// let bbox = BoundingBox::new(Coordinate::new(-10.0, 170.0), Coordinate::new(10.0, -170.0))?;
/// let points = [Coordinate::new(0.0, 180.0), Coordinate::new(0.0, 0.0), Coordinate::new(5.0, -175.0)];
///
/// let inside = filter_within_bounds(&bbox, &points);
/// assert_eq!(inside, vec![points[0], points[2]]);
/// # Ok::<(), geokit::GeoError>(())
/// ```
pub fn filter_within_bounds(bbox: &BoundingBox, coordinates: &[Coordinate]) -> Vec<Coordinate> {
    filter(coordinates, |c| bbox.contains(c))
}

/// Keeps the coordinates that lie inside `polygon`.
pub fn filter_within_polygon(polygon: &Polygon, coordinates: &[Coordinate]) -> Vec<Coordinate> {
    if polygon.is_empty() {
        return Vec::new();
    }

    filter(coordinates, |c| polygon.contains(c))
}

/// Counts how many coordinates lie inside `bbox`.
pub fn count_within_bounds(bbox: &BoundingBox, coordinates: &[Coordinate]) -> usize {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        coordinates.par_iter().filter(|c| bbox.contains(c)).count()
    }

    #[cfg(not(feature = "parallel"))]
    {
        coordinates.iter().filter(|c| bbox.contains(c)).count()
    }
}

#[inline]
fn filter<F>(coordinates: &[Coordinate], keep: F) -> Vec<Coordinate>
where
    F: Fn(&Coordinate) -> bool + Sync,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        coordinates
            .par_iter()
            .filter(|c| keep(*c))
            .copied()
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        coordinates.iter().filter(|c| keep(*c)).copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_points() -> Vec<Coordinate> {
        vec![
            // Berlin
            Coordinate::new(52.5200, 13.4050),
            // Paris
            Coordinate::new(48.8566, 2.3522),
            // London
            Coordinate::new(51.5074, -0.1276),
            // Suva, Fiji (east of the antimeridian)
            Coordinate::new(-18.1416, 178.4419),
            // Apia, Samoa (west of the antimeridian)
            Coordinate::new(-13.8507, -171.7514),
        ]
    }

    #[test]
    fn test_filter_within_bounds_keeps_order() {
        let europe = BoundingBox::new(Coordinate::new(45.0, -5.0), Coordinate::new(55.0, 15.0)).unwrap();
        let inside = filter_within_bounds(&europe, &create_test_points());

        assert_eq!(inside.len(), 3);
        assert_eq!(inside[0], Coordinate::new(52.5200, 13.4050));
        assert_eq!(inside[2], Coordinate::new(51.5074, -0.1276));
    }

    #[test]
    fn test_filter_within_bounds_across_antimeridian() {
        let pacific = BoundingBox::new(Coordinate::new(-25.0, 175.0), Coordinate::new(-10.0, -170.0)).unwrap();
        let inside = filter_within_bounds(&pacific, &create_test_points());

        assert_eq!(inside.len(), 2);
        assert!(inside.iter().all(|c| c.latitude < 0.0));
    }

    #[test]
    fn test_filter_within_polygon() {
        // Pentagon around Berlin and Paris but not London.
        let pentagon =
            Polygon::from_pairs(&[(47.0, 1.0), (53.0, 1.0), (55.0, 8.0), (53.0, 15.0), (47.0, 15.0)]).unwrap();
        let inside = filter_within_polygon(&pentagon, &create_test_points());

        assert_eq!(inside, vec![Coordinate::new(52.5200, 13.4050), Coordinate::new(48.8566, 2.3522)]);
    }

    #[test]
    fn test_filter_within_empty_polygon() {
        assert!(filter_within_polygon(&Polygon::empty(), &create_test_points()).is_empty());
    }

    #[test]
    fn test_count_within_bounds() {
        let world = BoundingBox::new(Coordinate::new(-90.0, -180.0), Coordinate::new(90.0, 180.0)).unwrap();
        assert_eq!(count_within_bounds(&world, &create_test_points()), 5);
    }
}
