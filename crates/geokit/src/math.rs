//! Spherical geometry on a mean-radius Earth.
//!
//! Great-circle distance uses the Haversine formula. Headings are initial
//! bearings in degrees clockwise from north.

use crate::{normalize_latitude, normalize_longitude, Coordinate, Distance};

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_372_797.560_856;

/// Calculates the great-circle distance between two coordinates.
///
/// # Example
/// ```
/// use geokit::{distance_haversine, Coordinate};
///
/// let berlin = Coordinate::new(52.5200, 13.4050);
/// let paris = Coordinate::new(48.8566, 2.3522);
///
/// let distance = distance_haversine(&berlin, &paris);
/// assert!((distance.kilometers() - 878.0).abs() < 10.0);
/// ```
#[inline]
pub fn distance_haversine(from: &Coordinate, to: &Coordinate) -> Distance {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    Distance::from_meters(EARTH_RADIUS_M * c)
}

/// Initial bearing from `from` towards `to`, in degrees within `[0, 360)`.
#[inline]
pub fn heading(from: &Coordinate, to: &Coordinate) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();
    let d_lon = lon2 - lon1;

    let y = d_lon.sin() * lat2.cos();
    let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * d_lon.cos();

    (y.atan2(x).to_degrees() + 360.0) % 360.0
}

/// Point halfway along the great circle between two coordinates.
pub fn midpoint(from: &Coordinate, to: &Coordinate) -> Coordinate {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();
    let d_lon = lon2 - lon1;

    let bx = lat2.cos() * d_lon.cos();
    let by = lat2.cos() * d_lon.sin();

    let lat = (lat1.sin() + lat2.sin()).atan2(((lat1.cos() + bx).powi(2) + by.powi(2)).sqrt());
    let lon = lon1 + by.atan2(lat1.cos() + bx);

    Coordinate::normalized(lat.to_degrees(), lon.to_degrees())
}

/// Destination reached by travelling `distance` from `start` along `heading`.
///
/// # Arguments
/// * `start` - Starting coordinate
/// * `heading` - Initial bearing in degrees, clockwise from north
/// * `distance` - Distance travelled along the great circle
///
/// # Example
/// ```
/// use geokit::{endpoint, Coordinate, Distance};
///
/// let start = Coordinate::new(0.0, 0.0);
/// let east = endpoint(&start, 90.0, Distance::new(111.2, "km")?);
/// assert!((east.longitude - 1.0).abs() < 0.01);
/// # Ok::<(), geokit::GeoError>(())
/// ```
pub fn endpoint(start: &Coordinate, heading: f64, distance: Distance) -> Coordinate {
    let (lat1, lon1) = start.to_radians();
    let bearing = heading.to_radians();
    let angular = distance.meters() / EARTH_RADIUS_M;

    let lat2 = (lat1.sin() * angular.cos() + lat1.cos() * angular.sin() * bearing.cos()).asin();
    let lon2 = lon1
        + (bearing.sin() * angular.sin() * lat1.cos())
            .atan2(angular.cos() - lat1.sin() * lat2.sin());

    Coordinate::new(
        normalize_latitude(lat2.to_degrees()),
        normalize_longitude(lon2.to_degrees()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    // Test data: known distances between cities
    const BERLIN: Coordinate = Coordinate::new(52.5200, 13.4050);
    const PARIS: Coordinate = Coordinate::new(48.8566, 2.3522);
    const NEW_YORK: Coordinate = Coordinate::new(40.7128, -74.0060);
    const TOKYO: Coordinate = Coordinate::new(35.6762, 139.6503);

    #[test]
    fn test_berlin_to_paris() {
        let distance = distance_haversine(&BERLIN, &PARIS).kilometers();
        // Expected: ~878 km
        assert!((distance - 878.0).abs() < 5.0, "Berlin-Paris: {}", distance);
    }

    #[test]
    fn test_new_york_to_tokyo() {
        let distance = distance_haversine(&NEW_YORK, &TOKYO).kilometers();
        // Expected: ~10,850 km on this radius
        assert!((distance - 10850.0).abs() < 50.0, "NYC-Tokyo: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert!(distance_haversine(&BERLIN, &BERLIN).meters().abs() < 0.001);
    }

    #[test]
    fn test_symmetry() {
        let d1 = distance_haversine(&BERLIN, &PARIS).meters();
        let d2 = distance_haversine(&PARIS, &BERLIN).meters();
        assert!((d1 - d2).abs() < 0.001);
    }

    #[test]
    fn test_heading_cardinal_directions() {
        let origin = Coordinate::new(0.0, 0.0);
        assert!((heading(&origin, &Coordinate::new(1.0, 0.0)) - 0.0).abs() < 1e-9);
        assert!((heading(&origin, &Coordinate::new(0.0, 1.0)) - 90.0).abs() < 1e-9);
        assert!((heading(&origin, &Coordinate::new(-1.0, 0.0)) - 180.0).abs() < 1e-9);
        assert!((heading(&origin, &Coordinate::new(0.0, -1.0)) - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_on_equator() {
        let mid = midpoint(&Coordinate::new(0.0, 10.0), &Coordinate::new(0.0, 20.0));
        assert!(mid.latitude.abs() < 1e-9);
        assert!((mid.longitude - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_midpoint_across_antimeridian() {
        let mid = midpoint(&Coordinate::new(0.0, 179.0), &Coordinate::new(0.0, -179.0));
        assert!((mid.longitude.abs() - 180.0).abs() < 1e-9, "{}", mid.longitude);
    }

    #[test]
    fn test_endpoint_matches_haversine() {
        let distance = Distance::new(250.0, "km").unwrap();
        let end = endpoint(&BERLIN, 45.0, distance);
        let measured = distance_haversine(&BERLIN, &end).meters();
        assert!((measured - 250_000.0).abs() < 0.01, "{}", measured);
        assert!((heading(&BERLIN, &end) - 45.0).abs() < 1e-6);
    }

    #[test]
    fn test_endpoint_wraps_longitude() {
        let end = endpoint(&Coordinate::new(0.0, 179.5), 90.0, Distance::new(60.0, "nm").unwrap());
        assert!(end.longitude < 0.0 && end.longitude > -180.0, "{}", end.longitude);
    }
}
