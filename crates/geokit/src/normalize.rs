//! Normalization of raw degree values into canonical coordinate ranges.
//!
//! Latitudes land in `[-90, 90]`, longitudes in `(-180, 180]`. Both functions
//! are total over finite input and idempotent.

/// Normalizes a latitude into `[-90, 90]`.
///
/// Values past a pole are reflected back over it, so `100` becomes `80` and
/// `180` becomes `0`. Values further out are first wrapped by whole turns.
///
/// # Example
/// ```
/// use geokit::normalize_latitude;
///
/// assert_eq!(normalize_latitude(100.0), 80.0);
/// assert_eq!(normalize_latitude(-95.0), -85.0);
/// ```
#[inline]
pub fn normalize_latitude(latitude: f64) -> f64 {
    if (-90.0..=90.0).contains(&latitude) {
        return latitude;
    }

    let wrapped = normalize_longitude(latitude);

    if wrapped > 90.0 {
        180.0 - wrapped
    } else if wrapped < -90.0 {
        -180.0 - wrapped
    } else {
        wrapped
    }
}

/// Normalizes a longitude into `(-180, 180]`.
///
/// `-180` is represented as `180`.
///
/// # Example
/// ```
/// use geokit::normalize_longitude;
///
/// assert_eq!(normalize_longitude(-545.0), 175.0);
/// assert_eq!(normalize_longitude(-180.0), 180.0);
/// ```
#[inline]
pub fn normalize_longitude(longitude: f64) -> f64 {
    let reduced = longitude % 360.0;

    if reduced > 180.0 {
        reduced - 360.0
    } else if reduced <= -180.0 {
        reduced + 360.0
    } else {
        reduced
    }
}
