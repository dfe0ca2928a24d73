//! Provides the conversions between WGS84 and BD09, and batch conversion.
use crate::{bd09, gcj02, Crs, Point};

/// Returns the BD09 (longitude, latitude) of the WGS84 position.
///
/// This converts via GCJ02, see [`wgs84_to_gcj02`](crate::wgs84_to_gcj02)
/// and [`gcj02_to_bd09`](crate::gcj02_to_bd09).
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let (lng, lat) = wgs84_to_bd09(121.0, 31.0);
/// assert!((lng - 121.01094550384269).abs() < 1e-10);
/// assert!((lat - 31.003605834037224).abs() < 1e-10);
/// ```
#[inline]
#[must_use]
pub fn wgs84_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let (lng, lat) = gcj02::wgs84_to_gcj02(lng, lat);
    bd09::gcj02_to_bd09(lng, lat)
}

/// Returns the WGS84 (longitude, latitude) of the BD09 position.
///
/// This converts via GCJ02, see [`bd09_to_gcj02`](crate::bd09_to_gcj02)
/// and [`gcj02_to_wgs84`](crate::gcj02_to_wgs84),
/// hence it is approximate as [`gcj02_to_wgs84`](crate::gcj02_to_wgs84) is.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let (lng, lat) = bd09_to_wgs84(121.01094550384269, 31.003605834037224);
/// assert!((lng - 121.0).abs() < 1e-3);
/// assert!((lat - 31.0).abs() < 1e-3);
/// ```
#[inline]
#[must_use]
pub fn bd09_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    let (lng, lat) = bd09::bd09_to_gcj02(lng, lat);
    gcj02::gcj02_to_wgs84(lng, lat)
}

/// Returns the points in `to` of the `points` in `from`.
///
/// Each element converts as [`Crs::transform`] does.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// use gcjtrans::transform::transform_all;
///
/// let stations = [Point::new(121.0, 31.0), Point::new(-74.0, 40.7)];
/// let markers = transform_all(Crs::WGS84, Crs::GCJ02, &stations);
///
/// assert_eq!(markers[0], Point::from(wgs84_to_gcj02(121.0, 31.0)));
/// assert_eq!(markers[1], Point::new(-74.0, 40.7));
/// ```
#[must_use]
pub fn transform_all(from: Crs, to: Crs, points: &[Point]) -> Vec<Point> {
    log::trace!("transform {} points from {from} to {to}", points.len());

    if from == to {
        return points.to_vec();
    }

    points
        .iter()
        .map(|p| from.transform_point(to, p))
        .collect()
}

/// Converts the `points` in `from` into `to` in place.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// use gcjtrans::transform::transform_in_place;
///
/// let mut points = [Point::new(0.0, 0.0)];
/// transform_in_place(Crs::GCJ02, Crs::BD09, &mut points);
///
/// assert_eq!(points, [Point::new(0.0065, 0.006)]);
/// ```
pub fn transform_in_place(from: Crs, to: Crs, points: &mut [Point]) {
    log::trace!("transform {} points in place from {from} to {to}", points.len());

    if from == to {
        return;
    }

    for p in points.iter_mut() {
        *p = from.transform_point(to, p);
    }
}
