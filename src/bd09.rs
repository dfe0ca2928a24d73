//! Provides the conversion between GCJ02 and BD09.
//!
//! BD09 twists GCJ02 in polar coordinates about the origin
//! and shifts the result by a fixed offset.
//! It applies everywhere, there is no boundary.
use std::f64::consts::PI;

/// The longitude shift \[deg\] of BD09.
pub const LNG_SHIFT: f64 = 0.0065;

/// The latitude shift \[deg\] of BD09.
pub const LAT_SHIFT: f64 = 0.006;

/// Returns the BD09 (longitude, latitude) of the GCJ02 position.
///
/// # Example
///
/// ```
/// # use gcjtrans::gcj02_to_bd09;
/// #
/// assert_eq!(gcj02_to_bd09(0.0, 0.0), (0.0065, 0.006));
///
/// let (lng, lat) = gcj02_to_bd09(121.0043642117433, 30.997849287527668);
/// assert!((lng - 121.01094550384269).abs() < 1e-10);
/// assert!((lat - 31.003605834037224).abs() < 1e-10);
/// ```
#[must_use]
pub fn gcj02_to_bd09(lng: f64, lat: f64) -> (f64, f64) {
    let z = (lng * lng + lat * lat).sqrt() + 0.00002 * (lat * PI * 3000.0 / 180.0).sin();
    let theta = lat.atan2(lng) + 0.000003 * (lng * PI * 3000.0 / 180.0).cos();
    (z * theta.cos() + LNG_SHIFT, z * theta.sin() + LAT_SHIFT)
}

/// Returns the GCJ02 (longitude, latitude) of the BD09 position.
///
/// This is the inverse of [`gcj02_to_bd09`],
/// the residual of a round trip is less than 1e-5 \[deg\].
///
/// # Example
///
/// ```
/// # use gcjtrans::bd09_to_gcj02;
/// #
/// assert_eq!(bd09_to_gcj02(0.0065, 0.006), (0.0, 0.0));
///
/// let (lng, lat) = bd09_to_gcj02(121.01094550384269, 31.003605834037224);
/// assert!((lng - 121.0043642117433).abs() < 1e-5);
/// assert!((lat - 30.997849287527668).abs() < 1e-5);
/// ```
#[must_use]
pub fn bd09_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    let x = lng - LNG_SHIFT;
    let y = lat - LAT_SHIFT;
    let z = (x * x + y * y).sqrt() - 0.00002 * (y * PI * 3000.0 / 180.0).sin();
    let theta = y.atan2(x) - 0.000003 * (x * PI * 3000.0 / 180.0).cos();
    (z * theta.cos(), z * theta.sin())
}

#[cfg(test)]
mod test {
    use super::*;

    const DELTA: f64 = 1e-10;

    #[test]
    fn test_origin() {
        assert_eq!(gcj02_to_bd09(0.0, 0.0), (0.0065, 0.006));
        assert_eq!(bd09_to_gcj02(0.0065, 0.006), (0.0, 0.0));

        let (lng, lat) = bd09_to_gcj02(gcj02_to_bd09(0.0, 0.0).0, gcj02_to_bd09(0.0, 0.0).1);
        assert!(lng.abs() < 1e-9);
        assert!(lat.abs() < 1e-9);
    }

    #[test]
    fn test_gcj02_to_bd09() {
        for ((lng, lat), (e_lng, e_lat)) in [
            (
                (121.0043642117433, 30.997849287527668),
                (121.01094550384269, 31.003605834037224),
            ),
            (
                (116.40367162595768, 39.91063350638631),
                (116.41004410170474, 39.916972856075134),
            ),
            (
                (113.26971458288735, 23.126435336538538),
                (113.27613576798366, 23.132723116471205),
            ),
        ] {
            let (a_lng, a_lat) = gcj02_to_bd09(lng, lat);
            assert!((e_lng - a_lng).abs() < DELTA);
            assert!((e_lat - a_lat).abs() < DELTA);
        }
    }

    #[test]
    fn test_round_trip() {
        let mut lng = -179.5;
        while lng < 180.0 {
            let mut lat = -89.5;
            while lat < 90.0 {
                let (bd_lng, bd_lat) = gcj02_to_bd09(lng, lat);
                let (a_lng, a_lat) = bd09_to_gcj02(bd_lng, bd_lat);
                assert!((lng - a_lng).abs() < 1e-5, "{lng}, {lat}");
                assert!((lat - a_lat).abs() < 1e-5, "{lng}, {lat}");
                lat += 3.7;
            }
            lng += 3.7;
        }
    }

    #[test]
    fn test_nan() {
        let (lng, lat) = gcj02_to_bd09(f64::NAN, 31.0);
        assert!(lng.is_nan());
        assert!(lat.is_nan());

        let (lng, lat) = bd09_to_gcj02(121.0, f64::NAN);
        assert!(lng.is_nan());
        assert!(lat.is_nan());
    }
}
