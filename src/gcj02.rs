//! Provides the conversion between WGS84 and GCJ02.
//!
//! GCJ02 perturbs a WGS84 position by an empirical offset,
//! a polynomial in the offset from (105°E, 35°N) with harmonic bands,
//! scaled into degrees by the radii of curvature of the Krasovsky 1940 ellipsoid.
//! The offset applies only inside [`is_outside_china`]'s bounding box.
use std::f64::consts::PI;

/// The semi-major axis \[m\] of the Krasovsky 1940 ellipsoid.
pub const SEMI_MAJOR_AXIS: f64 = 6378245.0;

/// The squared eccentricity of the Krasovsky 1940 ellipsoid.
#[allow(clippy::excessive_precision)]
pub const ECCENTRICITY_SQUARED: f64 = 0.00669342162296594323;

/// Returns `true` if (`lng`, `lat`) is outside of the area the offset applies.
///
/// The area is a rough box around mainland China, not the border.
///
/// # Example
///
/// ```
/// # use gcjtrans::gcj02::is_outside_china;
/// #
/// assert!(!is_outside_china(121.0, 31.0));
/// assert!(is_outside_china(139.69, 35.69));
/// assert!(is_outside_china(200.0, 10.0));
/// ```
#[inline]
#[must_use]
pub fn is_outside_china(lng: f64, lat: f64) -> bool {
    lng < 72.004 || lng > 137.8347 || lat < 0.8293 || lat > 55.8271
}

/// Returns the raw latitude offset.
///
/// `x` and `y` are the offsets \[deg\] from 105°E and 35°N respectively.
/// The result is not in degree, see [`wgs84_to_gcj02`] for the scaling.
///
/// # Example
///
/// ```
/// # use gcjtrans::gcj02::lat_offset;
/// #
/// assert_eq!(lat_offset(0.0, 0.0), -100.0);
/// ```
#[must_use]
pub fn lat_offset(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

/// Returns the raw longitude offset.
///
/// `x` and `y` are the offsets \[deg\] from 105°E and 35°N respectively.
/// The result is not in degree, see [`wgs84_to_gcj02`] for the scaling.
///
/// # Example
///
/// ```
/// # use gcjtrans::gcj02::lng_offset;
/// #
/// assert_eq!(lng_offset(0.0, 0.0), 300.0);
/// ```
#[must_use]
pub fn lng_offset(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Returns the offset (longitude, latitude) \[deg\] at (`lng`, `lat`).
#[inline]
fn delta(lng: f64, lat: f64) -> (f64, f64) {
    let d_lat = lat_offset(lng - 105.0, lat - 35.0);
    let d_lng = lng_offset(lng - 105.0, lat - 35.0);

    let rad_lat = lat / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - ECCENTRICITY_SQUARED * magic * magic;
    let sqrt_magic = magic.sqrt();

    // meridian and parallel radius of curvature
    let d_lat = d_lat * 180.0
        / ((SEMI_MAJOR_AXIS * (1.0 - ECCENTRICITY_SQUARED)) / (magic * sqrt_magic) * PI);
    let d_lng = d_lng * 180.0 / (SEMI_MAJOR_AXIS / sqrt_magic * rad_lat.cos() * PI);

    (d_lng, d_lat)
}

/// Returns the GCJ02 (longitude, latitude) of the WGS84 position.
///
/// This is the identity outside of China, see [`is_outside_china`].
/// It does not check the value range, NaN propagates to the result.
///
/// # Example
///
/// ```
/// # use gcjtrans::wgs84_to_gcj02;
/// #
/// let (lng, lat) = wgs84_to_gcj02(121.0, 31.0);
/// assert!((lng - 121.0043642117433).abs() < 1e-10);
/// assert!((lat - 30.997849287527668).abs() < 1e-10);
///
/// // Outside of China
/// assert_eq!(wgs84_to_gcj02(200.0, 10.0), (200.0, 10.0));
/// ```
#[must_use]
pub fn wgs84_to_gcj02(lng: f64, lat: f64) -> (f64, f64) {
    if is_outside_china(lng, lat) {
        return (lng, lat);
    }

    let (d_lng, d_lat) = delta(lng, lat);
    (lng + d_lng, lat + d_lat)
}

/// Returns the WGS84 (longitude, latitude) of the GCJ02 position.
///
/// This is an approximate inverse of [`wgs84_to_gcj02`]:
/// it evaluates the offset at the GCJ02 position and subtracts it once,
/// without iteration.
/// The error is less than 1e-4 \[deg\] inside China.
///
/// This is the identity outside of China, see [`is_outside_china`].
///
/// # Example
///
/// ```
/// # use gcjtrans::gcj02_to_wgs84;
/// #
/// let (lng, lat) = gcj02_to_wgs84(121.0043642117433, 30.997849287527668);
/// assert!((lng - 121.0).abs() < 1e-4);
/// assert!((lat - 31.0).abs() < 1e-4);
/// ```
#[must_use]
pub fn gcj02_to_wgs84(lng: f64, lat: f64) -> (f64, f64) {
    if is_outside_china(lng, lat) {
        return (lng, lat);
    }

    let (d_lng, d_lat) = delta(lng, lat);
    (lng * 2.0 - (lng + d_lng), lat * 2.0 - (lat + d_lat))
}

#[cfg(test)]
mod test {
    use super::*;

    const DELTA: f64 = 1e-10;

    const WGS84: [(f64, f64); 4] = [
        (121.0, 31.0),
        (116.397428, 39.90923),
        (113.264385, 23.129112),
        (104.066541, 30.572269),
    ];

    const GCJ02: [(f64, f64); 4] = [
        (121.0043642117433, 30.997849287527668),
        (116.40367162595768, 39.91063350638631),
        (113.26971458288735, 23.126435336538538),
        (104.06904597951714, 30.569814587450697),
    ];

    #[test]
    fn test_is_outside_china() {
        assert!(!is_outside_china(105.0, 35.0));
        assert!(!is_outside_china(72.004, 0.8293));
        assert!(!is_outside_china(137.8347, 55.8271));

        assert!(is_outside_china(72.003, 35.0));
        assert!(is_outside_china(137.8348, 35.0));
        assert!(is_outside_china(105.0, 0.8292));
        assert!(is_outside_china(105.0, 55.8272));

        // Osaka is inside the box
        assert!(!is_outside_china(135.5, 34.7));

        assert!(!is_outside_china(f64::NAN, 35.0));
        assert!(is_outside_china(f64::INFINITY, 35.0));
    }

    #[test]
    fn test_offset() {
        assert_eq!(lat_offset(0.0, 0.0), -100.0);
        assert_eq!(lng_offset(0.0, 0.0), 300.0);

        assert!((lat_offset(16.0, -4.0) - -238.452516158926).abs() < 1e-9);
        assert!((lng_offset(16.0, -4.0) - 416.8078279276256).abs() < 1e-9);
        assert!((lat_offset(11.397428, 4.90923) - 155.83806505908876).abs() < 1e-9);
        assert!((lng_offset(11.397428, 4.90923) - 533.8815280231586).abs() < 1e-9);
    }

    #[test]
    fn test_wgs84_to_gcj02() {
        for ((lng, lat), (e_lng, e_lat)) in WGS84.into_iter().zip(GCJ02) {
            let (a_lng, a_lat) = wgs84_to_gcj02(lng, lat);
            assert!((e_lng - a_lng).abs() < DELTA);
            assert!((e_lat - a_lat).abs() < DELTA);
        }

        // east and south around Shanghai
        let (lng, lat) = wgs84_to_gcj02(121.0, 31.0);
        assert!(lng > 121.0 && (lng - 121.0044).abs() < 0.01);
        assert!(lat < 31.0 && (lat - 30.9978).abs() < 0.01);
    }

    #[test]
    fn test_gcj02_to_wgs84() {
        for ((lng, lat), (e_lng, e_lat)) in GCJ02.into_iter().zip(WGS84) {
            let (a_lng, a_lat) = gcj02_to_wgs84(lng, lat);
            assert!((e_lng - a_lng).abs() < 1e-4);
            assert!((e_lat - a_lat).abs() < 1e-4);
        }

        // single step, not exact
        let (lng, lat) = gcj02_to_wgs84(121.0043642117433, 30.997849287527668);
        assert!((120.99998412506922 - lng).abs() < DELTA);
        assert!((30.99998802471975 - lat).abs() < DELTA);
        assert_ne!((lng, lat), (121.0, 31.0));
    }

    #[test]
    fn test_round_trip() {
        let mut lng = 73.37;
        while lng < 137.0 {
            let mut lat = 1.61;
            while lat < 55.0 {
                let (gcj_lng, gcj_lat) = wgs84_to_gcj02(lng, lat);
                let (a_lng, a_lat) = gcj02_to_wgs84(gcj_lng, gcj_lat);
                assert!((lng - a_lng).abs() < 1e-3, "{lng}, {lat}");
                assert!((lat - a_lat).abs() < 1e-3, "{lng}, {lat}");
                lat += 2.0;
            }
            lng += 2.0;
        }
    }

    #[test]
    fn test_identity_outside_china() {
        for (lng, lat) in [
            (200.0, 10.0),
            (-74.0, 40.7),
            (2.35, 48.85),
            (121.0, 0.5),
            (121.0, 60.0),
            (f64::INFINITY, 31.0),
            (121.0, f64::NEG_INFINITY),
        ] {
            assert_eq!(wgs84_to_gcj02(lng, lat), (lng, lat));
            assert_eq!(gcj02_to_wgs84(lng, lat), (lng, lat));
        }
    }

    #[test]
    fn test_nan() {
        let (lng, lat) = wgs84_to_gcj02(f64::NAN, 31.0);
        assert!(lng.is_nan());
        assert!(lat.is_nan());

        let (lng, lat) = gcj02_to_wgs84(121.0, f64::NAN);
        assert!(lng.is_nan());
        assert!(lat.is_nan());
    }

    #[test]
    fn test_deterministic() {
        for (lng, lat) in WGS84 {
            let e = wgs84_to_gcj02(lng, lat);
            for _ in 0..8 {
                assert_eq!(wgs84_to_gcj02(lng, lat), e);
            }

            let handles = (0..4)
                .map(|_| std::thread::spawn(move || wgs84_to_gcj02(lng, lat)))
                .collect::<Vec<_>>();
            for h in handles {
                assert_eq!(h.join().unwrap(), e);
            }
        }
    }
}
