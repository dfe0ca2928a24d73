//! Provides [`Point`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Axis;
use crate::{Error, Result};

/// Returns the normalized latitude into -90.0 <= and <= 90.0.
#[inline]
fn normalize_latitude(t: f64) -> f64 {
    if t.is_nan() || (-90.0..=90.0).contains(&t) {
        t
    } else {
        match t % 360.0 {
            s if s.lt(&-270.0) || s.gt(&270.0) => s - f64::copysign(360.0, s),
            s if s.lt(&-90.0) || s.gt(&90.0) => f64::copysign(180.0, s) - s,
            s => s,
        }
    }
}

/// Returns the normalize longitude -180.0 <= and <= 180.0.
#[inline]
fn normalize_longitude(t: f64) -> f64 {
    if t.is_nan() || (-180.0..=180.0).contains(&t) {
        t
    } else {
        match t % 360.0 {
            s if s.lt(&-180.0) || s.gt(&180.0) => s - f64::copysign(360.0, s),
            s => s,
        }
    }
}

/// Represents a position on the Earth, a pair longitude and latitude.
///
/// The pair carries no coordinate reference system,
/// see [`Coordinate`](crate::crs::Coordinate) for the tagged one.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> Result<()> {
/// let point = Point::new(121.0, 31.0);
/// assert_eq!(point.longitude(), 121.0);
/// assert_eq!(point.latitude(), 31.0);
///
/// // Parse "lng,lat"
/// let point: Point = "121.0,31.0".parse()?;
/// assert_eq!(point, Point::new(121.0, 31.0));
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
}

impl From<(f64, f64)> for Point {
    /// see [`Point::new()`]
    #[inline]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<[f64; 2]> for Point {
    /// see [`Point::new()`]
    #[inline]
    fn from(rhs: [f64; 2]) -> Self {
        Self::new(rhs[0], rhs[1])
    }
}

impl From<Point> for (f64, f64) {
    #[inline]
    fn from(value: Point) -> Self {
        (value.longitude, value.latitude)
    }
}

impl Display for Point {
    /// Returns a `"lng,lat"` notation.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// assert_eq!(Point::new(121.5, 31.25).to_string(), "121.5,31.25");
    /// ```
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.longitude, self.latitude)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Makes a [`Point`] from a `"lng,lat"` notation,
    /// as web-map geocoding services return.
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// # fn main() -> Result<()> {
    /// assert_eq!("121.5,31.25".parse::<Point>()?, Point::new(121.5, 31.25));
    /// assert_eq!(" 121.5 , 31.25 ".parse::<Point>()?, Point::new(121.5, 31.25));
    ///
    /// assert!("121.5".parse::<Point>().is_err());
    /// assert!("121.5,31.25,0.0".parse::<Point>().is_err());
    /// assert!("a,b".parse::<Point>().is_err());
    /// # Ok(())}
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.split(',');

        let (Some(lng), Some(lat), None) = (parts.next(), parts.next(), parts.next()) else {
            log::debug!("rejected point '{s}': expected 'lng,lat'");
            return Err(Error::new_parse_point(s));
        };

        match (lng.trim().parse::<f64>(), lat.trim().parse::<f64>()) {
            (Ok(lng), Ok(lat)) => Ok(Self::new(lng, lat)),
            _ => {
                log::debug!("rejected point '{s}': not a number");
                Err(Error::new_parse_point(s))
            }
        }
    }
}

impl Point {
    /// Makes a [`Point`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::new(121.0, 31.0);
    /// assert_eq!(point.longitude(), 121.0);
    /// assert_eq!(point.latitude(), 31.0);
    /// ```
    #[inline]
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }

    /// Makes a [`Point`] with checking.
    ///
    /// # Errors
    ///
    /// If `longitude` and/or `latitude` is not finite or out-of-range,
    /// `longitude` must satisfy -180.0 <= and <= 180.0
    /// and `latitude` does -90.0 <= and <= 90.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// # fn main() -> Result<()> {
    /// let point = Point::try_new(121.0, 31.0)?;
    /// assert_eq!(point, Point::new(121.0, 31.0));
    ///
    /// // If out-of-range, returns Err
    /// assert!(Point::try_new(181.0, 31.0).is_err());
    /// assert!(Point::try_new(121.0, 91.0).is_err());
    /// assert!(Point::try_new(f64::NAN, 31.0).is_err());
    /// assert!(Point::try_new(121.0, f64::INFINITY).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(longitude: f64, latitude: f64) -> Result<Self> {
        macro_rules! check {
            ($v:ident, $axis:expr, $bound:expr) => {
                if !$v.is_finite() {
                    log::debug!("rejected {}: {:?}", $axis, $v);
                    return Err(Error::new_not_finite($axis));
                }
                if $v.lt(&-$bound) || $bound.lt(&$v) {
                    log::debug!("rejected {}: {:?}", $axis, $v);
                    return Err(Error::new_out_of_range($axis, -$bound, $bound));
                }
            };
        }

        check!(longitude, Axis::Longitude, 180.0);
        check!(latitude, Axis::Latitude, 90.0);

        Ok(Self::new(longitude, latitude))
    }

    /// Returns the longitude of `self`.
    #[inline]
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the latitude of `self`.
    #[inline]
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns `true` if `self` is outside of the area GCJ02 offsets.
    ///
    /// see [`is_outside_china`](crate::gcj02::is_outside_china).
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// assert!(!Point::new(121.0, 31.0).is_outside_china());
    /// assert!(Point::new(-74.0, 40.7).is_outside_china());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_outside_china(&self) -> bool {
        crate::gcj02::is_outside_china(self.longitude, self.latitude)
    }

    /// Makes a normalized [`Point`] from `self`.
    ///
    /// The result has normalized [`longitude`](Point::longitude)
    /// and [`latitude`](Point::latitude) which value -180.0 <= and <= 180.0,
    /// and -90.0 <= and <= 90.0 respectively.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::new(200.0, 100.0);
    ///
    /// assert_eq!(point.normalize(), Point::new(-160.0, 80.0));
    /// ```
    #[must_use]
    pub fn normalize(&self) -> Self {
        Self {
            longitude: normalize_longitude(self.longitude),
            latitude: normalize_latitude(self.latitude),
        }
    }
}
