//! Provides [`Crs`] and the type-level tagged [`Coordinate`].
use std::fmt::{Display, Formatter};
use std::marker::PhantomData;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{Error, Point, Result};

/// Represents a coordinate reference system.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> Result<()> {
/// assert_eq!("gcj02".parse::<Crs>()?, Crs::GCJ02);
/// assert_eq!(Crs::BD09.to_string(), "BD09");
///
/// let (lng, lat) = Crs::WGS84.transform(Crs::GCJ02, 121.0, 31.0);
/// assert_eq!((lng, lat), wgs84_to_gcj02(121.0, 31.0));
/// # Ok(())}
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Crs {
    /// The global satellite-positioning datum.
    WGS84,
    /// The datum mandated for public mapping in mainland China.
    GCJ02,
    /// The datum of Baidu Maps.
    BD09,
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::WGS84 => f.write_str("WGS84"),
            Self::GCJ02 => f.write_str("GCJ02"),
            Self::BD09 => f.write_str("BD09"),
        }
    }
}

impl FromStr for Crs {
    type Err = Error;

    /// Makes a [`Crs`] from its name, case-insensitive.
    ///
    /// This accepts `gps` for WGS84, `mars` and `amap` for GCJ02,
    /// and `baidu` for BD09 too.
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" | "gps" => Ok(Self::WGS84),
            "gcj02" | "gcj-02" | "mars" | "amap" => Ok(Self::GCJ02),
            "bd09" | "bd-09" | "baidu" => Ok(Self::BD09),
            _ => {
                log::debug!("rejected coordinate reference system '{s}'");
                Err(Error::new_parse_crs(s))
            }
        }
    }
}

impl Crs {
    /// Returns the (longitude, latitude) in `target` of the position in `self`.
    ///
    /// This is the identity when `self` equals to `target`.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// assert_eq!(
    ///     Crs::BD09.transform(Crs::WGS84, 121.01, 31.0),
    ///     bd09_to_wgs84(121.01, 31.0)
    /// );
    /// assert_eq!(Crs::GCJ02.transform(Crs::GCJ02, 121.0, 31.0), (121.0, 31.0));
    /// ```
    #[must_use]
    pub fn transform(self, target: Crs, lng: f64, lat: f64) -> (f64, f64) {
        log::trace!("transform {self} to {target}");

        match (self, target) {
            (Self::WGS84, Self::GCJ02) => crate::wgs84_to_gcj02(lng, lat),
            (Self::WGS84, Self::BD09) => crate::wgs84_to_bd09(lng, lat),
            (Self::GCJ02, Self::WGS84) => crate::gcj02_to_wgs84(lng, lat),
            (Self::GCJ02, Self::BD09) => crate::gcj02_to_bd09(lng, lat),
            (Self::BD09, Self::WGS84) => crate::bd09_to_wgs84(lng, lat),
            (Self::BD09, Self::GCJ02) => crate::bd09_to_gcj02(lng, lat),
            (Self::WGS84, Self::WGS84) | (Self::GCJ02, Self::GCJ02) | (Self::BD09, Self::BD09) => {
                (lng, lat)
            }
        }
    }

    /// Returns the [`Point`] in `target` of the `point` in `self`.
    ///
    /// see [`Crs::transform`].
    #[inline]
    #[must_use]
    pub fn transform_point(self, target: Crs, point: &Point) -> Point {
        self.transform(target, point.longitude, point.latitude).into()
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for super::Wgs84 {}
    impl Sealed for super::Gcj02 {}
    impl Sealed for super::Bd09 {}
}

/// The type-level tag of a coordinate reference system.
///
/// This is sealed, implemented by [`Wgs84`], [`Gcj02`] and [`Bd09`] only.
pub trait Datum: private::Sealed {
    /// The runtime counterpart.
    const CRS: Crs;
}

/// The tag of WGS84.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Wgs84;

/// The tag of GCJ02.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Gcj02;

/// The tag of BD09.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct Bd09;

impl Datum for Wgs84 {
    const CRS: Crs = Crs::WGS84;
}

impl Datum for Gcj02 {
    const CRS: Crs = Crs::GCJ02;
}

impl Datum for Bd09 {
    const CRS: Crs = Crs::BD09;
}

/// Represents a [`Point`] tagged with its coordinate reference system by type.
///
/// The tag tracks which system the value is currently in,
/// so a converted position is never converted again by mistake.
/// Converting into the same system is the identity.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// use gcjtrans::crs::{Bd09, Coordinate, Gcj02, Wgs84};
///
/// let station = Coordinate::<Wgs84>::new(121.0, 31.0);
///
/// let marker: Coordinate<Gcj02> = station.to();
/// assert_eq!(marker.crs(), Crs::GCJ02);
/// assert_eq!(marker.point(), &Point::from(wgs84_to_gcj02(121.0, 31.0)));
///
/// // No double conversion
/// let again: Coordinate<Gcj02> = marker.to();
/// assert_eq!(again, marker);
///
/// let baidu = station.to::<Bd09>();
/// assert_eq!(baidu.point(), &Point::from(wgs84_to_bd09(121.0, 31.0)));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Coordinate<D: Datum> {
    point: Point,
    datum: PhantomData<D>,
}

impl<D: Datum> From<Point> for Coordinate<D> {
    #[inline]
    fn from(point: Point) -> Self {
        Self::from_point(point)
    }
}

impl<D: Datum> From<Coordinate<D>> for Point {
    #[inline]
    fn from(value: Coordinate<D>) -> Self {
        value.point
    }
}

impl<D: Datum> Display for Coordinate<D> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.point, D::CRS)
    }
}

impl<D: Datum> Coordinate<D> {
    /// Makes a [`Coordinate`].
    ///
    /// This does not check the value range.
    #[inline]
    #[must_use]
    pub const fn new(longitude: f64, latitude: f64) -> Self {
        Self::from_point(Point::new(longitude, latitude))
    }

    /// Makes a [`Coordinate`] from a [`Point`] known to be in `D`.
    #[inline]
    #[must_use]
    pub const fn from_point(point: Point) -> Self {
        Self {
            point,
            datum: PhantomData,
        }
    }

    /// Returns the untagged [`Point`].
    #[inline]
    #[must_use]
    pub const fn point(&self) -> &Point {
        &self.point
    }

    /// Returns the coordinate reference system of `self`.
    #[inline]
    #[must_use]
    pub const fn crs(&self) -> Crs {
        D::CRS
    }

    /// Returns the position converted into `T`.
    #[inline]
    #[must_use]
    pub fn to<T: Datum>(&self) -> Coordinate<T> {
        Coordinate::from_point(D::CRS.transform_point(T::CRS, &self.point))
    }
}
