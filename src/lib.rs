//! # gcjtrans
//!
//! Coordinate transformer between WGS84, GCJ02 and BD09,
//! the reference systems used by web maps in and around China.
//!
//! - WGS84: the global GPS datum, positions reported by receivers
//! - GCJ02: WGS84 perturbed by a non-linear offset, mandated for public maps in mainland China
//! - BD09: GCJ02 further twisted in polar coordinates, used by Baidu Maps
//!
//! ```
//! use gcjtrans::*;
//!
//! // A station reported in WGS84, to be put on a GCJ02 map
//! let (lng, lat) = wgs84_to_gcj02(121.0, 31.0);
//! // Prints (121.0043642117433, 30.997849287527668)
//! println!("{:?}", (lng, lat));
//!
//! // Approximate inverse, the error is less than 1e-4 degree
//! let (lng, lat) = gcj02_to_wgs84(lng, lat);
//! assert!((lng - 121.0).abs() < 1e-4 && (lat - 31.0).abs() < 1e-4);
//!
//! // Outside of China, WGS84 and GCJ02 coincide
//! assert_eq!(wgs84_to_gcj02(-74.0, 40.7), (-74.0, 40.7));
//! ```
//!
//! Features:
//!
//! - Pure functions, no state, no I/O, safe to call from any thread
//! - All six conversions between WGS84, GCJ02 and BD09
//! - Runtime dispatch by [`Crs`], and batch conversion in [`transform`]
//! - Type-level tagged [`Coordinate`](crs::Coordinate) preventing double conversion
//! - No input validation on the conversions, NaN and infinity propagate;
//!   use [`Point::try_new`] for checked construction
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for [`Point`] and [`Crs`] only if the feature `serde` is enabled.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use gcjtrans::{Crs, Point};
//!
//! let json = serde_json::to_string(&(Crs::GCJ02, Point::new(121.5, 31.25)))?;
//! assert_eq!(json, r#"["GCJ02",{"longitude":121.5,"latitude":31.25}]"#);
//!
//! let result: (Crs, Point) = serde_json::from_str(&json)?;
//! assert_eq!(result, (Crs::GCJ02, Point::new(121.5, 31.25)));
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```

#[doc(inline)]
pub use bd09::{bd09_to_gcj02, gcj02_to_bd09};
#[doc(inline)]
pub use crs::Crs;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use gcj02::{gcj02_to_wgs84, wgs84_to_gcj02};
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use transform::{bd09_to_wgs84, wgs84_to_bd09};

pub mod bd09;
pub mod crs;
pub mod error;
pub mod gcj02;
pub mod point;
pub mod transform;
