//! Provides [`Error`] etc.
use std::fmt::{Display, Formatter};

/// Alias for a `Result<T, gcjtrans::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
///
/// The coordinate conversions themselves never fail,
/// errors come from checked construction and parsing only.
#[derive(Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

/// A detailed cause of [`Error`].
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// The value is NaN or infinite.
    NotFinite {
        /// The axis of the value
        axis: Axis,
    },
    /// The value is out of the valid range.
    OutOfRange {
        /// The axis of the value
        axis: Axis,
        /// Lower bound (inclusive)
        low: f64,
        /// Upper bound (inclusive)
        high: f64,
    },
    /// Invalid `"lng,lat"` string.
    ParsePoint {
        /// Invalid data
        s: String,
    },
    /// Unknown coordinate reference system name.
    ParseCrs {
        /// Invalid data
        s: String,
    },
}

/// An axis of a position used by [`ErrorKind`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Axis {
    Longitude,
    Latitude,
}

impl Error {
    #[cold]
    pub(crate) const fn new_not_finite(axis: Axis) -> Self {
        Self {
            kind: ErrorKind::NotFinite { axis },
        }
    }

    #[cold]
    pub(crate) const fn new_out_of_range(axis: Axis, low: f64, high: f64) -> Self {
        Self {
            kind: ErrorKind::OutOfRange { axis, low, high },
        }
    }

    #[cold]
    pub(crate) fn new_parse_point(s: &str) -> Self {
        Self {
            kind: ErrorKind::ParsePoint { s: s.to_string() },
        }
    }

    #[cold]
    pub(crate) fn new_parse_crs(s: &str) -> Self {
        Self {
            kind: ErrorKind::ParseCrs { s: s.to_string() },
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::NotFinite { axis } => write!(f, "invalid {axis}: not finite"),
            ErrorKind::OutOfRange { axis, low, high } => {
                write!(f, "invalid {axis}: must satisfy {low:?} <= and <= {high:?}")
            }
            ErrorKind::ParsePoint { s } => write!(f, "invalid point: '{s}'"),
            ErrorKind::ParseCrs { s } => write!(f, "unknown coordinate reference system: '{s}'"),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Longitude => f.write_str("longitude"),
            Self::Latitude => f.write_str("latitude"),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::new_not_finite(Axis::Latitude).to_string(),
            "invalid latitude: not finite"
        );
        assert_eq!(
            Error::new_out_of_range(Axis::Longitude, -180.0, 180.0).to_string(),
            "invalid longitude: must satisfy -180.0 <= and <= 180.0"
        );
        assert_eq!(
            Error::new_parse_point("121.0;31.0").to_string(),
            "invalid point: '121.0;31.0'"
        );
        assert_eq!(
            Error::new_parse_crs("cgcs2000").to_string(),
            "unknown coordinate reference system: 'cgcs2000'"
        );
    }

    #[test]
    fn test_kind() {
        let e = Error::new_out_of_range(Axis::Latitude, -90.0, 90.0);
        assert_eq!(
            e.kind(),
            &ErrorKind::OutOfRange {
                axis: Axis::Latitude,
                low: -90.0,
                high: 90.0
            }
        );
    }
}
