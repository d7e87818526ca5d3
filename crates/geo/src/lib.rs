//! Geospatial helpers for the restroom finder.
//!
//! This crate provides:
//! - Haversine great-circle distance
//! - Human-readable distance labels ("500m", "2.3km")
//! - Parsing of `LAT,LON` coordinate strings
//!
//! # Example
//!
//! ```
//! use restroom_geo::{distance_label, haversine_distance, Coordinate};
//!
//! let irvine = Coordinate::new(33.6846, -117.8265);
//! let campus = Coordinate::new(33.6405, -117.8443);
//!
//! let km = haversine_distance(&irvine, &campus);
//! assert!((km - 5.2).abs() < 0.2);
//! assert_eq!(distance_label(&irvine, &campus), "5.2km");
//! ```

mod error;
mod format;
mod haversine;

pub use error::{GeoError, Result};
pub use format::{distance_label, format_distance, format_tenths, DistanceLabel};
pub use haversine::{haversine_distance, haversine_distance_meters, EARTH_RADIUS_KM, EARTH_RADIUS_M};

use std::fmt;
use std::str::FromStr;

/// A geographic coordinate with latitude and longitude.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Latitude in degrees
    pub latitude: f64,
    /// Longitude in degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Creates a new coordinate.
    ///
    /// No range check is applied; distance math accepts any real-valued degrees.
    #[inline]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }

    /// Returns true if latitude is within ±90 and longitude within ±180.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.latitude >= -90.0
            && self.latitude <= 90.0
            && self.longitude >= -180.0
            && self.longitude <= 180.0
    }

    /// Converts degrees to radians for internal calculations.
    #[inline]
    pub(crate) fn to_radians(self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Returns the coordinate as a `(latitude, longitude)` pair.
    #[inline]
    pub fn as_pair(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((lat, lng): (f64, f64)) -> Self {
        Self::new(lat, lng)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Coordinate {
    type Err = GeoError;

    /// Parses `"LAT,LON"` (whitespace around either part is ignored).
    fn from_str(s: &str) -> Result<Self> {
        let (lat, lng) = s
            .split_once(',')
            .ok_or_else(|| GeoError::InvalidCoordinate(format!("expected LAT,LON, got '{s}'")))?;

        let parse = |part: &str, axis: &str| {
            part.trim().parse::<f64>().map_err(|_| {
                GeoError::InvalidCoordinate(format!("{axis} '{}' is not a number", part.trim()))
            })
        };

        let latitude = parse(lat, "latitude")?;
        let longitude = parse(lng, "longitude")?;

        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(GeoError::InvalidCoordinate(format!("non-finite value in '{s}'")));
        }

        Ok(Self::new(latitude, longitude))
    }
}
