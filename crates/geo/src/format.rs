//! Distance labels for list cards and detail views.
//!
//! Distances under one kilometer render as whole meters, everything else as
//! kilometers with one decimal place. The boundary is strict: exactly 1 km
//! renders as `"1.0km"`.
//!
//! One-decimal values round exact ties away from zero (`1.25 -> "1.3"`), the
//! way the mobile client's `toFixed(1)` does. Plain `{:.1}` rounds them to even.

use crate::{haversine_distance, Coordinate};
use std::fmt;

/// A distance ready for display.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistanceLabel {
    /// Sub-kilometer distance, rounded to whole meters
    Meters(u64),
    /// Distance in kilometers, printed with one decimal place
    Kilometers(f64),
}

impl DistanceLabel {
    /// Picks the unit for a distance given in kilometers.
    pub fn from_km(km: f64) -> Self {
        if km < 1.0 {
            // round() is half-away-from-zero, identical to half-up for non-negative input
            Self::Meters((km * 1000.0).round() as u64)
        } else {
            Self::Kilometers(km)
        }
    }
}

impl fmt::Display for DistanceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Meters(m) => write!(f, "{m}m"),
            Self::Kilometers(km) => write!(f, "{}km", format_tenths(*km)),
        }
    }
}

/// Formats with one decimal place, rounding exact ties away from zero.
///
/// A value ties at one decimal only when it is an odd multiple of 0.25,
/// which scaling by 4 detects exactly.
pub fn format_tenths(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters.fract() == 0.0 && quarters % 2.0 != 0.0 {
        let rounded = (value.abs() * 10.0 + 0.5).floor().copysign(value) / 10.0;
        format!("{rounded:.1}")
    } else {
        format!("{value:.1}")
    }
}

/// Formats a distance in kilometers, e.g. `0.5 -> "500m"`, `2.34 -> "2.3km"`.
pub fn format_distance(km: f64) -> String {
    DistanceLabel::from_km(km).to_string()
}

/// Great-circle distance between two points, formatted for display.
pub fn distance_label(from: &Coordinate, to: &Coordinate) -> String {
    format_distance(haversine_distance(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_sub_kilometer_renders_meters() {
        assert_eq!(format_distance(0.5), "500m");
        assert_eq!(format_distance(0.0), "0m");
        assert_eq!(format_distance(0.1234), "123m");
    }

    #[test]
    fn test_kilometers_render_one_decimal() {
        assert_eq!(format_distance(2.34), "2.3km");
        assert_eq!(format_distance(12.0), "12.0km");
    }

    #[test]
    fn test_exact_ties_round_up() {
        assert_eq!(format_distance(1.25), "1.3km");
        assert_eq!(format_distance(2.75), "2.8km");
        assert_eq!(format_tenths(4.25), "4.3");
        assert_eq!(format_tenths(-1.25), "-1.3");
    }

    #[test]
    fn test_near_ties_keep_nearest() {
        // 1.45 is stored just below the tie
        assert_eq!(format_tenths(1.45), "1.4");
        assert_eq!(format_tenths(4.5), "4.5");
        assert_eq!(format_tenths(3.0), "3.0");
        assert_eq!(format_tenths(4.16), "4.2");
    }

    #[test]
    fn test_boundary_is_strictly_less_than_one() {
        assert_eq!(format_distance(0.999_999), "1000m");
        assert_eq!(format_distance(1.0), "1.0km");
    }

    #[test]
    fn test_label_variants() {
        assert_eq!(DistanceLabel::from_km(0.25), DistanceLabel::Meters(250));
        assert_eq!(DistanceLabel::from_km(3.0), DistanceLabel::Kilometers(3.0));
    }

    #[test]
    fn test_distance_label_same_point() {
        let p = Coordinate::new(33.6846, -117.8265);
        assert_eq!(distance_label(&p, &p), "0m");
    }

    #[test]
    fn test_distance_label_half_kilometer_north() {
        // 0.5 km of latitude on a 6371 km sphere
        let origin = Coordinate::new(0.0, 0.0);
        let north = Coordinate::new((0.5 / crate::EARTH_RADIUS_KM).to_degrees(), 0.0);
        assert_eq!(distance_label(&origin, &north), "500m");
    }

    proptest! {
        #[test]
        fn prop_meters_below_one_km(km in 0.0f64..0.999) {
            prop_assert!(format_distance(km).ends_with('m'));
            prop_assert!(!format_distance(km).ends_with("km"));
        }

        #[test]
        fn prop_kilometers_from_one_km(km in 1.0f64..20_000.0) {
            prop_assert!(format_distance(km).ends_with("km"));
        }
    }
}
