//! Haversine distance calculation.
//!
//! The Haversine formula calculates the great-circle distance between two points
//! on a sphere given their longitudes and latitudes.

use crate::Coordinate;

/// Earth's mean radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Earth's mean radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculates the great-circle distance between two coordinates in kilometers.
///
/// Inputs are not range-checked. Identical points yield exactly zero.
///
/// # Example
/// ```
/// use restroom_geo::{haversine_distance, Coordinate};
///
/// let los_angeles = Coordinate::new(34.0522, -118.2437);
/// let san_francisco = Coordinate::new(37.7749, -122.4194);
///
/// let distance = haversine_distance(&los_angeles, &san_francisco);
/// assert!((distance - 559.0).abs() < 5.0);
/// ```
#[inline]
pub fn haversine_distance(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_KM)
}

/// Calculates the great-circle distance between two coordinates in meters.
#[inline]
pub fn haversine_distance_meters(from: &Coordinate, to: &Coordinate) -> f64 {
    haversine_distance_with_radius(from, to, EARTH_RADIUS_M)
}

#[inline]
fn haversine_distance_with_radius(from: &Coordinate, to: &Coordinate, radius: f64) -> f64 {
    let (lat1, lon1) = from.to_radians();
    let (lat2, lon2) = to.to_radians();

    let d_lat = lat2 - lat1;
    let d_lon = lon2 - lon1;

    let a = (d_lat / 2.0).sin().powi(2)
        + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);

    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    radius * c
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const LOS_ANGELES: Coordinate = Coordinate { latitude: 34.0522, longitude: -118.2437 };
    const SAN_FRANCISCO: Coordinate = Coordinate { latitude: 37.7749, longitude: -122.4194 };
    const LONDON: Coordinate = Coordinate { latitude: 51.5074, longitude: -0.1278 };
    const NEW_YORK: Coordinate = Coordinate { latitude: 40.7128, longitude: -74.0060 };

    #[test]
    fn test_los_angeles_to_san_francisco() {
        let distance = haversine_distance(&LOS_ANGELES, &SAN_FRANCISCO);
        assert!((distance - 559.0).abs() < 5.0, "LA-SF: {}", distance);
    }

    #[test]
    fn test_london_to_new_york() {
        let distance = haversine_distance(&LONDON, &NEW_YORK);
        assert!((distance - 5570.0).abs() < 30.0, "London-NYC: {}", distance);
    }

    #[test]
    fn test_same_point_zero_distance() {
        assert_eq!(haversine_distance(&LONDON, &LONDON), 0.0);
    }

    #[test]
    fn test_out_of_range_input_is_accepted() {
        // 360 degrees of longitude wraps back onto the same meridian
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(10.0, 380.0);
        assert!(haversine_distance(&a, &b) < 1e-6);
    }

    #[test]
    fn test_meters_conversion() {
        let km = haversine_distance(&LONDON, &NEW_YORK);
        let meters = haversine_distance_meters(&LONDON, &NEW_YORK);
        assert!((meters - km * 1000.0).abs() < 1.0);
    }

    proptest! {
        #[test]
        fn prop_identical_points_are_zero(lat in -90.0f64..90.0, lon in -180.0f64..180.0) {
            let p = Coordinate::new(lat, lon);
            prop_assert_eq!(haversine_distance(&p, &p), 0.0);
        }

        #[test]
        fn prop_symmetric(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let a = Coordinate::new(lat1, lon1);
            let b = Coordinate::new(lat2, lon2);
            prop_assert!((haversine_distance(&a, &b) - haversine_distance(&b, &a)).abs() < 1e-9);
        }

        #[test]
        fn prop_bounded_by_half_circumference(
            lat1 in -90.0f64..90.0, lon1 in -180.0f64..180.0,
            lat2 in -90.0f64..90.0, lon2 in -180.0f64..180.0,
        ) {
            let d = haversine_distance(&Coordinate::new(lat1, lon1), &Coordinate::new(lat2, lon2));
            prop_assert!(d >= 0.0);
            prop_assert!(d <= std::f64::consts::PI * EARTH_RADIUS_KM + 1e-6);
        }
    }
}
