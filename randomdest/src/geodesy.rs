//! Spherical-earth geometry: forward projection, midpoint and distance.

use crate::models::Coordinate;

/// Mean equatorial radius. The whole crate treats the earth as a sphere of
/// this radius; the error is negligible at the tens-of-kilometres scale
/// destinations are drawn at.
pub const EARTH_RADIUS_KM: f64 = 6_378.1;

/// Decimal places kept on projected coordinates (~0.11 m at the equator).
const COORDINATE_DECIMALS: i32 = 6;

/// Destination reached by travelling `distance_km` from `origin` along the
/// great circle leaving it at `bearing_deg` (clockwise from north).
///
/// Both output components are rounded to 6 decimal places. Longitude is
/// returned as computed and may leave [-180, 180] near the antimeridian.
pub fn project(origin: Coordinate, bearing_deg: f64, distance_km: f64) -> Coordinate {
    let bearing = bearing_deg.to_radians();
    let angular_distance = distance_km / EARTH_RADIUS_KM;
    let lat1 = origin.lat.to_radians();
    let lon1 = origin.lon.to_radians();

    // Rounding can push the sine a hair past ±1 on paths through a pole.
    let lat2 = f64::asin(
        (lat1.sin() * angular_distance.cos()
            + lat1.cos() * angular_distance.sin() * bearing.cos())
        .clamp(-1.0, 1.0),
    );
    let lon2 = lon1
        + f64::atan2(
            bearing.sin() * angular_distance.sin() * lat1.cos(),
            angular_distance.cos() - lat1.sin() * lat2.sin(),
        );

    Coordinate {
        lat: round_to(lat2.to_degrees(), COORDINATE_DECIMALS),
        lon: round_to(lon2.to_degrees(), COORDINATE_DECIMALS),
    }
}

/// Component-wise mean of two coordinates.
///
/// This is a planar approximation, not the great-circle midpoint. It is
/// only meant for framing a route image over short separations (a few tens
/// of kilometres), where the difference is far below a pixel.
pub fn midpoint(a: Coordinate, b: Coordinate) -> Coordinate {
    Coordinate {
        lat: (a.lat + b.lat) / 2.0,
        lon: (a.lon + b.lon) / 2.0,
    }
}

pub fn haversine_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let dlat = (b.lat - a.lat).to_radians();
    let dlon = (b.lon - a.lon).to_radians();

    let sin_dlat = (dlat / 2.0).sin();
    let sin_dlon = (dlon / 2.0).sin();

    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROUNDING_TOLERANCE: f64 = 1.0000001e-6;

    #[test]
    fn test_project_one_km_north_from_seattle() {
        let origin = Coordinate::new(47.608, -122.335);
        let dest = project(origin, 0.0, 1.0);

        assert!((dest.lat - 47.616983).abs() < 1e-9);
        assert_eq!(dest.lon, -122.335);
    }

    #[test]
    fn test_project_zero_distance_returns_origin() {
        let origin = Coordinate::new(45.0, 5.0);
        let dest = project(origin, 0.0, 0.0);
        assert_eq!(dest, origin);
    }

    #[test]
    fn test_project_east_keeps_latitude() {
        let origin = Coordinate::new(45.0, 5.0);
        let dest = project(origin, 90.0, 10.0);

        assert!((dest.lat - 45.0).abs() < 0.01);
        assert!(dest.lon > 5.0);
        assert!(dest.lon < 5.2);
    }

    #[test]
    fn test_project_south() {
        let origin = Coordinate::new(45.0, 5.0);
        let dest = project(origin, 180.0, 10.0);

        assert!((dest.lat - 44.91).abs() < 0.01);
        assert!((dest.lon - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_project_west() {
        let origin = Coordinate::new(45.0, 5.0);
        let dest = project(origin, 270.0, 10.0);

        assert!((dest.lat - 45.0).abs() < 0.01);
        assert!(dest.lon < 5.0);
    }

    #[test]
    fn test_project_output_has_six_decimals() {
        let dest = project(Coordinate::new(12.345678912, 98.765432198), 37.0, 3.3);
        assert_eq!(round_to(dest.lat, 6), dest.lat);
        assert_eq!(round_to(dest.lon, 6), dest.lon);
    }

    #[test]
    fn test_project_does_not_wrap_antimeridian() {
        let origin = Coordinate::new(0.0, 179.99);
        let dest = project(origin, 90.0, 16.0);
        assert!(dest.lon > 180.0);
    }

    #[test]
    fn test_project_near_pole_stays_below_90() {
        let dest = project(Coordinate::new(89.0, 0.0), 0.0, 100.0);
        assert!(dest.lat > 89.0);
        assert!(dest.lat <= 90.0);
    }

    #[test]
    fn test_midpoint_example() {
        let mid = midpoint(Coordinate::new(10.0, 20.0), Coordinate::new(20.0, 40.0));
        assert_eq!(mid, Coordinate::new(15.0, 30.0));
    }

    #[test]
    fn test_haversine_same_point() {
        let point = Coordinate::new(45.0, 5.0);
        assert_eq!(haversine_km(point, point), 0.0);
    }

    #[test]
    fn test_haversine_inverts_projection() {
        let origin = Coordinate::new(47.608, -122.335);
        let dest = project(origin, 123.0, 12.5);
        assert!((haversine_km(origin, dest) - 12.5).abs() < 1e-3);
    }

    #[test]
    fn test_round_to() {
        assert_eq!(round_to(1.23456789, 6), 1.234568);
        assert_eq!(round_to(-1.23456749, 6), -1.234567);
        assert_eq!(round_to(15.99951, 3), 16.0);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        // Poles are excluded: at exactly ±90° longitude is undefined.
        fn valid_lat() -> impl Strategy<Value = f64> {
            -89.9..=89.9
        }

        fn valid_lon() -> impl Strategy<Value = f64> {
            -180.0..=180.0
        }

        fn valid_coord() -> impl Strategy<Value = Coordinate> {
            (valid_lat(), valid_lon()).prop_map(|(lat, lon)| Coordinate { lat, lon })
        }

        proptest! {
            #[test]
            fn prop_zero_distance_north_returns_origin(origin in valid_coord()) {
                let dest = project(origin, 0.0, 0.0);
                prop_assert!((dest.lat - origin.lat).abs() <= ROUNDING_TOLERANCE);
                prop_assert!((dest.lon - origin.lon).abs() <= ROUNDING_TOLERANCE);
            }

            #[test]
            fn prop_bearing_is_periodic(
                origin in valid_coord(),
                bearing in 0u16..=360,
                distance in 0.0..=16.0f64
            ) {
                let a = project(origin, f64::from(bearing), distance);
                let b = project(origin, f64::from(bearing) + 360.0, distance);
                prop_assert!((a.lat - b.lat).abs() <= ROUNDING_TOLERANCE);
                prop_assert!((a.lon - b.lon).abs() <= ROUNDING_TOLERANCE);
            }

            #[test]
            fn prop_due_north_adds_angular_distance(
                lat in -80.0..=80.0f64,
                lon in valid_lon(),
                distance in 0.0..=100.0f64
            ) {
                let dest = project(Coordinate { lat, lon }, 0.0, distance);
                let expected = lat + (distance / EARTH_RADIUS_KM).to_degrees();
                prop_assert!((dest.lat - expected).abs() <= ROUNDING_TOLERANCE);
                prop_assert!((dest.lon - lon).abs() <= ROUNDING_TOLERANCE);
            }

            #[test]
            fn prop_projection_stays_within_latitude_range(
                origin in valid_coord(),
                bearing in 0.0..=360.0f64,
                distance in 0.0..=1000.0f64
            ) {
                let dest = project(origin, bearing, distance);
                prop_assert!(dest.lat >= -90.0);
                prop_assert!(dest.lat <= 90.0);
            }

            #[test]
            fn prop_midpoint_of_same_point_is_identity(a in valid_coord()) {
                prop_assert_eq!(midpoint(a, a), a);
            }

            #[test]
            fn prop_midpoint_is_symmetric(a in valid_coord(), b in valid_coord()) {
                prop_assert_eq!(midpoint(a, b), midpoint(b, a));
            }

            #[test]
            fn prop_haversine_symmetric(a in valid_coord(), b in valid_coord()) {
                prop_assert!((haversine_km(a, b) - haversine_km(b, a)).abs() < 1e-9);
            }

            #[test]
            fn prop_haversine_bounded_by_half_circumference(a in valid_coord(), b in valid_coord()) {
                let max_distance = std::f64::consts::PI * EARTH_RADIUS_KM;
                prop_assert!(haversine_km(a, b) <= max_distance + 1e-6);
            }
        }
    }
}
