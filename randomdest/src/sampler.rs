//! Random destination sampling around an origin.

use rand::Rng;

use crate::{
    geodesy::{project, round_to},
    models::{Coordinate, Destination},
};

/// Default sampling radius in kilometres (roughly ten miles).
pub const DEFAULT_RADIUS_KM: f64 = 16.0;

/// Bearings are drawn from this inclusive range, so 0 and 360 are both
/// possible draws that point the same way.
const MAX_BEARING_DEG: u16 = 360;

const DISTANCE_DECIMALS: i32 = 3;

/// Draw a random destination within `max_radius_km` of `origin` using the
/// thread-local generator.
pub fn sample_destination(origin: Coordinate, max_radius_km: f64) -> Destination {
    sample_destination_with(&mut rand::thread_rng(), origin, max_radius_km)
}

/// Draw a random destination within `max_radius_km` of `origin`.
///
/// The distance is uniform along the radius, not over the disc area, so
/// destinations are denser close to the origin. That clustering is part of
/// the behaviour callers rely on.
///
/// `max_radius_km` must be finite and non-negative.
pub fn sample_destination_with<R: Rng + ?Sized>(
    rng: &mut R,
    origin: Coordinate,
    max_radius_km: f64,
) -> Destination {
    debug_assert!(
        max_radius_km.is_finite() && max_radius_km >= 0.0,
        "radius must be finite and non-negative, got {max_radius_km}"
    );

    let bearing_deg = rng.gen_range(0..=MAX_BEARING_DEG);
    let distance_km = draw_distance(rng, max_radius_km);
    tracing::debug!("Bearing: {bearing_deg}°, Distance (km): {distance_km}");

    Destination {
        coordinate: project(origin, f64::from(bearing_deg), distance_km),
        bearing_deg,
        distance_km,
    }
}

fn draw_distance<R: Rng + ?Sized>(rng: &mut R, max_radius_km: f64) -> f64 {
    let raw = max_radius_km * rng.gen::<f64>();
    let rounded = round_to(raw, DISTANCE_DECIMALS);
    if rounded < max_radius_km || max_radius_km == 0.0 {
        return rounded;
    }
    // Rounding up landed on the radius itself; truncate instead.
    let factor = 10f64.powi(DISTANCE_DECIMALS);
    (raw * factor).floor() / factor
}
