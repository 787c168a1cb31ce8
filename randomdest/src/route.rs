use crate::{
    geodesy::{haversine_km, midpoint},
    models::{Coordinate, RouteView},
    zoom::select_zoom,
};

/// Everything needed to frame a route image between two points.
///
/// `distance_km` is the distance drawn by the sampler when the destination
/// came from it; otherwise the great-circle distance between the endpoints
/// is used to pick the zoom.
pub fn plan_route(
    origin: Coordinate,
    destination: Coordinate,
    distance_km: Option<f64>,
) -> RouteView {
    let distance_km = distance_km.unwrap_or_else(|| haversine_km(origin, destination));
    RouteView {
        origin,
        destination,
        midpoint: midpoint(origin, destination),
        distance_km,
        zoom: select_zoom(distance_km),
    }
}
