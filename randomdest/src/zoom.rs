use crate::models::ZoomLevel;

/// Zoom used when a single point (origin or destination) is shown.
pub const POINT_ZOOM: ZoomLevel = ZoomLevel(18);

/// Zoom for routes longer than every threshold in [`ROUTE_ZOOM_BUCKETS`].
pub const FALLBACK_ROUTE_ZOOM: ZoomLevel = ZoomLevel(12);

/// `(upper bound in km, zoom)` pairs, ascending. A bound is exclusive.
pub const ROUTE_ZOOM_BUCKETS: [(f64, ZoomLevel); 4] = [
    (1.8, ZoomLevel(16)),
    (3.0, ZoomLevel(15)),
    (6.5, ZoomLevel(14)),
    (12.0, ZoomLevel(13)),
];

/// Zoom level that keeps a route of `distance_km` framed in the map image.
pub fn select_zoom(distance_km: f64) -> ZoomLevel {
    ROUTE_ZOOM_BUCKETS
        .iter()
        .find(|(threshold, _)| distance_km < *threshold)
        .map(|(_, zoom)| *zoom)
        .unwrap_or(FALLBACK_ROUTE_ZOOM)
}
