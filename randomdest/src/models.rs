pub use shared::{Coordinate, CoordinateParseError, Destination, RouteView, ZoomLevel};
