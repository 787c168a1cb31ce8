pub mod error;
pub mod geodesy;
pub mod imagery;
pub mod models;
pub mod route;
pub mod sampler;
pub mod zoom;

pub use geodesy::{midpoint, project, EARTH_RADIUS_KM};
pub use route::plan_route;
pub use sampler::{sample_destination, sample_destination_with, DEFAULT_RADIUS_KM};
pub use zoom::select_zoom;
