//! Request URLs for the aerial imagery service.
//!
//! Only the URLs are built here. Fetching and saving the image belongs to
//! whoever displays it.

use std::fmt;

use url::Url;

use crate::{
    models::{Coordinate, RouteView},
    zoom::POINT_ZOOM,
};

pub const DEFAULT_BASE_URL: &str =
    "https://dev.virtualearth.net/REST/v1/Imagery/Map/AerialWithLabels/";
const ROUTE_IMAGERY_SET: &str = "AerialWithLabels";

#[derive(Debug, thiserror::Error)]
pub enum ImageryError {
    #[error("invalid imagery base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("imagery base url '{0}' cannot carry path segments")]
    CannotBeABase(String),
}

/// Requested image size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapSize {
    pub width: u32,
    pub height: u32,
}

impl Default for MapSize {
    fn default() -> Self {
        Self {
            width: 900,
            height: 900,
        }
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.width, self.height)
    }
}

#[derive(Debug, Clone)]
pub struct ImageryConfig {
    base_url: Url,
    api_key: String,
    pub map_size: MapSize,
}

impl ImageryConfig {
    pub fn new(api_key: impl Into<String>) -> Result<Self, ImageryError> {
        Self::with_base_url(DEFAULT_BASE_URL, api_key)
    }

    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Result<Self, ImageryError> {
        let base_url = Url::parse(base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ImageryError::CannotBeABase(base_url.into()));
        }
        Ok(Self {
            base_url,
            api_key: api_key.into(),
            map_size: MapSize::default(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Image centred on `coord` with a pushpin on it.
    pub fn point_url(&self, coord: Coordinate) -> Url {
        let coords = coord.to_string();
        let zoom = POINT_ZOOM.to_string();
        let mut url = self.url_with_path(&[coords.as_str(), zoom.as_str()]);
        url.query_pairs_mut()
            .append_pair("mapSize", &self.map_size.to_string())
            .append_pair("pp", &format!("{coords};;1"))
            .append_pair("dcl", "1")
            .append_pair("key", &self.api_key);
        tracing::debug!("point imagery url built for {coords}");
        url
    }

    /// Image centred on the route midpoint with the driving route drawn
    /// between both waypoints.
    pub fn route_url(&self, route: &RouteView) -> Url {
        let center = route.midpoint.to_string();
        let zoom = route.zoom.to_string();
        let mut url = self.url_with_path(&[center.as_str(), zoom.as_str(), "Routes", "Driving"]);
        url.query_pairs_mut()
            .append_pair("waypoint.1", &route.origin.to_string())
            .append_pair("waypoint.2", &route.destination.to_string())
            .append_pair("mapSize", &self.map_size.to_string())
            .append_pair("imagerySet", ROUTE_IMAGERY_SET)
            .append_pair("key", &self.api_key);
        tracing::debug!(
            "route imagery url built for {} -> {} at zoom {}",
            route.origin,
            route.destination,
            route.zoom
        );
        url
    }

    fn url_with_path(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        // Checked in the constructor, so this always succeeds.
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
