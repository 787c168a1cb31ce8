use std::{fmt, num::ParseFloatError, str::FromStr};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Renders as `"<lat>,<lon>"`, the same form [`FromStr`] accepts.
impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lon)
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum CoordinateParseError {
    #[error("expected \"<lat>,<lon>\" but no comma was found")]
    MissingComma,
    #[error("expected exactly two comma-separated values")]
    TooManyParts,
    #[error("'{part}' is not a number: {source}")]
    InvalidNumber {
        part: String,
        #[source]
        source: ParseFloatError,
    },
    #[error("coordinates must be finite numbers")]
    NotFinite,
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
}

impl FromStr for Coordinate {
    type Err = CoordinateParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split(',');
        let lat = parts.next().unwrap_or_default();
        let lon = parts.next().ok_or(CoordinateParseError::MissingComma)?;
        if parts.next().is_some() {
            return Err(CoordinateParseError::TooManyParts);
        }

        let lat = parse_component(lat)?;
        let lon = parse_component(lon)?;
        if !(-90.0..=90.0).contains(&lat) {
            return Err(CoordinateParseError::LatitudeOutOfRange(lat));
        }

        Ok(Self { lat, lon })
    }
}

fn parse_component(part: &str) -> Result<f64, CoordinateParseError> {
    let trimmed = part.trim();
    let value = trimmed
        .parse::<f64>()
        .map_err(|source| CoordinateParseError::InvalidNumber {
            part: trimmed.to_string(),
            source,
        })?;
    if !value.is_finite() {
        return Err(CoordinateParseError::NotFinite);
    }
    Ok(value)
}

/// Map zoom level as understood by the imagery service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ZoomLevel(pub u8);

impl fmt::Display for ZoomLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A sampled destination together with the draw that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Destination {
    pub coordinate: Coordinate,
    pub bearing_deg: u16,
    pub distance_km: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteView {
    pub origin: Coordinate,
    pub destination: Coordinate,
    pub midpoint: Coordinate,
    pub distance_km: f64,
    pub zoom: ZoomLevel,
}
