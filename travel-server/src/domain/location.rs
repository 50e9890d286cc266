//! Geographic locations: cities, airports and stations.

use std::fmt;

use super::IataCode;
use crate::geo;

/// A point on the Earth's surface, in decimal degrees (WGS84).
///
/// Ranges are assumed valid, not enforced.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

/// What sort of place a [`Location`] is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LocationKind {
    City,
    Airport,
    Station,
}

impl LocationKind {
    /// Lowercase name, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            LocationKind::City => "city",
            LocationKind::Airport => "airport",
            LocationKind::Station => "station",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named point.
///
/// Airports carry an IATA `code` when one could be resolved from their
/// name; it is `None` otherwise.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    /// Display name
    pub name: String,
    /// Position
    pub coordinate: Coordinate,
    /// City, airport or station
    pub kind: LocationKind,
    /// IATA code (airports only, may be unresolved)
    pub code: Option<IataCode>,
    /// Country name, when the geocoder reported one
    pub country: Option<String>,
    /// External place identifier from the place lookup
    pub place_id: Option<String>,
}

impl Location {
    fn new(name: impl Into<String>, coordinate: Coordinate, kind: LocationKind) -> Self {
        Self {
            name: name.into(),
            coordinate,
            kind,
            code: None,
            country: None,
            place_id: None,
        }
    }

    /// A city-type location.
    pub fn city(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self::new(name, coordinate, LocationKind::City)
    }

    /// An airport, with its code if known.
    pub fn airport(name: impl Into<String>, coordinate: Coordinate, code: Option<IataCode>) -> Self {
        Self {
            code,
            ..Self::new(name, coordinate, LocationKind::Airport)
        }
    }

    /// A station-type location.
    pub fn station(name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self::new(name, coordinate, LocationKind::Station)
    }

    /// Set the country.
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = Some(country.into());
        self
    }

    /// Set the external place identifier.
    pub fn with_place_id(mut self, place_id: impl Into<String>) -> Self {
        self.place_id = Some(place_id.into());
        self
    }

    /// The IATA code as a string, empty when unresolved.
    pub fn code_str(&self) -> &str {
        self.code.as_ref().map_or("", IataCode::as_str)
    }

    /// Great-circle distance to another location, in kilometres.
    pub fn distance_to(&self, other: &Location) -> f64 {
        geo::distance(self.coordinate, other.coordinate)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "{} ({})", self.name, code),
            None => f.write_str(&self.name),
        }
    }
}
