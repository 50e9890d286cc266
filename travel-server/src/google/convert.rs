//! Conversion from Google DTOs to domain types.

use tracing::warn;

use crate::airports::resolve_code;
use crate::domain::{Coordinate, Location};

use super::error::GoogleError;
use super::types::{DirectionsResponse, GeocodingResponse, LatLng, PlacesResponse};

/// A public transport journey as reported by the Directions API.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitTrip {
    /// Door-to-door travel time in seconds.
    pub duration_secs: u64,
    /// Distance travelled in metres.
    pub distance_m: u64,
}

impl From<LatLng> for Coordinate {
    fn from(p: LatLng) -> Self {
        Coordinate::new(p.lat, p.lng)
    }
}

/// Map a non-"OK" status to an error.
fn check_status(status: &str, message: Option<String>, query: &str) -> Result<(), GoogleError> {
    match status {
        "OK" => Ok(()),
        "ZERO_RESULTS" | "NOT_FOUND" => Err(GoogleError::NoResults(query.to_string())),
        "REQUEST_DENIED" => Err(GoogleError::Unauthorized(message.unwrap_or_default())),
        other => Err(GoogleError::Status {
            status: other.to_string(),
            message,
        }),
    }
}

/// Convert a geocoding response for `query` into a city-type location.
///
/// The location is named after the query rather than Google's formatted
/// address, and carries the country from the first result's address
/// components when there is one.
pub fn geocoding_to_location(query: &str, response: GeocodingResponse) -> Result<Location, GoogleError> {
    check_status(&response.status, response.error_message, query)?;

    let result = response
        .results
        .into_iter()
        .next()
        .ok_or_else(|| GoogleError::NoResults(query.to_string()))?;

    let country = result
        .address_components
        .into_iter()
        .find(|c| c.types.iter().any(|t| t == "country"))
        .map(|c| c.long_name);

    let location = Location::city(query, result.geometry.location.into());
    Ok(match country {
        Some(country) => location.with_country(country),
        None => location,
    })
}

/// Convert a nearby search response into airport-type locations.
///
/// Any status other than "OK" yields no airports. Codes are resolved from
/// the place names and left empty when unknown.
pub fn places_to_airports(response: PlacesResponse) -> Vec<Location> {
    if response.status != "OK" {
        if response.status != "ZERO_RESULTS" {
            warn!(
                status = %response.status,
                message = response.error_message.as_deref().unwrap_or(""),
                "places search returned no airports"
            );
        }
        return Vec::new();
    }

    response
        .results
        .into_iter()
        .map(|place| {
            let code = resolve_code(&place.name);
            let airport = Location::airport(place.name, place.geometry.location.into(), code);
            match place.place_id {
                Some(id) => airport.with_place_id(id),
                None => airport,
            }
        })
        .collect()
}

/// Extract the first leg of the first route from a directions response.
pub fn directions_to_trip(response: DirectionsResponse) -> Result<TransitTrip, GoogleError> {
    check_status(&response.status, response.error_message, "transit route")?;

    let leg = response
        .routes
        .into_iter()
        .next()
        .and_then(|route| route.legs.into_iter().next())
        .ok_or_else(|| GoogleError::NoResults("transit route".to_string()))?;

    Ok(TransitTrip {
        duration_secs: leg.duration.value,
        distance_m: leg.distance.value,
    })
}
