//! Google Maps Platform response DTOs.
//!
//! These types map directly to the JSON returned by the Geocoding, Places
//! (nearby search) and Directions web services. Only the fields we read are
//! declared; everything else is ignored. Google omits empty arrays in some
//! error responses, so collections default to empty.

use serde::Deserialize;

/// Latitude/longitude pair as Google spells it.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    pub location: LatLng,
}

/// Response from the Geocoding API.
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResponse {
    #[serde(default)]
    pub results: Vec<GeocodingResult>,

    /// "OK", "ZERO_RESULTS", "REQUEST_DENIED", ...
    pub status: String,

    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub geometry: Geometry,
    #[serde(default)]
    pub address_components: Vec<AddressComponent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddressComponent {
    pub long_name: String,
    #[serde(default)]
    pub types: Vec<String>,
}

/// Response from the Places nearby search.
#[derive(Debug, Clone, Deserialize)]
pub struct PlacesResponse {
    #[serde(default)]
    pub results: Vec<PlaceResult>,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlaceResult {
    pub name: String,
    pub place_id: Option<String>,
    pub geometry: Geometry,
}

/// Response from the Directions API.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsResponse {
    #[serde(default)]
    pub routes: Vec<DirectionsRoute>,
    pub status: String,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsRoute {
    #[serde(default)]
    pub legs: Vec<DirectionsLeg>,
}

/// One leg of a Directions route.
#[derive(Debug, Clone, Deserialize)]
pub struct DirectionsLeg {
    /// Travel time; `value` is in seconds.
    pub duration: TextValue,

    /// Distance covered; `value` is in metres.
    pub distance: TextValue,
}

/// A measured quantity. Google also sends a localized `text` rendering,
/// which is ignored.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TextValue {
    pub value: u64,
}
