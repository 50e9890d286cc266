//! Data transfer objects for web requests and responses.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{Itinerary, Leg, Location};

/// Query for `GET /search`.
///
/// Fields are optional so that a missing parameter is reported by the
/// handler with a useful message.
#[derive(Debug, Deserialize)]
pub struct SearchRoutesRequest {
    /// Free-text origin
    pub origin: Option<String>,

    /// Free-text destination
    pub destination: Option<String>,

    /// Travel date in YYYY-MM-DD format
    pub date: Option<String>,
}

/// Query for `GET /airports`.
#[derive(Debug, Deserialize)]
pub struct NearbyAirportsRequest {
    /// Free-text place to search around
    pub location: Option<String>,

    /// Search radius in metres; the configured default when absent or
    /// malformed
    pub radius: Option<String>,
}

/// A location in responses.
#[derive(Debug, Serialize)]
pub struct LocationResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,

    /// "city", "airport" or "station"
    #[serde(rename = "type")]
    pub kind: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub place_id: Option<String>,
}

/// A leg of an itinerary.
#[derive(Debug, Serialize)]
pub struct LegResult {
    /// Transport mode, e.g. "flight" or "taxi"
    pub mode: String,

    pub from: LocationResult,
    pub to: LocationResult,

    /// Travel time in whole minutes
    pub duration_minutes: i64,

    pub price: f64,
    pub currency: String,

    /// RFC 3339 departure time
    pub departure: String,

    /// RFC 3339 arrival time
    pub arrival: String,

    pub provider: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub booking_url: Option<String>,
}

/// A complete itinerary.
#[derive(Debug, Serialize)]
pub struct ItineraryResult {
    pub legs: Vec<LegResult>,
    pub total_price: f64,
    pub currency: String,

    /// First departure to last arrival, in whole minutes
    pub total_time_minutes: i64,

    pub departure: Option<String>,
    pub arrival: Option<String>,

    /// e.g. "taxi (Taxi) → flight (Airlines)"
    pub description: String,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

// Conversion implementations

fn rfc3339(t: DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}

impl LocationResult {
    /// Create from a domain Location.
    pub fn from_location(location: &Location) -> Self {
        Self {
            name: location.name.clone(),
            latitude: location.coordinate.latitude,
            longitude: location.coordinate.longitude,
            kind: location.kind.as_str().to_string(),
            code: location.code.map(|c| c.as_str().to_string()),
            country: location.country.clone(),
            place_id: location.place_id.clone(),
        }
    }
}

impl LegResult {
    /// Create from a domain Leg.
    pub fn from_leg(leg: &Leg) -> Self {
        Self {
            mode: leg.mode().as_str().to_string(),
            from: LocationResult::from_location(leg.origin()),
            to: LocationResult::from_location(leg.destination()),
            duration_minutes: leg.duration().num_minutes(),
            price: leg.price(),
            currency: leg.currency().as_str().to_string(),
            departure: rfc3339(leg.departure()),
            arrival: rfc3339(leg.arrival()),
            provider: leg.provider().to_string(),
            booking_url: leg.booking_url().map(str::to_string),
        }
    }
}

impl ItineraryResult {
    /// Create from a domain Itinerary.
    pub fn from_itinerary(itinerary: &Itinerary) -> Self {
        Self {
            legs: itinerary.legs().iter().map(LegResult::from_leg).collect(),
            total_price: itinerary.total_price(),
            currency: itinerary.currency().as_str().to_string(),
            total_time_minutes: itinerary.total_time().num_minutes(),
            departure: itinerary.departure().map(rfc3339),
            arrival: itinerary.arrival().map(rfc3339),
            description: itinerary.description().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Currency, Fare, IataCode, TransportMode};
    use chrono::TimeZone;

    fn at(h: u32, m: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 7, 1, h, m, 0).unwrap()
    }

    fn madrid() -> Location {
        Location::city("Madrid", Coordinate::new(40.4168, -3.7038)).with_country("Spain")
    }

    fn mad() -> Location {
        Location::airport(
            "Madrid-Barajas Airport (MAD)",
            Coordinate::new(40.4983, -3.5676),
            IataCode::parse("MAD").ok(),
        )
        .with_place_id("mad-place")
    }

    #[test]
    fn location_json() {
        let json = serde_json::to_value(LocationResult::from_location(&mad())).unwrap();

        assert_eq!(json["name"], "Madrid-Barajas Airport (MAD)");
        assert_eq!(json["type"], "airport");
        assert_eq!(json["code"], "MAD");
        assert_eq!(json["place_id"], "mad-place");
        assert!(json.get("country").is_none());

        let json = serde_json::to_value(LocationResult::from_location(&madrid())).unwrap();
        assert_eq!(json["type"], "city");
        assert_eq!(json["country"], "Spain");
        assert!(json.get("code").is_none());

        let atocha = Location::station("Madrid Atocha", Coordinate::new(40.4066, -3.6892));
        let json = serde_json::to_value(LocationResult::from_location(&atocha)).unwrap();
        assert_eq!(json["type"], "station");
        assert_eq!(json["name"], "Madrid Atocha");
    }

    #[test]
    fn itinerary_json() {
        let leg = Leg::new(
            TransportMode::Taxi,
            madrid(),
            mad(),
            at(8, 0),
            at(8, 25),
            Fare::new(35.0, Currency::EUR),
            "Taxi",
        )
        .unwrap()
        .with_booking_url("https://example.com/taxi");
        let itinerary = Itinerary::from_legs(vec![leg], Currency::EUR).unwrap();

        let json = serde_json::to_value(ItineraryResult::from_itinerary(&itinerary)).unwrap();

        assert_eq!(json["total_price"], 35.0);
        assert_eq!(json["currency"], "EUR");
        assert_eq!(json["total_time_minutes"], 25);
        assert_eq!(json["departure"], "2024-07-01T08:00:00Z");
        assert_eq!(json["arrival"], "2024-07-01T08:25:00Z");
        assert_eq!(json["description"], "taxi (Taxi)");

        let leg = &json["legs"][0];
        assert_eq!(leg["mode"], "taxi");
        assert_eq!(leg["duration_minutes"], 25);
        assert_eq!(leg["from"]["name"], "Madrid");
        assert_eq!(leg["to"]["code"], "MAD");
        assert_eq!(leg["booking_url"], "https://example.com/taxi");
    }

    #[test]
    fn empty_itinerary_json() {
        let itinerary = Itinerary::from_legs(vec![], Currency::EUR).unwrap();
        let json = serde_json::to_value(ItineraryResult::from_itinerary(&itinerary)).unwrap();

        assert_eq!(json["legs"].as_array().map(Vec::len), Some(0));
        assert_eq!(json["total_price"], 0.0);
        assert!(json["departure"].is_null());
    }
}
