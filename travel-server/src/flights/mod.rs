//! Estimated flight schedules and prices.
//!
//! There is no live flight data behind this: direct flights are assumed
//! from well-connected airports, connections via a few European hubs, and
//! prices follow a flat tariff. Times are offsets from the travel date.

use chrono::{DateTime, Duration, Utc};

use crate::domain::{Coordinate, Currency, Fare, IataCode, Leg, Location, TransportMode};
use crate::planner::{FlightSearch, ProviderError};

/// Airports assumed to have direct flights to anywhere.
const MAJOR_AIRPORTS: &[&str] = &["MAD", "BCN", "LHR", "CDG", "FRA", "AMS", "FCO", "MUC"];

/// Connection hubs, in order of preference: (code, name, lat, lon).
const HUBS: &[(&str, &str, f64, f64)] = &[
    ("LHR", "London Heathrow Airport", 51.4700, -0.4543),
    ("CDG", "Paris Charles de Gaulle Airport", 49.0097, 2.5479),
    ("FRA", "Frankfurt Airport", 50.0379, 8.5622),
];

/// Airports whose departures carry a surcharge.
const PREMIUM_AIRPORTS: &[&str] = &["MAD", "BCN"];

const BASE_PRICE: f64 = 200.0;
const CONNECTING_DISCOUNT: f64 = 0.8;
const PREMIUM_SURCHARGE: f64 = 50.0;

const PROVIDER: &str = "Airlines";

/// Whether a flight is the whole trip or one half of a connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlightKind {
    Direct,
    Connecting,
}

/// Estimated fare for a flight departing `from`.
pub fn estimate_price(from: Option<IataCode>, kind: FlightKind) -> f64 {
    let mut price = BASE_PRICE;

    if kind == FlightKind::Connecting {
        price *= CONNECTING_DISCOUNT;
    }

    if from.is_some_and(|code| PREMIUM_AIRPORTS.contains(&code.as_str())) {
        price += PREMIUM_SURCHARGE;
    }

    price
}

fn is_major(code: Option<IataCode>) -> bool {
    code.is_some_and(|code| MAJOR_AIRPORTS.contains(&code.as_str()))
}

fn hub_airports() -> impl Iterator<Item = Location> {
    HUBS.iter().map(|&(code, name, lat, lon)| {
        Location::airport(name, Coordinate::new(lat, lon), IataCode::parse(code).ok())
    })
}

/// Flight search backed by a fixed timetable and tariff.
#[derive(Debug, Clone)]
pub struct EstimatedFlights {
    currency: Currency,
}

impl EstimatedFlights {
    pub fn new(currency: Currency) -> Self {
        Self { currency }
    }

    fn flight(
        &self,
        from: &Location,
        to: &Location,
        departure: DateTime<Utc>,
        arrival: DateTime<Utc>,
        kind: FlightKind,
    ) -> Result<Leg, ProviderError> {
        Leg::new(
            TransportMode::Flight,
            from.clone(),
            to.clone(),
            departure,
            arrival,
            Fare::new(estimate_price(from.code, kind), self.currency),
            PROVIDER,
        )
        .map_err(|e| ProviderError::Upstream(e.to_string()))
    }

    /// One direct flight from a major airport, none otherwise.
    pub fn direct(&self, from: &Location, to: &Location, date: DateTime<Utc>) -> Result<Vec<Leg>, ProviderError> {
        if !is_major(from.code) {
            return Ok(Vec::new());
        }

        let departure = date + Duration::hours(2);
        let arrival = departure + Duration::minutes(4 * 60 + 30);

        Ok(vec![self.flight(from, to, departure, arrival, FlightKind::Direct)?])
    }

    /// One two-leg route through each hub that is neither end of the trip.
    pub fn connecting(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> Result<Vec<Vec<Leg>>, ProviderError> {
        hub_airports()
            .filter(|hub| hub.code != from.code && hub.code != to.code)
            .map(|hub| -> Result<Vec<Leg>, ProviderError> {
                let first = self.flight(
                    from,
                    &hub,
                    date + Duration::hours(2),
                    date + Duration::minutes(4 * 60 + 30),
                    FlightKind::Connecting,
                )?;
                let second = self.flight(
                    &hub,
                    to,
                    date + Duration::minutes(6 * 60 + 30),
                    date + Duration::minutes(10 * 60 + 30),
                    FlightKind::Connecting,
                )?;
                Ok(vec![first, second])
            })
            .collect()
    }
}

impl FlightSearch for EstimatedFlights {
    async fn direct_flights(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> Result<Vec<Leg>, ProviderError> {
        self.direct(from, to, date)
    }

    async fn connecting_flights(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> Result<Vec<Vec<Leg>>, ProviderError> {
        self.connecting(from, to, date)
    }
}
