//! Ground transport between a place and an airport.
//!
//! Public transport is preferred when the directions service finds a
//! route; otherwise the journey is estimated as a taxi ride over the
//! great-circle distance.

mod fares;

use std::future::Future;

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use crate::domain::{Currency, Fare, Leg, Location, TransportMode};
use crate::google::{GoogleMapsClient, TransitTrip};
use crate::planner::{GroundTransport, ProviderError};

pub use fares::{taxi_duration, taxi_fare, transit_fare};

/// Source of public transport routes.
pub trait TransitDirections {
    fn transit_trip(
        &self,
        from: &Location,
        to: &Location,
        departure: DateTime<Utc>,
    ) -> impl Future<Output = Result<TransitTrip, ProviderError>> + Send;
}

impl TransitDirections for GoogleMapsClient {
    async fn transit_trip(
        &self,
        from: &Location,
        to: &Location,
        departure: DateTime<Utc>,
    ) -> Result<TransitTrip, ProviderError> {
        Ok(self
            .transit_directions(from.coordinate, to.coordinate, departure)
            .await?)
    }
}

/// Public transport leg for a trip found by the directions service.
pub fn transit_leg(
    from: &Location,
    to: &Location,
    departure: DateTime<Utc>,
    trip: TransitTrip,
    currency: Currency,
) -> Result<Leg, ProviderError> {
    let arrival = i64::try_from(trip.duration_secs)
        .ok()
        .and_then(Duration::try_seconds)
        .and_then(|d| departure.checked_add_signed(d))
        .ok_or_else(|| {
            ProviderError::Upstream(format!(
                "transit duration of {}s out of range",
                trip.duration_secs
            ))
        })?;
    let distance_km = trip.distance_m as f64 / 1000.0;

    Leg::new(
        TransportMode::PublicTransport,
        from.clone(),
        to.clone(),
        departure,
        arrival,
        Fare::new(transit_fare(distance_km), currency),
        "Public Transport",
    )
    .map_err(|e| ProviderError::Upstream(e.to_string()))
}

/// Taxi leg estimated from the great-circle distance.
pub fn taxi_leg(
    from: &Location,
    to: &Location,
    departure: DateTime<Utc>,
    currency: Currency,
) -> Result<Leg, ProviderError> {
    let distance_km = from.distance_to(to);
    if distance_km.is_nan() {
        return Err(ProviderError::Unavailable(format!(
            "no distance between {from} and {to}"
        )));
    }

    Leg::new(
        TransportMode::Taxi,
        from.clone(),
        to.clone(),
        departure,
        departure + taxi_duration(distance_km),
        Fare::new(taxi_fare(distance_km), currency),
        "Taxi",
    )
    .map_err(|e| ProviderError::Upstream(e.to_string()))
}

/// Ground transport priced from transit directions with a taxi fallback.
#[derive(Debug, Clone)]
pub struct GroundTransportService<D> {
    directions: D,
    currency: Currency,
}

impl<D: TransitDirections> GroundTransportService<D> {
    pub fn new(directions: D, currency: Currency) -> Self {
        Self {
            directions,
            currency,
        }
    }
}

impl<D: TransitDirections + Sync> GroundTransport for GroundTransportService<D> {
    async fn ground_leg(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> Result<Leg, ProviderError> {
        match self.directions.transit_trip(from, to, date).await {
            Ok(trip) => transit_leg(from, to, date, trip, self.currency),
            Err(e) => {
                debug!(from = %from, to = %to, error = %e, "no transit route, estimating taxi");
                taxi_leg(from, to, date, self.currency)
            }
        }
    }
}
