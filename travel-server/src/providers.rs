//! Production wiring of the planner's providers.

use chrono::{DateTime, Utc};

use crate::domain::{Leg, Location};
use crate::flights::EstimatedFlights;
use crate::google::GoogleMapsClient;
use crate::ground::GroundTransportService;
use crate::planner::{AirportLocator, FlightSearch, Geocoder, GroundTransport, ProviderError, SearchConfig};

/// Google Maps for places and transit, estimated taxis and flights for
/// the rest.
#[derive(Debug, Clone)]
pub struct LiveProviders {
    maps: GoogleMapsClient,
    ground: GroundTransportService<GoogleMapsClient>,
    flights: EstimatedFlights,
}

impl LiveProviders {
    pub fn new(maps: GoogleMapsClient, config: &SearchConfig) -> Self {
        Self {
            ground: GroundTransportService::new(maps.clone(), config.currency),
            flights: EstimatedFlights::new(config.currency),
            maps,
        }
    }
}

impl Geocoder for LiveProviders {
    async fn geocode(&self, name: &str) -> Result<Location, ProviderError> {
        Geocoder::geocode(&self.maps, name).await
    }
}

impl AirportLocator for LiveProviders {
    async fn nearby_airports(&self, origin: &Location, radius_m: u32) -> Result<Vec<Location>, ProviderError> {
        AirportLocator::nearby_airports(&self.maps, origin, radius_m).await
    }
}

impl GroundTransport for LiveProviders {
    async fn ground_leg(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> Result<Leg, ProviderError> {
        self.ground.ground_leg(from, to, date).await
    }
}

impl FlightSearch for LiveProviders {
    async fn direct_flights(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> Result<Vec<Leg>, ProviderError> {
        self.flights.direct_flights(from, to, date).await
    }

    async fn connecting_flights(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> Result<Vec<Vec<Leg>>, ProviderError> {
        self.flights.connecting_flights(from, to, date).await
    }
}
