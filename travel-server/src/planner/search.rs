//! Route search.
//!
//! Answers "how do I get from this place to that one?" by combining a
//! ground leg to a nearby airport with flights onwards to the airport
//! closest to the destination.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::airports::{closest, nearest_within};
use crate::domain::{Itinerary, Location};

use super::assemble::assemble;
use super::config::SearchConfig;
use super::providers::{ProviderError, TravelProviders, bounded};
use super::rank::rank_itineraries;

/// Search radius around the destination when looking for its airport.
const DESTINATION_AIRPORT_RADIUS_M: u32 = 50_000;

/// Error from route search.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// Origin could not be geocoded
    #[error("failed to geocode origin {name:?}: {source}")]
    OriginNotFound { name: String, source: ProviderError },

    /// Destination could not be geocoded
    #[error("failed to geocode destination {name:?}: {source}")]
    DestinationNotFound { name: String, source: ProviderError },

    /// No airport serves the destination
    #[error("no airport found near destination {0:?}")]
    NoDestinationAirport(String),

    /// Invalid search request
    #[error("invalid search request: {0}")]
    InvalidRequest(String),
}

/// Request for route search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Free-text origin, e.g. "Madrid, Spain".
    pub origin: String,

    /// Free-text destination.
    pub destination: String,

    /// Travel date; legs depart on or after this instant.
    pub date: DateTime<Utc>,
}

impl SearchRequest {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            origin: origin.into(),
            destination: destination.into(),
            date,
        }
    }

    /// Validate the search request.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.origin.trim().is_empty() {
            return Err(SearchError::InvalidRequest("origin is empty".to_string()));
        }

        if self.destination.trim().is_empty() {
            return Err(SearchError::InvalidRequest(
                "destination is empty".to_string(),
            ));
        }

        Ok(())
    }
}

/// Route planner.
pub struct Planner<'a, P: TravelProviders> {
    providers: &'a P,
    config: &'a SearchConfig,
}

impl<'a, P: TravelProviders> Planner<'a, P> {
    /// Create a new planner.
    pub fn new(providers: &'a P, config: &'a SearchConfig) -> Self {
        Self { providers, config }
    }

    /// Find itineraries from the request's origin to its destination,
    /// cheapest first.
    ///
    /// Only geocoding failures and a missing destination airport are
    /// errors. Anything that goes wrong for a single origin airport just
    /// removes that airport's options; no options at all is `Ok(vec![])`.
    pub async fn find_routes(&self, request: &SearchRequest) -> Result<Vec<Itinerary>, SearchError> {
        request.validate()?;

        let timeout = self.config.provider_timeout;

        let origin = bounded(timeout, self.providers.geocode(&request.origin))
            .await
            .map_err(|source| SearchError::OriginNotFound {
                name: request.origin.clone(),
                source,
            })?;

        let destination = bounded(timeout, self.providers.geocode(&request.destination))
            .await
            .map_err(|source| SearchError::DestinationNotFound {
                name: request.destination.clone(),
                source,
            })?;

        let destination_airport = self.destination_airport(&destination).await?;
        let airports = self.reachable_airports(&origin).await;

        info!(
            origin = %origin,
            destination = %destination,
            destination_airport = %destination_airport,
            airports = airports.len(),
            "searching routes"
        );

        let routes = assemble(
            self.providers,
            &origin,
            &airports,
            &destination_airport,
            request.date,
            self.config,
        )
        .await;

        let itineraries: Vec<Itinerary> = routes
            .into_iter()
            .filter_map(|legs| match Itinerary::from_legs(legs, self.config.currency) {
                Ok(itinerary) => Some(itinerary),
                Err(e) => {
                    warn!(error = %e, "dropping itinerary");
                    None
                }
            })
            .collect();

        let ranked = rank_itineraries(itineraries);
        info!(count = ranked.len(), "route search complete");

        Ok(ranked)
    }

    /// The airport closest to the destination, within
    /// [`DESTINATION_AIRPORT_RADIUS_M`].
    async fn destination_airport(&self, destination: &Location) -> Result<Location, SearchError> {
        let candidates = bounded(
            self.config.provider_timeout,
            self.providers
                .nearby_airports(destination, DESTINATION_AIRPORT_RADIUS_M),
        )
        .await
        .unwrap_or_else(|e| {
            warn!(destination = %destination, error = %e, "destination airport lookup failed");
            Vec::new()
        });

        closest(destination, candidates)
            .ok_or_else(|| SearchError::NoDestinationAirport(destination.name.clone()))
    }

    /// Origin airports worth reaching by ground, nearest first.
    ///
    /// A failed lookup means no airports rather than a failed search.
    async fn reachable_airports(&self, origin: &Location) -> Vec<Location> {
        let candidates = match bounded(
            self.config.provider_timeout,
            self.providers
                .nearby_airports(origin, self.config.default_radius_m),
        )
        .await
        {
            Ok(candidates) => candidates,
            Err(e) => {
                warn!(origin = %origin, error = %e, "origin airport lookup failed");
                return Vec::new();
            }
        };

        let found = candidates.len();
        let reachable = nearest_within(
            origin,
            candidates,
            self.config.max_distance_km,
            self.config.max_airports,
        );

        for a in &reachable {
            debug!(airport = %a.airport, distance_km = a.distance_km, "reachable airport");
        }
        debug!(found, reachable = reachable.len(), "filtered origin airports");

        reachable.into_iter().map(|a| a.airport).collect()
    }
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
