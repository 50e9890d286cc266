//! Capabilities the planner needs from the outside world.
//!
//! These abstractions allow the planner to be tested with mock data and
//! keep geocoding, place lookup and pricing out of the core.

use std::future::Future;
use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::domain::{Leg, Location};

/// Error from an external provider.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    /// The query matched nothing
    #[error("not found: {0}")]
    NotFound(String),

    /// No option exists for this pair of locations
    #[error("unavailable: {0}")]
    Unavailable(String),

    /// The provider itself failed (network, status, parse)
    #[error("provider failed: {0}")]
    Upstream(String),

    /// The provider did not answer within its time budget
    #[error("timed out after {0:?}")]
    Timeout(Duration),
}

/// Maps free text to a city-type location.
pub trait Geocoder {
    fn geocode(&self, name: &str) -> impl Future<Output = Result<Location, ProviderError>> + Send;
}

/// Finds airports around a location.
pub trait AirportLocator {
    /// Airport-type locations within `radius_m` metres of `origin`.
    fn nearby_airports(
        &self,
        origin: &Location,
        radius_m: u32,
    ) -> impl Future<Output = Result<Vec<Location>, ProviderError>> + Send;
}

/// Prices the ground journey between two points.
pub trait GroundTransport {
    /// The single best ground leg from `from` to `to` leaving on `date`.
    fn ground_leg(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> impl Future<Output = Result<Leg, ProviderError>> + Send;
}

/// Flight availability and pricing between airports.
pub trait FlightSearch {
    /// Zero or more direct flights.
    fn direct_flights(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Leg>, ProviderError>> + Send;

    /// Zero or more connecting routes, each an ordered list of flight legs.
    fn connecting_flights(
        &self,
        from: &Location,
        to: &Location,
        date: DateTime<Utc>,
    ) -> impl Future<Output = Result<Vec<Vec<Leg>>, ProviderError>> + Send;
}

/// Everything a full route search needs.
pub trait TravelProviders: Geocoder + AirportLocator + GroundTransport + FlightSearch {}

impl<T> TravelProviders for T where T: Geocoder + AirportLocator + GroundTransport + FlightSearch {}

/// Run a provider call under a time budget.
///
/// An expired budget becomes [`ProviderError::Timeout`]; the call is
/// dropped and its result discarded.
pub async fn bounded<T, F>(timeout: Duration, call: F) -> Result<T, ProviderError>
where
    F: Future<Output = Result<T, ProviderError>>,
{
    tokio::time::timeout(timeout, call)
        .await
        .unwrap_or(Err(ProviderError::Timeout(timeout)))
}
