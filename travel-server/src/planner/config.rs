//! Search configuration for the route planner.

use std::time::Duration;

use crate::domain::Currency;

/// Configuration parameters for route search.
///
/// Built once at start-up and passed in; the planner never reads the
/// environment itself.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Radius for the origin's nearby-airport lookup (metres).
    pub default_radius_m: u32,

    /// Maximum number of origin airports to consider.
    pub max_airports: usize,

    /// Maximum ground distance to an origin airport (kilometres).
    /// Airports further than this are not considered reachable.
    pub max_distance_km: f64,

    /// Maximum number of itineraries assembled per search.
    /// Bounds fan-out of airports × flights × connections.
    ///
    /// The cap applies to each airport's options and then to all of them,
    /// in airport order (nearest first), before pricing and ranking. It
    /// keeps the nearest airports' routes, not the cheapest routes overall.
    /// Itineraries rejected afterwards for mixed currencies are not
    /// replaced, so a search can return fewer than the cap.
    pub max_itineraries: usize,

    /// Time budget for each individual provider call.
    /// Calls that exceed it are treated as "no option available".
    pub provider_timeout: Duration,

    /// Currency all itineraries are priced in.
    pub currency: Currency,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(
        default_radius_m: u32,
        max_airports: usize,
        max_distance_km: f64,
        max_itineraries: usize,
        provider_timeout: Duration,
        currency: Currency,
    ) -> Self {
        Self {
            default_radius_m,
            max_airports,
            max_distance_km,
            max_itineraries,
            provider_timeout,
            currency,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_radius_m: 300_000, // 300 km
            max_airports: 10,
            max_distance_km: 500.0,
            max_itineraries: 200,
            provider_timeout: Duration::from_secs(30),
            currency: Currency::EUR,
        }
    }
}
