//! Route assembly.
//!
//! For each reachable origin airport, joins the ground leg to that airport
//! with every flight option from it to the destination airport. Airports
//! are independent branches: each runs concurrently, and a failure in one
//! never affects another.

use chrono::{DateTime, Utc};
use futures::future::join_all;
use tracing::{debug, warn};

use crate::domain::{Leg, Location};

use super::config::SearchConfig;
use super::providers::{FlightSearch, GroundTransport, bounded};

/// Join a ground leg with each flight option.
///
/// Direct flights become `[ground, flight]`; connecting routes become
/// `[ground, ..route]`. Direct options come first, each group in provider
/// order.
pub fn join_legs(ground: &Leg, direct: Vec<Leg>, connecting: Vec<Vec<Leg>>) -> Vec<Vec<Leg>> {
    let direct = direct.into_iter().map(|flight| vec![ground.clone(), flight]);

    let connecting = connecting.into_iter().map(|route| {
        let mut legs = Vec::with_capacity(route.len() + 1);
        legs.push(ground.clone());
        legs.extend(route);
        legs
    });

    direct.chain(connecting).collect()
}

/// Assemble candidate itineraries (as leg sequences) through every airport.
///
/// Results are concatenated in airport order, so the output is
/// deterministic for deterministic providers. At most
/// `config.max_itineraries` sequences are returned.
pub async fn assemble<P>(
    providers: &P,
    origin: &Location,
    airports: &[Location],
    destination_airport: &Location,
    date: DateTime<Utc>,
    config: &SearchConfig,
) -> Vec<Vec<Leg>>
where
    P: GroundTransport + FlightSearch,
{
    let branches = airports
        .iter()
        .map(|airport| assemble_airport(providers, origin, airport, destination_airport, date, config));

    let mut routes: Vec<Vec<Leg>> = join_all(branches).await.into_iter().flatten().collect();

    if routes.len() > config.max_itineraries {
        warn!(
            assembled = routes.len(),
            limit = config.max_itineraries,
            "too many itineraries, truncating"
        );
        routes.truncate(config.max_itineraries);
    }

    routes
}

/// Assemble the options through a single airport.
///
/// Provider failures and timeouts are absorbed here: no ground leg means no
/// options through this airport, and a failed flight lookup contributes
/// nothing.
async fn assemble_airport<P>(
    providers: &P,
    origin: &Location,
    airport: &Location,
    destination_airport: &Location,
    date: DateTime<Utc>,
    config: &SearchConfig,
) -> Vec<Vec<Leg>>
where
    P: GroundTransport + FlightSearch,
{
    let timeout = config.provider_timeout;

    let ground = match bounded(timeout, providers.ground_leg(origin, airport, date)).await {
        Ok(leg) => leg,
        Err(e) => {
            warn!(airport = %airport, error = %e, "no ground transport, skipping airport");
            return Vec::new();
        }
    };

    let (direct, connecting) = tokio::join!(
        bounded(
            timeout,
            providers.direct_flights(airport, destination_airport, date)
        ),
        bounded(
            timeout,
            providers.connecting_flights(airport, destination_airport, date)
        ),
    );

    let direct = direct.unwrap_or_else(|e| {
        debug!(airport = %airport, error = %e, "no direct flights");
        Vec::new()
    });
    let connecting = connecting.unwrap_or_else(|e| {
        debug!(airport = %airport, error = %e, "no connecting flights");
        Vec::new()
    });

    let mut routes = join_legs(&ground, direct, connecting);
    routes.truncate(config.max_itineraries);

    debug!(airport = %airport, options = routes.len(), "assembled airport options");
    routes
}
