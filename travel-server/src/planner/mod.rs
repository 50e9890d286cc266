//! Route planner.
//!
//! This module implements the core search that answers:
//! "How do I get from this place to that one, and what will it cost?"
//!
//! A search geocodes both ends, picks the airport serving the destination,
//! works out which origin airports are reachable by ground, then joins a
//! ground leg to each airport with the flights from it. Results are ranked
//! by total price.

mod assemble;
mod config;
mod providers;
mod rank;
mod search;

pub use assemble::{assemble, join_legs};
pub use config::SearchConfig;
pub use providers::{
    AirportLocator, FlightSearch, Geocoder, GroundTransport, ProviderError, TravelProviders,
    bounded,
};
pub use rank::rank_itineraries;
pub use search::{Planner, SearchError, SearchRequest};
