//! Domain types for the travel route finder.
//!
//! This module contains the core domain model: places, legs and the
//! itineraries built from them. Types that carry invariants enforce them
//! at construction time, so code that receives them can trust their validity.

mod code;
mod error;
mod itinerary;
mod leg;
mod location;

pub use code::{Currency, IataCode, InvalidCode};
pub use error::DomainError;
pub use itinerary::{Itinerary, LEG_SEPARATOR};
pub use leg::{Fare, Leg, TransportMode};
pub use location::{Coordinate, Location, LocationKind};
