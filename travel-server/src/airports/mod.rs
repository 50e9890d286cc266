//! Airport lookup helpers.
//!
//! Resolving codes from place names, and choosing which airports are
//! worth travelling to by ground.

mod reachability;
mod resolver;

pub use reachability::{AirportDistance, closest, nearest_within, reachable};
pub use resolver::resolve_code;
