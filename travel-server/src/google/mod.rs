//! Google Maps Platform client.
//!
//! This module provides an HTTP client for the Google Maps web services
//! used by route search: geocoding of free-text places, nearby airport
//! lookup and public transport directions.
//!
//! Key characteristics of the API:
//! - Every response carries a `status` string; HTTP 200 does not mean
//!   success
//! - The API key travels as a `key` query parameter
//! - Places results have names, not IATA codes, so codes are resolved
//!   from the name

mod client;
mod convert;
mod error;
mod types;

pub use client::{GoogleConfig, GoogleMapsClient};
pub use convert::TransitTrip;
pub use error::GoogleError;
