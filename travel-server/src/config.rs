//! Application configuration from the environment.

use std::str::FromStr;
use std::time::Duration;

use tracing::warn;

use crate::domain::Currency;
use crate::planner::SearchConfig;

const DEFAULT_PORT: u16 = 8080;

/// Everything the server needs at start-up.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Google Maps Platform key; empty means every lookup will be denied.
    pub google_maps_api_key: String,

    /// HTTP listen port.
    pub port: u16,

    /// Route search parameters.
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: String::new(),
            port: DEFAULT_PORT,
            search: SearchConfig::default(),
        }
    }
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, which returns the value of a
    /// variable if it is set.
    ///
    /// Values that fail to parse are logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = SearchConfig::default();

        let google_maps_api_key = lookup("GOOGLE_MAPS_API_KEY").unwrap_or_default();
        if google_maps_api_key.is_empty() {
            warn!("GOOGLE_MAPS_API_KEY not set, Google lookups will fail");
        }

        let timeout_secs = parse_or(
            &lookup,
            "PROVIDER_TIMEOUT_SECS",
            defaults.provider_timeout.as_secs(),
        );

        let currency = match lookup("CURRENCY") {
            Some(raw) => Currency::parse_normalized(&raw).unwrap_or_else(|e| {
                warn!(value = %raw, error = %e, "invalid CURRENCY, using default");
                defaults.currency
            }),
            None => defaults.currency,
        };

        let search = SearchConfig::new(
            parse_or(&lookup, "DEFAULT_RADIUS", defaults.default_radius_m),
            parse_or(&lookup, "MAX_AIRPORTS", defaults.max_airports),
            parse_or(&lookup, "MAX_DISTANCE", defaults.max_distance_km),
            parse_or(&lookup, "MAX_ITINERARIES", defaults.max_itineraries),
            Duration::from_secs(timeout_secs),
            currency,
        );

        Self {
            google_maps_api_key,
            port: parse_or(&lookup, "PORT", DEFAULT_PORT),
            search,
        }
    }
}

/// Parse `key` if set, falling back to `default` with a warning when the
/// value is malformed.
fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T
where
    T: FromStr + Copy,
{
    let Some(raw) = lookup(key) else {
        return default;
    };

    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            warn!(key, value = %raw, "invalid value, using default");
            default
        }
    }
}
