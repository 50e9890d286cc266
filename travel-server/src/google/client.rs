//! Google Maps Platform HTTP client.
//!
//! Provides async methods for the Geocoding, Places nearby search and
//! Directions web services, with conversion to domain types.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use tokio::sync::Semaphore;
use tracing::debug;

use crate::domain::{Coordinate, Location};
use crate::planner::{AirportLocator, Geocoder, ProviderError};

use super::convert::{TransitTrip, directions_to_trip, geocoding_to_location, places_to_airports};
use super::error::GoogleError;
use super::types::{DirectionsResponse, GeocodingResponse, PlacesResponse};

/// Default base URL for the Google Maps web services.
const DEFAULT_BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Requests in flight at once across geocoding, places and directions.
const DEFAULT_MAX_CONCURRENT: usize = 8;

/// Whole-request budget, body included.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for [`GoogleMapsClient`].
///
/// Only the key is required. The other fields exist so tests can point the
/// client at a local server and so the server can align the HTTP timeout
/// with the planner's per-call budget.
#[derive(Debug, Clone)]
pub struct GoogleConfig {
    /// Maps Platform key. Appended to every request as `?key=`; Google
    /// ignores auth headers on these endpoints.
    pub api_key: String,
    /// Prefix that `/geocode/json`, `/place/nearbysearch/json` and
    /// `/directions/json` are joined onto
    pub base_url: String,
    /// Shared cap on concurrent Google calls, enforced by a semaphore
    pub max_concurrent: usize,
    /// Timeout handed to `reqwest`, in seconds
    pub timeout_secs: u64,
}

impl GoogleConfig {
    /// Config for the public Maps endpoints with `api_key`.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            max_concurrent: DEFAULT_MAX_CONCURRENT,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Point the client at another host, such as a fake Maps server.
    /// A trailing slash is tolerated.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_max_concurrent(mut self, n: usize) -> Self {
        self.max_concurrent = n;
        self
    }

    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// Google Maps API client.
///
/// Cheap to clone; clones share the connection pool and the concurrency
/// limit.
#[derive(Debug, Clone)]
pub struct GoogleMapsClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
    semaphore: Arc<Semaphore>,
}

impl GoogleMapsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GoogleConfig) -> Result<Self, GoogleError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            semaphore: Arc::new(Semaphore::new(config.max_concurrent.max(1))),
        })
    }

    /// Geocode a free-text place name to a city-type location.
    pub async fn geocode(&self, name: &str) -> Result<Location, GoogleError> {
        let response: GeocodingResponse = self
            .get_json("geocode/json", &[("address", name.to_string())])
            .await?;

        geocoding_to_location(name, response)
    }

    /// Airports within `radius_m` metres of `at`.
    pub async fn nearby_airports(&self, at: Coordinate, radius_m: u32) -> Result<Vec<Location>, GoogleError> {
        let response: PlacesResponse = self
            .get_json(
                "place/nearbysearch/json",
                &[
                    ("location", lat_lng(at)),
                    ("radius", radius_m.to_string()),
                    ("type", "airport".to_string()),
                ],
            )
            .await?;

        Ok(places_to_airports(response))
    }

    /// Public transport directions from `from` to `to`, leaving at `departure`.
    pub async fn transit_directions(
        &self,
        from: Coordinate,
        to: Coordinate,
        departure: DateTime<Utc>,
    ) -> Result<TransitTrip, GoogleError> {
        let response: DirectionsResponse = self
            .get_json(
                "directions/json",
                &[
                    ("origin", lat_lng(from)),
                    ("destination", lat_lng(to)),
                    ("mode", "transit".to_string()),
                    ("departure_time", departure.timestamp().to_string()),
                ],
            )
            .await?;

        directions_to_trip(response)
    }

    /// GET `{base_url}/{path}` with the API key appended and decode the body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, GoogleError> {
        let _permit = self
            .semaphore
            .acquire()
            .await
            .map_err(|_| GoogleError::ApiError {
                status: 0,
                message: "Semaphore closed".to_string(),
            })?;

        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, "google request");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&[("key", self.api_key.as_str())])
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::Unauthorized(body));
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GoogleError::ApiError {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;

        serde_json::from_str(&body).map_err(|e| GoogleError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })
    }
}

/// Google's "lat,lng" parameter format.
fn lat_lng(c: Coordinate) -> String {
    format!("{:.6},{:.6}", c.latitude, c.longitude)
}

impl Geocoder for GoogleMapsClient {
    async fn geocode(&self, name: &str) -> Result<Location, ProviderError> {
        Ok(GoogleMapsClient::geocode(self, name).await?)
    }
}

impl AirportLocator for GoogleMapsClient {
    async fn nearby_airports(&self, origin: &Location, radius_m: u32) -> Result<Vec<Location>, ProviderError> {
        Ok(GoogleMapsClient::nearby_airports(self, origin.coordinate, radius_m).await?)
    }
}
