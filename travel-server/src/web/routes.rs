//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{error, warn};

use crate::planner::{
    AirportLocator, Geocoder, Planner, ProviderError, SearchError, SearchRequest, TravelProviders,
    bounded,
};

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router<P>(state: AppState<P>) -> Router
where
    P: TravelProviders + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health))
        .route("/search", get(search_routes::<P>))
        .route("/airports", get(nearby_airports::<P>))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Parse a YYYY-MM-DD date as midnight UTC.
fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .ok()
        .map(|d| d.and_time(NaiveTime::MIN).and_utc())
}

/// Treat absent and blank query parameters alike.
fn non_empty(param: &Option<String>) -> Option<&str> {
    param.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Find itineraries between two places on a date, cheapest first.
async fn search_routes<P>(
    State(state): State<AppState<P>>,
    Query(req): Query<SearchRoutesRequest>,
) -> Result<Json<Vec<ItineraryResult>>, AppError>
where
    P: TravelProviders + Send + Sync + 'static,
{
    let (Some(origin), Some(destination), Some(date)) = (
        non_empty(&req.origin),
        non_empty(&req.destination),
        non_empty(&req.date),
    ) else {
        return Err(AppError::BadRequest {
            message: "Missing required query parameters: origin, destination, date".to_string(),
        });
    };

    let date = parse_date(date).ok_or_else(|| AppError::BadRequest {
        message: format!("Invalid date {date:?}. Use YYYY-MM-DD"),
    })?;

    let request = SearchRequest::new(origin, destination, date);
    let planner = Planner::new(state.providers.as_ref(), state.config.as_ref());
    let itineraries = planner.find_routes(&request).await?;

    Ok(Json(
        itineraries
            .iter()
            .map(ItineraryResult::from_itinerary)
            .collect(),
    ))
}

/// List airports near a geocoded place.
async fn nearby_airports<P>(
    State(state): State<AppState<P>>,
    Query(req): Query<NearbyAirportsRequest>,
) -> Result<Json<Vec<LocationResult>>, AppError>
where
    P: TravelProviders + Send + Sync + 'static,
{
    let Some(name) = non_empty(&req.location) else {
        return Err(AppError::BadRequest {
            message: "Missing location parameter".to_string(),
        });
    };

    let radius_m = non_empty(&req.radius)
        .and_then(|r| r.parse::<u32>().ok())
        .unwrap_or(state.config.default_radius_m);

    let timeout = state.config.provider_timeout;
    let providers = state.providers.as_ref();

    let location = bounded(timeout, providers.geocode(name))
        .await
        .map_err(|e| match e {
            ProviderError::NotFound(_) => AppError::NotFound {
                message: format!("Location not found: {name}"),
            },
            other => AppError::Internal {
                message: format!("Geocoding failed: {other}"),
            },
        })?;

    let airports = bounded(timeout, providers.nearby_airports(&location, radius_m))
        .await
        .map_err(|e| AppError::Internal {
            message: format!("Error finding airports: {e}"),
        })?;

    Ok(Json(
        airports.iter().map(LocationResult::from_location).collect(),
    ))
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
    Internal { message: String },
}

impl From<SearchError> for AppError {
    fn from(e: SearchError) -> Self {
        match e {
            SearchError::InvalidRequest(msg) => AppError::BadRequest { message: msg },
            _ => AppError::Internal {
                message: format!("Error finding routes: {e}"),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
            AppError::Internal { message } => (StatusCode::INTERNAL_SERVER_ERROR, message),
        };

        if status.is_server_error() {
            error!(%status, %message, "request failed");
        } else {
            warn!(%status, %message, "request rejected");
        }

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Currency, IataCode, Leg, Location};
    use crate::flights::EstimatedFlights;
    use crate::ground::taxi_leg;
    use crate::planner::{FlightSearch, GroundTransport, SearchConfig};
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use std::sync::Mutex;
    use tower::ServiceExt;

    /// Two Spanish cities with one airport each, taxis and estimated flights.
    struct StubProviders {
        flights: EstimatedFlights,
        last_radius: Mutex<Option<u32>>,
    }

    impl StubProviders {
        fn new() -> Self {
            Self {
                flights: EstimatedFlights::new(Currency::EUR),
                last_radius: Mutex::new(None),
            }
        }
    }

    impl Geocoder for StubProviders {
        async fn geocode(&self, name: &str) -> Result<Location, ProviderError> {
            let coordinate = match name {
                "Madrid" => Coordinate::new(40.4168, -3.7038),
                "Barcelona" => Coordinate::new(41.3874, 2.1686),
                _ => return Err(ProviderError::NotFound(name.to_string())),
            };
            Ok(Location::city(name, coordinate).with_country("Spain"))
        }
    }

    impl AirportLocator for StubProviders {
        async fn nearby_airports(
            &self,
            origin: &Location,
            radius_m: u32,
        ) -> Result<Vec<Location>, ProviderError> {
            *self.last_radius.lock().unwrap() = Some(radius_m);
            let (name, code, lat, lon) = match origin.name.as_str() {
                "Madrid" => ("Madrid-Barajas Airport", "MAD", 40.4983, -3.5676),
                "Barcelona" => ("Barcelona-El Prat Airport", "BCN", 41.2974, 2.0833),
                _ => return Ok(Vec::new()),
            };
            Ok(vec![Location::airport(
                name,
                Coordinate::new(lat, lon),
                IataCode::parse(code).ok(),
            )])
        }
    }

    impl GroundTransport for StubProviders {
        async fn ground_leg(
            &self,
            from: &Location,
            to: &Location,
            date: DateTime<Utc>,
        ) -> Result<Leg, ProviderError> {
            taxi_leg(from, to, date, Currency::EUR)
        }
    }

    impl FlightSearch for StubProviders {
        async fn direct_flights(
            &self,
            from: &Location,
            to: &Location,
            date: DateTime<Utc>,
        ) -> Result<Vec<Leg>, ProviderError> {
            self.flights.direct_flights(from, to, date).await
        }

        async fn connecting_flights(
            &self,
            from: &Location,
            to: &Location,
            date: DateTime<Utc>,
        ) -> Result<Vec<Vec<Leg>>, ProviderError> {
            self.flights.connecting_flights(from, to, date).await
        }
    }

    fn state() -> AppState<StubProviders> {
        AppState::new(StubProviders::new(), SearchConfig::default())
    }

    async fn get(state: AppState<StubProviders>, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = create_router(state)
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
        (status, json)
    }

    #[tokio::test]
    async fn health_check() {
        let response = create_router(state())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn search_returns_ranked_itineraries() {
        let (status, json) = get(
            state(),
            "/search?origin=Madrid&destination=Barcelona&date=2024-07-01",
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let routes = json.as_array().unwrap();

        // One direct flight plus one connection through each hub
        assert_eq!(routes.len(), 4);
        assert_eq!(routes[0]["description"], "taxi (Taxi) → flight (Airlines)");
        assert_eq!(routes[0]["currency"], "EUR");
        assert_eq!(routes[0]["departure"], "2024-07-01T00:00:00Z");
        assert_eq!(routes[0]["arrival"], "2024-07-01T06:30:00Z");
        assert_eq!(routes[0]["legs"][1]["to"]["code"], "BCN");

        let prices: Vec<f64> = routes
            .iter()
            .map(|r| r["total_price"].as_f64().unwrap())
            .collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn search_missing_params() {
        let (status, json) = get(state(), "/search?origin=Madrid&destination=Barcelona").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("date"));
    }

    #[tokio::test]
    async fn search_bad_date() {
        let (status, json) = get(
            state(),
            "/search?origin=Madrid&destination=Barcelona&date=01/07/2024",
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(json["error"].as_str().unwrap().contains("YYYY-MM-DD"));
    }

    #[tokio::test]
    async fn search_unknown_origin() {
        let (status, json) = get(
            state(),
            "/search?origin=Atlantis&destination=Barcelona&date=2024-07-01",
        )
        .await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(json["error"].as_str().unwrap().contains("Atlantis"));
    }

    #[tokio::test]
    async fn airports_near_location() {
        let state = state();
        let (status, json) = get(state.clone(), "/airports?location=Barcelona&radius=25000").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(json[0]["code"], "BCN");
        assert_eq!(json[0]["type"], "airport");
        assert_eq!(*state.providers.last_radius.lock().unwrap(), Some(25_000));
    }

    #[tokio::test]
    async fn airports_default_radius() {
        let state = state();
        let (status, _) = get(state.clone(), "/airports?location=Madrid&radius=wide").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(*state.providers.last_radius.lock().unwrap(), Some(300_000));
    }

    #[tokio::test]
    async fn airports_unknown_location() {
        let (status, json) = get(state(), "/airports?location=Atlantis").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(json["error"], "Location not found: Atlantis");
    }

    #[tokio::test]
    async fn airports_missing_location() {
        let (status, _) = get(state(), "/airports").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn date_parsing() {
        assert_eq!(
            parse_date("2024-07-01").map(|d| d.to_rfc3339()),
            Some("2024-07-01T00:00:00+00:00".to_string())
        );
        assert!(parse_date("2024-13-01").is_none());
        assert!(parse_date("tomorrow").is_none());
    }
}
