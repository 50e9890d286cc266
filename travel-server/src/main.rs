use std::net::SocketAddr;

use tracing::info;
use tracing_subscriber::EnvFilter;

use travel_server::config::AppConfig;
use travel_server::google::{GoogleConfig, GoogleMapsClient};
use travel_server::providers::LiveProviders;
use travel_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = AppConfig::from_env();

    // Client-level timeout matches the per-call budget the planner enforces
    let google_config = GoogleConfig::new(&config.google_maps_api_key)
        .with_timeout(config.search.provider_timeout.as_secs().max(1));
    let maps = GoogleMapsClient::new(google_config)?;

    let providers = LiveProviders::new(maps, &config.search);
    let state = AppState::new(providers, config.search.clone());

    let app = create_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(%addr, "travel route finder listening");
    info!("GET /health    - Health check");
    info!("GET /search    - Find routes (origin, destination, date=YYYY-MM-DD)");
    info!("GET /airports  - Airports near a location (location, radius)");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
