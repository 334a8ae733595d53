//! Binary crate for the WeatherNow API proxy server.
//!
//! One route, `GET /api/weather/{city}`, forwards the city to the OpenWeather
//! provider and relays the JSON response. Configuration comes from the config
//! file and the `PORT` / `WEATHER_API_KEY` environment variables.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;
use weathernow_core::Config;
use weathernow_core::provider::openweather::OpenWeatherProvider;

mod routes;

#[derive(Debug, Parser)]
#[command(name = "weathernow-server", version, about = "WeatherNow API proxy server")]
struct Args {
    /// Listen port; overrides the config file and the PORT environment
    /// variable.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = Config::load()?;
    if let Some(port) = args.port {
        config.port = port;
    }

    let api_key = config.require_api_key()?.to_owned();
    let provider = Arc::new(OpenWeatherProvider::new(api_key));

    let app = routes::router(routes::AppState { provider });

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind to {addr}"))?;

    tracing::info!("server is running on port {}", config.port);

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
