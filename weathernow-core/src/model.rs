use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// A single weather lookup. Request-scoped, never persisted.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    /// Free-text city name, exactly as the user typed it.
    pub city: String,
}

impl WeatherQuery {
    pub fn new(city: impl Into<String>) -> Self {
        Self { city: city.into() }
    }
}

/// Current weather for one location, as the client renders it.
///
/// Built from the provider payload the proxy passes through; replaced wholesale
/// by the next successful lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentWeather {
    pub location_name: String,
    pub temperature_c: f64,
    pub condition: String,
    pub humidity_pct: u8,
}

impl CurrentWeather {
    /// Parse the OpenWeather current-weather JSON shape
    /// (`name`, `main.temp`, `main.humidity`, `weather[0].main`).
    pub fn from_provider_json(body: &str) -> Result<Self> {
        let parsed: OwCurrentResponse =
            serde_json::from_str(body).context("Failed to parse weather provider JSON")?;

        let condition = parsed
            .weather
            .first()
            .map(|w| w.main.clone())
            .unwrap_or_else(|| "Unknown".to_string());

        Ok(Self {
            location_name: parsed.name,
            temperature_c: parsed.main.temp,
            condition,
            humidity_pct: parsed.main.humidity,
        })
    }
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    main: String,
}

#[derive(Debug, Deserialize)]
struct OwCurrentResponse {
    name: String,
    main: OwMain,
    weather: Vec<OwWeather>,
}
