use anyhow::{Context, Result, anyhow};
use reqwest::Client;

use crate::model::CurrentWeather;

/// HTTP client for the WeatherNow proxy server, used by the terminal client.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    http: Client,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();

        Self { base_url, http: Client::new() }
    }

    /// Fetch current weather for a city through the proxy.
    ///
    /// The city is sent exactly as typed (an empty city still issues the
    /// request); any send error, non-2xx status, or parse failure is an error.
    pub async fn current_weather(&self, city: &str) -> Result<CurrentWeather> {
        let url = format!("{}/api/weather/{}", self.base_url, urlencoding::encode(city));

        let res = self
            .http
            .get(&url)
            .send()
            .await
            .context("Failed to send request to the WeatherNow server")?;

        let status = res.status();
        let body = res
            .text()
            .await
            .context("Failed to read WeatherNow server response body")?;

        if !status.is_success() {
            return Err(anyhow!(
                "WeatherNow server request failed with status {}: {}",
                status,
                truncate_body(&body),
            ));
        }

        CurrentWeather::from_provider_json(&body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}
