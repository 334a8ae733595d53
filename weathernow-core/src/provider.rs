use crate::model::WeatherQuery;
use async_trait::async_trait;
use reqwest::StatusCode;
use std::fmt::Debug;
use thiserror::Error;

pub mod openweather;

/// Failure of one provider call.
///
/// The `Upstream` variant carries the provider's status and (truncated)
/// response body for diagnostic logging; that detail is never shown to an end
/// user.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("failed to reach the weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("weather provider request failed with status {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}

#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Fetch current weather for the queried city, returning the provider's
    /// JSON body verbatim so the proxy can relay it unmodified.
    async fn current_weather(&self, query: &WeatherQuery) -> Result<String, ProviderError>;
}
