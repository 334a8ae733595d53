//! Core library for the WeatherNow app.
//!
//! This crate defines:
//! - Configuration & credentials handling
//! - The OpenWeather provider used by the proxy server
//! - The proxy API client used by the terminal client
//! - Shared domain models (queries, results)
//!
//! It is used by `weathernow-server` and `weathernow-tui`, but can also be
//! reused by other binaries or services.

pub mod client;
pub mod config;
pub mod model;
pub mod provider;

pub use client::ApiClient;
pub use config::Config;
pub use model::{CurrentWeather, WeatherQuery};
pub use provider::{ProviderError, WeatherProvider};
