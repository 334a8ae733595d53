use async_trait::async_trait;
use reqwest::Client;

use crate::model::WeatherQuery;

use super::{ProviderError, WeatherProvider};

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org";

#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the provider at a different host, e.g. a stand-in server in
    /// tests.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            http: Client::new(),
        }
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current_weather(&self, query: &WeatherQuery) -> Result<String, ProviderError> {
        let url = format!("{}/data/2.5/weather", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[
                ("q", query.city.as_str()),
                ("appid", self.api_key.as_str()),
                ("units", "metric"),
            ])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(ProviderError::Upstream { status, body: truncate_body(&body) });
        }

        Ok(body)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX { format!("{}...", &body[..MAX]) } else { body.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str =
        r#"{"name":"London","main":{"temp":18.4,"humidity":72},"weather":[{"main":"Clouds"}]}"#;

    #[tokio::test]
    async fn returns_the_provider_body_verbatim() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE, "application/json"))
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("test-key", server.uri());
        let body = provider
            .current_weather(&WeatherQuery::new("London"))
            .await
            .expect("lookup must succeed");

        assert_eq!(body, SAMPLE);
    }

    #[tokio::test]
    async fn non_success_status_carries_upstream_detail() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_raw(r#"{"cod":401,"message":"Invalid API key"}"#, "application/json"),
            )
            .mount(&server)
            .await;

        let provider = OpenWeatherProvider::with_base_url("bad-key", server.uri());
        let err = provider
            .current_weather(&WeatherQuery::new("London"))
            .await
            .expect_err("401 must be an error");

        match err {
            ProviderError::Upstream { status, body } => {
                assert_eq!(status.as_u16(), 401);
                assert!(body.contains("Invalid API key"));
            }
            other => panic!("expected Upstream error, got: {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_host_is_a_transport_error() {
        let provider = OpenWeatherProvider::with_base_url("test-key", "http://127.0.0.1:1");
        let err = provider
            .current_weather(&WeatherQuery::new("London"))
            .await
            .expect_err("connection must fail");

        assert!(matches!(err, ProviderError::Transport(_)));
    }
}
