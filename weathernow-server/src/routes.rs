//! The proxy's single route: `GET /api/weather/{city}`.

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::get,
};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use weathernow_core::{ProviderError, WeatherProvider, WeatherQuery};

/// Fixed failure message returned to callers. Upstream detail stays in the
/// server log.
pub const ERROR_MESSAGE: &str = "Error fetching weather data";

#[derive(Debug, Clone)]
pub struct AppState {
    pub provider: Arc<dyn WeatherProvider>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/weather/{city}", get(get_weather))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// GET /api/weather/{city} — proxy one current-weather lookup.
///
/// On success the provider's JSON body is relayed unmodified. Any provider
/// failure is logged for operator diagnosis and answered with a generic 500.
async fn get_weather(State(state): State<AppState>, Path(city): Path<String>) -> Response {
    let query = WeatherQuery::new(city);

    match state.provider.current_weather(&query).await {
        Ok(body) => ([(header::CONTENT_TYPE, "application/json")], body).into_response(),
        Err(err) => {
            match &err {
                ProviderError::Upstream { status, body } => {
                    tracing::error!(city = %query.city, %status, body = body.as_str(), "weather provider request failed");
                }
                ProviderError::Transport(source) => {
                    tracing::error!(city = %query.city, error = %source, "failed to reach the weather provider");
                }
            }

            (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "message": ERROR_MESSAGE })))
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use http_body_util::BodyExt;
    use tower::ServiceExt;
    use weathernow_core::provider::openweather::OpenWeatherProvider;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const SAMPLE: &str = r#"{"name":"London","dt":1719000000,"main":{"temp":18.4,"humidity":72},"weather":[{"main":"Clouds"}]}"#;

    fn router_for(base_url: String) -> Router {
        let provider = Arc::new(OpenWeatherProvider::with_base_url("test-key", base_url));
        router(AppState { provider })
    }

    async fn send(app: Router, uri: &str) -> (StatusCode, String) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("valid request"))
            .await
            .expect("router must respond");

        let status = response.status();
        let bytes = response.into_body().collect().await.expect("body must collect").to_bytes();

        (status, String::from_utf8(bytes.to_vec()).expect("body must be utf-8"))
    }

    #[tokio::test]
    async fn relays_the_provider_body_unmodified() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE, "application/json"))
            .mount(&upstream)
            .await;

        let (status, body) = send(router_for(upstream.uri()), "/api/weather/London").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, SAMPLE);

        // The documented fields are all present in the relayed payload.
        let parsed: serde_json::Value = serde_json::from_str(&body).expect("valid JSON");
        assert_eq!(parsed["name"], "London");
        assert_eq!(parsed["main"]["temp"], 18.4);
        assert_eq!(parsed["main"]["humidity"], 72);
        assert_eq!(parsed["weather"][0]["main"], "Clouds");
    }

    #[tokio::test]
    async fn upstream_failure_is_a_generic_500() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .respond_with(
                ResponseTemplate::new(401)
                    .set_body_raw(r#"{"cod":401,"message":"Invalid API key"}"#, "application/json"),
            )
            .mount(&upstream)
            .await;

        let (status, body) = send(router_for(upstream.uri()), "/api/weather/London").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let parsed: serde_json::Value = serde_json::from_str(&body).expect("valid JSON");
        assert_eq!(parsed, json!({ "message": ERROR_MESSAGE }));
    }

    #[tokio::test]
    async fn unreachable_provider_is_a_generic_500() {
        let (status, body) = send(router_for("http://127.0.0.1:1".to_string()), "/api/weather/London").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let parsed: serde_json::Value = serde_json::from_str(&body).expect("valid JSON");
        assert_eq!(parsed, json!({ "message": ERROR_MESSAGE }));
    }

    #[tokio::test]
    async fn city_with_a_space_is_decoded_and_forwarded() {
        let upstream = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/data/2.5/weather"))
            .and(query_param("q", "New York"))
            .respond_with(ResponseTemplate::new(200).set_body_raw(SAMPLE, "application/json"))
            .mount(&upstream)
            .await;

        let (status, _) = send(router_for(upstream.uri()), "/api/weather/New%20York").await;

        assert_eq!(status, StatusCode::OK);
    }
}
