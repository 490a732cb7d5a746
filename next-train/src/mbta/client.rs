//! MBTA v3 HTTP client.
//!
//! Provides async methods for querying routes, stops and predictions, with
//! conversion to domain types. There is no retry: a failed request is
//! reported to the caller as-is.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::domain::{Direction, Listing, Route, RouteType, Stop, join_route_types};
use crate::predict::PredictionRecord;

use super::api::TransitApi;
use super::convert::{convert_predictions, convert_routes, convert_stops};
use super::error::MbtaError;
use super::types::{Document, PredictionAttributes, RouteAttributes, StopAttributes};

/// Default base URL for the MBTA v3 API.
pub const DEFAULT_BASE_URL: &str = "https://api-v3.mbta.com";

/// Default request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuration for the MBTA client.
#[derive(Debug, Clone)]
pub struct MbtaConfig {
    /// API key, sent as `x-api-key` when present
    pub api_key: Option<String>,
    /// Base URL for the API (defaults to production)
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl MbtaConfig {
    /// Create a config for anonymous access to the production API.
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Authenticate with an API key.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for MbtaConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// MBTA v3 API client.
#[derive(Debug, Clone)]
pub struct MbtaClient {
    http: reqwest::Client,
    base_url: String,
}

impl MbtaClient {
    /// Create a new client with the given configuration.
    pub fn new(config: MbtaConfig) -> Result<Self, MbtaError> {
        let mut headers = HeaderMap::new();

        if let Some(key) = &config.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| MbtaError::InvalidApiKey)?;
            headers.insert(HeaderName::from_static("x-api-key"), value);
        }

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a collection endpoint and decode the JSON:API document.
    async fn get_document<A: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
    ) -> Result<Document<A>, MbtaError> {
        let url = format!("{}/{}", self.base_url, path);
        debug!(%url, ?query, "MBTA request");

        let response = self.http.get(&url).query(query).send().await?;
        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(MbtaError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(MbtaError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(MbtaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let doc: Document<A> =
            serde_json::from_str(&body).map_err(|e| MbtaError::json(e, &body))?;

        debug!(%url, resources = doc.data.len(), "MBTA response");
        Ok(doc)
    }
}

impl TransitApi for MbtaClient {
    async fn routes(&self, types: &[RouteType]) -> Result<Listing<Route>, MbtaError> {
        let filter = join_route_types(types);
        let doc: Document<RouteAttributes> = self
            .get_document("routes", &[("filter[type]", filter.as_str())])
            .await?;
        Ok(convert_routes(&doc))
    }

    async fn stops(&self, route: &Route) -> Result<Listing<Stop>, MbtaError> {
        let doc: Document<StopAttributes> = self
            .get_document("stops", &[("filter[route]", route.id())])
            .await?;
        Ok(convert_stops(&doc))
    }

    async fn predictions(
        &self,
        route: &Route,
        stop: &Stop,
        direction: &Direction,
    ) -> Result<Vec<PredictionRecord>, MbtaError> {
        let doc: Document<PredictionAttributes> = self
            .get_document(
                "predictions",
                &[
                    ("filter[route]", route.id()),
                    ("filter[stop]", stop.id()),
                    ("filter[direction_id]", direction.id()),
                ],
            )
            .await?;
        Ok(convert_predictions(&doc)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::RAIL_ROUTE_TYPES;
    use axum::Router;
    use axum::extract::Query;
    use axum::http::StatusCode;
    use axum::routing::get;
    use std::collections::HashMap;

    #[test]
    fn config_builder() {
        let config = MbtaConfig::new()
            .with_api_key("test-key")
            .with_base_url("http://localhost:8080")
            .with_timeout(60);

        assert_eq!(config.api_key.as_deref(), Some("test-key"));
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 60);
    }

    #[test]
    fn config_defaults() {
        let config = MbtaConfig::default();

        assert_eq!(config.api_key, None);
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn client_creation() {
        assert!(MbtaClient::new(MbtaConfig::new()).is_ok());
        assert!(MbtaClient::new(MbtaConfig::new().with_api_key("abc123")).is_ok());
    }

    #[test]
    fn trailing_slash_trimmed() {
        let client =
            MbtaClient::new(MbtaConfig::new().with_base_url("http://localhost:8080/")).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn invalid_api_key_rejected() {
        let result = MbtaClient::new(MbtaConfig::new().with_api_key("bad\nkey"));
        assert!(matches!(result, Err(MbtaError::InvalidApiKey)));
    }

    const ROUTES_DOC: &str = r#"{"data": [
        {"id": "Red", "attributes": {"long_name": "Red Line", "direction_names": ["South", "North"], "type": 1}}
    ]}"#;

    /// Serve `app` on an ephemeral local port and return its base URL.
    async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    /// A server answering every request with `status` and `body`.
    async fn serve_fixed(status: StatusCode, body: &'static str) -> MbtaClient {
        let app = Router::new().fallback(move || async move { (status, body) });
        let base_url = serve(app).await;
        MbtaClient::new(MbtaConfig::new().with_base_url(base_url).with_timeout(5)).unwrap()
    }

    #[tokio::test]
    async fn unauthorized_statuses() {
        for status in [StatusCode::UNAUTHORIZED, StatusCode::FORBIDDEN] {
            let client = serve_fixed(status, "").await;
            let result = client.routes(&RAIL_ROUTE_TYPES).await;
            assert!(matches!(result, Err(MbtaError::Unauthorized)), "{status}");
        }
    }

    #[tokio::test]
    async fn too_many_requests_is_rate_limited() {
        let client = serve_fixed(StatusCode::TOO_MANY_REQUESTS, "slow down").await;
        let result = client.routes(&RAIL_ROUTE_TYPES).await;
        assert!(matches!(result, Err(MbtaError::RateLimited)));
    }

    #[tokio::test]
    async fn other_failures_keep_status_and_body() {
        let client = serve_fixed(StatusCode::SERVICE_UNAVAILABLE, "maintenance").await;
        let route = Route::new("Red", "Red Line", ["South", "North"]);

        match client.stops(&route).await {
            Err(MbtaError::Api { status, message }) => {
                assert_eq!(status, 503);
                assert_eq!(message, "maintenance");
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn undecodable_body_is_json_error() {
        let client = serve_fixed(StatusCode::OK, "<html>oops</html>").await;
        let result = client.routes(&RAIL_ROUTE_TYPES).await;

        match result {
            Err(MbtaError::Json { body, .. }) => {
                assert_eq!(body.as_deref(), Some("<html>oops</html>"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[tokio::test]
    async fn malformed_prediction_time_is_conversion_error() {
        let client = serve_fixed(
            StatusCode::OK,
            r#"{"data": [{"id": "p1", "attributes": {"arrival_time": "soon"}}]}"#,
        )
        .await;
        let route = Route::new("Red", "Red Line", ["South", "North"]);
        let stop = Stop::new("place-davis", "Davis");
        let north = Direction::from_route(&route, "North").unwrap();

        let result = client.predictions(&route, &stop, &north).await;
        assert!(matches!(result, Err(MbtaError::Conversion(_))));
    }

    #[tokio::test]
    async fn routes_request_sends_filter_and_key() {
        let app = Router::new().route(
            "/routes",
            get(
                |headers: HeaderMap, Query(query): Query<HashMap<String, String>>| async move {
                    let key = headers.get("x-api-key").and_then(|v| v.to_str().ok());
                    if key != Some("secret") {
                        return (StatusCode::UNAUTHORIZED, String::new());
                    }
                    match query.get("filter[type]").map(String::as_str) {
                        Some("0,1") => (StatusCode::OK, ROUTES_DOC.to_string()),
                        other => (StatusCode::BAD_REQUEST, format!("{other:?}")),
                    }
                },
            ),
        );
        let base_url = serve(app).await;

        let client = MbtaClient::new(
            MbtaConfig::new()
                .with_api_key("secret")
                .with_base_url(base_url.as_str())
                .with_timeout(5),
        )
        .unwrap();
        let routes = client.routes(&RAIL_ROUTE_TYPES).await.unwrap();
        assert_eq!(
            routes.get("Red Line"),
            Some(&Route::new("Red", "Red Line", ["South", "North"]))
        );

        let anonymous =
            MbtaClient::new(MbtaConfig::new().with_base_url(base_url).with_timeout(5)).unwrap();
        let result = anonymous.routes(&RAIL_ROUTE_TYPES).await;
        assert!(matches!(result, Err(MbtaError::Unauthorized)));
    }
}
