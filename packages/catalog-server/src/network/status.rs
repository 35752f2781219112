//! Root info line and health endpoint, mounted on every service.

use std::time::Instant;

use axum::extract::State;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;

/// Identity and start time of one running service.
#[derive(Debug, Clone)]
pub struct ServiceStatus {
    /// Short service name, e.g. `"movies"`.
    pub service: &'static str,
    /// Human-readable info line served at `/`.
    pub info: &'static str,
    /// Process start time, used for uptime calculation.
    pub started: Instant,
}

impl ServiceStatus {
    #[must_use]
    pub fn new(service: &'static str, info: &'static str) -> Self {
        Self {
            service,
            info,
            started: Instant::now(),
        }
    }
}

/// GET / — one-line service description.
async fn info_handler(State(status): State<ServiceStatus>) -> String {
    status.info.to_string()
}

/// GET /health — always 200; the body carries the service identity and
/// uptime so monitoring can tell the three services apart.
async fn health_handler(State(status): State<ServiceStatus>) -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": status.service,
        "uptime_secs": status.started.elapsed().as_secs(),
    }))
}

/// Builds the `/` and `/health` routes for one service.
pub fn status_router(service: &'static str, info: &'static str) -> Router {
    Router::new()
        .route("/", get(info_handler))
        .route("/health", get(health_handler))
        .with_state(ServiceStatus::new(service, info))
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use super::*;

    #[tokio::test]
    async fn info_returns_the_configured_line() {
        let router = status_router("movies", "Movies SOAP API is running. POST requests to /soap");
        let response = router
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert!(String::from_utf8(bytes.to_vec()).unwrap().contains("Movies SOAP API"));
    }

    #[tokio::test]
    async fn health_reports_service_name() {
        let router = status_router("anime", "Anime GraphQL API is running.");
        let response = router
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["status"], "ok");
        assert_eq!(json["service"], "anime");
        assert!(json["uptime_secs"].is_number());
    }
}
