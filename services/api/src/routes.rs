use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use career_compass::workflows::assessment::{
    assessment_router, AssessmentService, SessionRepository,
};
use serde_json::json;
use std::sync::Arc;

pub(crate) fn with_assessment_routes<R>(service: Arc<AssessmentService<R>>) -> axum::Router
where
    R: SessionRepository + 'static,
{
    assessment_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infra::InMemorySessionRepository;
    use axum::body::Body;
    use axum::http::Request;
    use career_compass::workflows::assessment::ScoringEngine;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use std::sync::atomic::AtomicBool;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let repository = Arc::new(InMemorySessionRepository::default());
        let service = Arc::new(AssessmentService::new(repository, ScoringEngine::standard()));
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_assessment_routes(service).layer(Extension(state))
    }

    async fn get(router: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).expect("request builds"))
            .await
            .expect("route executes");
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
            .await
            .expect("read body");
        (status, serde_json::from_slice(&body).expect("json payload"))
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, payload) = get(app(false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let (status, payload) = get(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(payload["status"], "initializing");

        let (status, payload) = get(app(true), "/ready").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["status"], "ready");
    }

    #[tokio::test]
    async fn assessment_routes_are_mounted() {
        let (status, payload) = get(app(true), "/api/v1/assessment/catalog").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(payload["sections"].as_array().map(Vec::len), Some(3));
    }
}
