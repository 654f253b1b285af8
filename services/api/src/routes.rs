use crate::infra::{AppState, AssessmentServices};
use ai_assessment::assessments::compliance::compliance_router;
use ai_assessment::assessments::maturity::maturity_router;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde_json::json;

pub(crate) fn with_assessment_routes(services: AssessmentServices) -> axum::Router {
    compliance_router(services.compliance)
        .merge(maturity_router(services.maturity))
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
    use ai_assessment::config::AssessmentConfig;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(ready: bool) -> axum::Router {
        let services =
            AssessmentServices::load(&AssessmentConfig::default()).expect("built-in catalogs");
        let state = AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
        };
        with_assessment_routes(services).layer(Extension(state))
    }

    async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let (status, body) = get(app(false), "/health").await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn readiness_follows_the_flag() {
        let (status, _) = get(app(false), "/ready").await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);

        let ready = app(true);
        let (status, body) = get(ready, "/ready").await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(body["status"], "ready");
    }

    #[tokio::test]
    async fn metrics_render_as_text() {
        let (status, _) = get(app(true), "/metrics").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn assessment_routes_are_mounted() {
        let (status, body) = get(app(true), "/api/v1/compliance/catalog?role=deployer").await;
        assert_eq!(status, StatusCode::OK);
        let body: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(body["questions"].as_array().map(Vec::len), Some(34));

        let (status, _) = get(app(true), "/api/v1/maturity/model").await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_role_query_is_rejected() {
        let (status, body) = get(app(true), "/api/v1/compliance/catalog?role=importer").await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let body: Value = serde_json::from_slice(&body).expect("json");
        assert_eq!(
            body["error"],
            "unknown role 'importer' (expected provider, deployer or both)"
        );
    }
}
