use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;

use super::service::{MaturityAssessmentRequest, MaturityAssessmentService};

pub fn maturity_router(service: Arc<MaturityAssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/maturity/model", get(model_handler))
        .route("/api/v1/maturity/assessments", post(assessment_handler))
        .with_state(service)
}

pub(crate) async fn model_handler(
    State(service): State<Arc<MaturityAssessmentService>>,
) -> Response {
    (StatusCode::OK, axum::Json(service.model())).into_response()
}

pub(crate) async fn assessment_handler(
    State(service): State<Arc<MaturityAssessmentService>>,
    axum::Json(request): axum::Json<MaturityAssessmentRequest>,
) -> Response {
    match service.assess(&request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => {
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::assessments::maturity::MaturityModel;

    fn router() -> Router {
        let model = MaturityModel::ai_maturity().expect("built-in model loads");
        maturity_router(Arc::new(MaturityAssessmentService::new(Arc::new(model))))
    }

    async fn read_json_body(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body readable");
        serde_json::from_slice(&bytes).expect("json body")
    }

    #[tokio::test]
    async fn model_route_lists_dimensions() {
        let response = router()
            .oneshot(
                Request::builder()
                    .uri("/api/v1/maturity/model")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::OK);
        let body = read_json_body(response).await;
        assert_eq!(body["dimensions"].as_array().map(Vec::len), Some(5));
    }

    #[tokio::test]
    async fn incomplete_submission_is_unprocessable() {
        let payload = json!({
            "industry": "Retail",
            "responses": { "strategy_leadership.q1": 3 }
        });
        let response = router()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri("/api/v1/maturity/assessments")
                    .header("content-type", "application/json")
                    .body(Body::from(payload.to_string()))
                    .expect("request"),
            )
            .await
            .expect("response");

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = read_json_body(response).await;
        assert!(body["error"]
            .as_str()
            .is_some_and(|message| message.contains("missing responses")));
    }
}
