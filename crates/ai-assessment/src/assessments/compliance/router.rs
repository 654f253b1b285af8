use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::OrganizationRole;
use super::service::{ComplianceAssessmentRequest, ComplianceAssessmentService, PenaltyRequest};
use crate::assessments::ValidationError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct CatalogQuery {
    #[serde(default)]
    pub(crate) role: Option<String>,
}

impl CatalogQuery {
    /// Missing role means the full catalog.
    pub(crate) fn role(&self) -> Result<OrganizationRole, ValidationError> {
        match self.role.as_deref() {
            None => Ok(OrganizationRole::default()),
            Some(raw) => raw
                .parse::<OrganizationRole>()
                .map_err(|_| ValidationError::UnknownRole(raw.to_string())),
        }
    }
}

/// Router builder exposing the compliance engine over JSON.
pub fn compliance_router(service: Arc<ComplianceAssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/compliance/catalog", get(catalog_handler))
        .route("/api/v1/compliance/assessments", post(assessment_handler))
        .route("/api/v1/compliance/penalty", post(penalty_handler))
        .with_state(service)
}

pub(crate) async fn catalog_handler(
    State(service): State<Arc<ComplianceAssessmentService>>,
    Query(query): Query<CatalogQuery>,
) -> Response {
    match query.role() {
        Ok(role) => (StatusCode::OK, axum::Json(service.catalog_view(role))).into_response(),
        Err(error) => unprocessable(&error),
    }
}

pub(crate) async fn assessment_handler(
    State(service): State<Arc<ComplianceAssessmentService>>,
    axum::Json(request): axum::Json<ComplianceAssessmentRequest>,
) -> Response {
    match service.assess(&request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => unprocessable(&error),
    }
}

pub(crate) async fn penalty_handler(
    State(service): State<Arc<ComplianceAssessmentService>>,
    axum::Json(request): axum::Json<PenaltyRequest>,
) -> Response {
    let estimate = service.estimate_penalty(&request);
    (StatusCode::OK, axum::Json(estimate)).into_response()
}

fn unprocessable(error: &ValidationError) -> Response {
    let payload = json!({
        "error": error.to_string(),
    });
    (StatusCode::UNPROCESSABLE_ENTITY, axum::Json(payload)).into_response()
}
