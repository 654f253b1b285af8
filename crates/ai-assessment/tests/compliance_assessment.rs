//! End-to-end compliance scenarios through the public service facade, the CSV importer and
//! the HTTP router, using the built-in EU AI Act catalog.

use std::sync::Arc;

use ai_assessment::assessments::compliance::{
    compliance_router, AnswerStatus, Answers, ComplianceAssessmentRequest,
    ComplianceAssessmentService, ComplianceCatalog, OrganizationProfile, OrganizationRole,
    PenaltyPolicy, RiskBand, RiskLevel, SizeBracket,
};
use ai_assessment::assessments::import::parse_compliance_answers;
use ai_assessment::assessments::ValidationError;
use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

fn service() -> ComplianceAssessmentService {
    let catalog = ComplianceCatalog::eu_ai_act().expect("built-in catalog is valid");
    ComplianceAssessmentService::new(Arc::new(catalog), PenaltyPolicy::default())
}

fn answer_all(
    service: &ComplianceAssessmentService,
    role: OrganizationRole,
    status: AnswerStatus,
) -> Answers {
    service
        .catalog()
        .filter(role)
        .into_iter()
        .map(|question| (question.id.clone(), status))
        .collect()
}

#[test]
fn provider_with_full_compliance_has_no_exposure() {
    let service = service();
    let report = service
        .assess(&ComplianceAssessmentRequest {
            profile: OrganizationProfile::new(OrganizationRole::Provider, SizeBracket::Enterprise),
            responses: answer_all(&service, OrganizationRole::Provider, AnswerStatus::Compliant),
        })
        .expect("complete answers");

    assert_eq!(report.overall.percentage, 100.0);
    assert_eq!(report.risk_band, RiskBand::Low);
    assert!(report.gaps.is_empty());
    assert_eq!(report.action_plan.len(), 1);
    assert_eq!(report.action_plan[0].task, "Ongoing monitoring");
    assert_eq!(report.penalty.estimated_exposure, 0.0);
    let answered_weight: f64 = report.sections.iter().map(|section| section.weight).sum();
    assert!((report.weighted_score - answered_weight * 100.0).abs() < 1e-9);
}

#[test]
fn deployer_with_no_compliance_carries_the_full_cap() {
    let service = service();
    let report = service
        .assess(&ComplianceAssessmentRequest {
            profile: OrganizationProfile::new(OrganizationRole::Deployer, SizeBracket::Enterprise),
            responses: answer_all(&service, OrganizationRole::Deployer, AnswerStatus::NonCompliant),
        })
        .expect("complete answers");

    assert_eq!(report.overall.percentage, 0.0);
    assert_eq!(report.risk_band, RiskBand::High);
    assert_eq!(report.gaps.total(), 34);
    let planned: usize = report.action_plan.iter().map(|phase| phase.questions.len()).sum();
    assert_eq!(planned, 34);
    assert_eq!(report.action_plan[0].task, "Critical and high risk items");
    assert_eq!(
        report.action_plan.last().map(|phase| phase.task),
        Some("Ongoing monitoring")
    );
    assert!((report.penalty.max_penalty - 20.0).abs() < 1e-9);
    assert!((report.penalty.estimated_exposure - 20.0).abs() < 1e-9);
    assert_eq!(report.obligations.provider.tally.total, 0);
    assert_eq!(report.obligations.provider.raw_score, 100.0);
}

#[test]
fn critical_gaps_lead_the_priority_list() {
    let service = service();
    let report = service
        .assess(&ComplianceAssessmentRequest {
            profile: OrganizationProfile::new(OrganizationRole::Both, SizeBracket::Medium),
            responses: answer_all(&service, OrganizationRole::Both, AnswerStatus::Partial),
        })
        .expect("complete answers");

    let first = report.gaps.priority().next().expect("at least one gap");
    assert_eq!(first.risk_level, RiskLevel::Critical);
    assert_eq!(first.status_label, "Partial compliance");
    assert_eq!(report.overall.percentage, 50.0);
}

#[test]
fn csv_sheet_missing_questions_is_rejected() {
    let service = service();
    let sheet = "question_id,status\nclassification.q1,Yes - Fully Compliant\n";
    let responses = parse_compliance_answers(sheet.as_bytes()).expect("sheet parses");

    let err = service
        .assess(&ComplianceAssessmentRequest {
            profile: OrganizationProfile::new(OrganizationRole::Provider, SizeBracket::Small),
            responses,
        })
        .expect_err("most questions unanswered");

    match err {
        ValidationError::MissingResponses(missing) => assert_eq!(missing.len(), 41),
        other => panic!("expected missing responses, got {other:?}"),
    }
}

#[tokio::test]
async fn http_assessment_returns_sections_in_catalog_order() {
    let service = service();
    let responses = answer_all(&service, OrganizationRole::Both, AnswerStatus::Compliant);
    let payload = json!({
        "profile": { "role": "both", "size": "large", "name": "Acme" },
        "responses": responses,
    });

    let response = compliance_router(Arc::new(service))
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/v1/compliance/assessments")
                .header("content-type", "application/json")
                .body(Body::from(payload.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body readable");
    let body: Value = serde_json::from_slice(&bytes).expect("json body");

    assert_eq!(body["catalog_version"], "2024.1");
    assert_eq!(body["profile"]["name"], "Acme");
    assert_eq!(body["sections"][0]["section_id"], "classification");
    assert_eq!(body["sections"].as_array().map(Vec::len), Some(11));
}
