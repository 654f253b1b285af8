use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::assessments::compliance::{
    AnswerStatus, Answers, ApplicabilityTag, CatalogDefinition, ComplianceAssessmentService,
    ComplianceCatalog, ImplementationEffort, PenaltyPolicy, QuestionDefinition, QuestionId,
    QuestionReference, RiskLevel, SectionDefinition,
};

pub(super) fn question(
    id: &str,
    risk_level: RiskLevel,
    applicable_to: &[ApplicabilityTag],
) -> QuestionDefinition {
    QuestionDefinition {
        id: id.to_string(),
        text: format!("Is obligation {id} met?"),
        risk_level,
        implementation_effort: ImplementationEffort::Medium,
        applicable_to: applicable_to.to_vec(),
        reference: QuestionReference {
            article: format!("Article {id}"),
            ..QuestionReference::default()
        },
    }
}

pub(super) fn section(id: &str, weight: f64, questions: Vec<QuestionDefinition>) -> SectionDefinition {
    SectionDefinition {
        id: id.to_string(),
        name: format!("Section {}", id.to_ascii_uppercase()),
        weight,
        questions,
    }
}

pub(super) fn definition(sections: Vec<SectionDefinition>) -> CatalogDefinition {
    CatalogDefinition {
        version: "test".to_string(),
        title: "Fixture catalog".to_string(),
        sections,
    }
}

/// Two sections weighted 0.6 / 0.4 with two universal questions each.
pub(super) fn two_section_catalog() -> ComplianceCatalog {
    ComplianceCatalog::from_definition(definition(vec![
        section(
            "a",
            0.6,
            vec![
                question("q1", RiskLevel::Critical, &[]),
                question("q2", RiskLevel::High, &[]),
            ],
        ),
        section(
            "b",
            0.4,
            vec![
                question("q1", RiskLevel::Medium, &[]),
                question("q2", RiskLevel::Low, &[]),
            ],
        ),
    ]))
    .expect("fixture catalog is valid")
}

/// One provider-only, one deployer-only and one untagged question.
pub(super) fn tagged_catalog() -> ComplianceCatalog {
    ComplianceCatalog::from_definition(definition(vec![section(
        "obligations",
        1.0,
        vec![
            question("provider", RiskLevel::High, &[ApplicabilityTag::Provider]),
            question("deployer", RiskLevel::Medium, &[ApplicabilityTag::Deployer]),
            question("universal", RiskLevel::Critical, &[]),
        ],
    )]))
    .expect("fixture catalog is valid")
}

pub(super) fn answers(entries: &[(&str, AnswerStatus)]) -> Answers {
    entries
        .iter()
        .map(|(id, status)| (QuestionId::from(*id), *status))
        .collect()
}

pub(super) fn uniform_answers(catalog: &ComplianceCatalog, status: AnswerStatus) -> Answers {
    catalog
        .questions()
        .map(|question| (question.id.clone(), status))
        .collect()
}

pub(super) fn service(catalog: ComplianceCatalog) -> Arc<ComplianceAssessmentService> {
    Arc::new(ComplianceAssessmentService::new(
        Arc::new(catalog),
        PenaltyPolicy::default(),
    ))
}

pub(super) fn approx(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should be readable");
    serde_json::from_slice(&bytes).expect("body should be json")
}
