use super::common::*;

use crate::assessments::compliance::{
    filter_questions, Applicability, ComplianceCatalog, OrganizationRole, QuestionId, RiskLevel,
};
use crate::assessments::CatalogError;

#[test]
fn built_in_catalog_loads_with_qualified_ids() {
    let catalog = ComplianceCatalog::eu_ai_act().expect("built-in catalog is valid");

    assert_eq!(catalog.len(), 52);
    assert_eq!(catalog.sections().len(), 11);
    let first = catalog
        .question(&QuestionId::from("classification.q1"))
        .expect("first question present");
    assert_eq!(first.risk_level, RiskLevel::Critical);
    assert_eq!(first.applicability, Applicability::Shared);
    assert!(first.reference.article.starts_with("Article 6"));
}

#[test]
fn built_in_catalog_role_views_partition_obligations() {
    let catalog = ComplianceCatalog::eu_ai_act().expect("built-in catalog is valid");

    assert_eq!(catalog.filter(OrganizationRole::Both).len(), 52);
    assert_eq!(catalog.filter(OrganizationRole::Provider).len(), 42);
    assert_eq!(catalog.filter(OrganizationRole::Deployer).len(), 34);
}

#[test]
fn deployer_filter_keeps_deployer_and_universal_questions() {
    let catalog = tagged_catalog();

    let ids: Vec<&str> = catalog
        .filter(OrganizationRole::Deployer)
        .into_iter()
        .map(|question| question.id.as_str())
        .collect();

    assert_eq!(ids, vec!["obligations.deployer", "obligations.universal"]);
}

#[test]
fn both_role_includes_every_question() {
    let catalog = tagged_catalog();
    assert_eq!(catalog.filter(OrganizationRole::Both).len(), catalog.len());
}

#[test]
fn filtering_is_idempotent() {
    let catalog = tagged_catalog();

    for role in [
        OrganizationRole::Provider,
        OrganizationRole::Deployer,
        OrganizationRole::Both,
    ] {
        let once = catalog.filter(role);
        let twice = filter_questions(once.iter().copied(), role);
        assert_eq!(once, twice, "role {role:?}");
    }
}

#[test]
fn section_weights_must_sum_to_one() {
    let err = ComplianceCatalog::from_definition(definition(vec![
        section("a", 0.6, vec![question("q1", RiskLevel::Low, &[])]),
        section("b", 0.41, vec![question("q1", RiskLevel::Low, &[])]),
    ]))
    .expect_err("weights sum to 1.01");

    assert!(matches!(err, CatalogError::WeightSum { .. }), "{err:?}");
}

#[test]
fn duplicate_question_ids_are_rejected() {
    let err = ComplianceCatalog::from_definition(definition(vec![section(
        "a",
        1.0,
        vec![
            question("q1", RiskLevel::Low, &[]),
            question("q1", RiskLevel::High, &[]),
        ],
    )]))
    .expect_err("duplicate id");

    match err {
        CatalogError::DuplicateId(id) => assert_eq!(id, "a.q1"),
        other => panic!("expected duplicate id, got {other:?}"),
    }
}

#[test]
fn duplicate_section_ids_are_rejected() {
    let err = ComplianceCatalog::from_definition(definition(vec![
        section("a", 0.5, vec![question("q1", RiskLevel::Low, &[])]),
        section("a", 0.5, vec![question("q2", RiskLevel::Low, &[])]),
    ]))
    .expect_err("duplicate section");

    assert!(matches!(err, CatalogError::DuplicateId(ref id) if id == "a"));
}

#[test]
fn empty_catalog_is_rejected() {
    let err = ComplianceCatalog::from_definition(definition(Vec::new())).expect_err("no sections");
    assert!(matches!(err, CatalogError::Empty("sections")));
}

#[test]
fn malformed_json_is_a_parse_error() {
    let err = ComplianceCatalog::from_json_str("{\"version\": 1").expect_err("truncated");
    assert!(matches!(err, CatalogError::Parse(_)));
}
