//! EU AI Act compliance questionnaire: catalog, role filtering, aggregation, gaps and
//! penalty exposure.

pub mod catalog;
pub mod domain;
pub mod gaps;
pub mod penalty;
pub mod report;
pub mod responses;
pub mod router;
pub mod scoring;
pub mod service;

#[cfg(test)]
mod tests;

pub use catalog::{
    filter_questions, CatalogDefinition, ComplianceCatalog, QuestionDefinition, SectionDefinition,
};
pub use domain::{
    AnswerStatus, Applicability, ApplicabilityTag, ImplementationEffort, OrganizationProfile,
    OrganizationRole, Question, QuestionId, QuestionReference, RiskLevel, Section, SizeBracket,
};
pub use gaps::{identify_gaps, plan_actions, ActionPhase, Gap, GapReport};
pub use penalty::{
    estimate_penalty, revenue_tier, PenaltyEstimate, PenaltyPolicy, PenaltyPolicyError,
    RolePenalty,
};
pub use report::ComplianceReport;
pub use responses::{submit_responses, Answers, Response, ResponseSet};
pub use router::compliance_router;
pub use scoring::{
    compute_obligation_scores, compute_section_scores, overall_compliance,
    weighted_catalog_score, ObligationScore, ObligationScores, OverallCompliance, RiskBand,
    SectionScore, StatusTally, VACUOUS_SCORE,
};
pub use service::{
    CatalogView, ComplianceAssessmentRequest, ComplianceAssessmentService, PenaltyRequest,
};
