use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::catalog::ComplianceCatalog;
use super::domain::{OrganizationProfile, OrganizationRole, Question};
use super::penalty::{estimate_penalty, PenaltyEstimate, PenaltyPolicy};
use super::report::ComplianceReport;
use super::responses::{submit_responses, Answers};
use crate::assessments::ValidationError;

/// Questionnaire submission: who is answering and what they answered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComplianceAssessmentRequest {
    pub profile: OrganizationProfile,
    pub responses: Answers,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyRequest {
    pub overall_compliance: f64,
    pub profile: OrganizationProfile,
    #[serde(default)]
    pub role: Option<OrganizationRole>,
}

/// Role-filtered view of the catalog handed to the questionnaire UI.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogView<'c> {
    pub version: &'c str,
    pub title: &'c str,
    pub role: OrganizationRole,
    pub questions: Vec<&'c Question>,
}

/// Stateless facade over a loaded catalog and penalty policy. Sessions own their
/// answers; the service keeps nothing between calls.
#[derive(Debug, Clone)]
pub struct ComplianceAssessmentService {
    catalog: Arc<ComplianceCatalog>,
    policy: PenaltyPolicy,
}

impl ComplianceAssessmentService {
    pub fn new(catalog: Arc<ComplianceCatalog>, policy: PenaltyPolicy) -> Self {
        Self { catalog, policy }
    }

    pub fn catalog(&self) -> &ComplianceCatalog {
        &self.catalog
    }

    pub fn policy(&self) -> &PenaltyPolicy {
        &self.policy
    }

    pub fn catalog_view(&self, role: OrganizationRole) -> CatalogView<'_> {
        CatalogView {
            version: self.catalog.version(),
            title: self.catalog.title(),
            role,
            questions: self.catalog.filter(role),
        }
    }

    /// Validate the answers against the role-filtered catalog and score them.
    pub fn assess(
        &self,
        request: &ComplianceAssessmentRequest,
    ) -> Result<ComplianceReport, ValidationError> {
        let questions = self.catalog.filter(request.profile.role);
        let responses = submit_responses(&questions, &request.responses).map_err(|err| {
            warn!(role = ?request.profile.role, error = %err, "rejected compliance submission");
            err
        })?;

        let report = ComplianceReport::build(
            self.catalog.version(),
            &responses,
            &request.profile,
            &self.policy,
        );

        debug!(
            role = ?request.profile.role,
            answered = responses.len(),
            applicable = report.overall.applicable_count,
            overall = report.overall.percentage,
            gaps = report.gaps.total(),
            "compliance assessment scored"
        );

        Ok(report)
    }

    pub fn estimate_penalty(&self, request: &PenaltyRequest) -> PenaltyEstimate {
        let role = request.role.unwrap_or(request.profile.role);
        estimate_penalty(
            &self.policy,
            request.overall_compliance,
            &request.profile,
            role,
        )
    }
}
