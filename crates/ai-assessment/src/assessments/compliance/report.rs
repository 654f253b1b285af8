use serde::Serialize;

use super::domain::OrganizationProfile;
use super::gaps::{identify_gaps, plan_actions, ActionPhase, GapReport};
use super::penalty::{estimate_penalty, PenaltyEstimate, PenaltyPolicy};
use super::responses::ResponseSet;
use super::scoring::{
    compute_obligation_scores, compute_section_scores, overall_compliance,
    weighted_catalog_score, ObligationScores, OverallCompliance, RiskBand, SectionScore,
};

/// Everything the presentation layer needs after a questionnaire is submitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComplianceReport {
    pub catalog_version: String,
    pub profile: OrganizationProfile,
    pub overall: OverallCompliance,
    pub risk_band: RiskBand,
    pub weighted_score: f64,
    pub sections: Vec<SectionScore>,
    pub obligations: ObligationScores,
    pub gaps: GapReport,
    pub action_plan: Vec<ActionPhase>,
    pub penalty: PenaltyEstimate,
}

impl ComplianceReport {
    /// Run every aggregator over the same response set.
    pub fn build(
        catalog_version: &str,
        responses: &ResponseSet<'_>,
        profile: &OrganizationProfile,
        policy: &PenaltyPolicy,
    ) -> Self {
        let overall = overall_compliance(responses);
        let sections = compute_section_scores(responses);
        let weighted_score = weighted_catalog_score(&sections);
        let penalty = estimate_penalty(policy, overall.percentage, profile, profile.role);
        let gaps = identify_gaps(responses);

        Self {
            catalog_version: catalog_version.to_string(),
            profile: profile.clone(),
            risk_band: RiskBand::from_score(overall.percentage),
            overall,
            weighted_score,
            sections,
            obligations: compute_obligation_scores(responses),
            action_plan: plan_actions(&gaps),
            gaps,
            penalty,
        }
    }
}
