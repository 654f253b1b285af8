use serde::Serialize;

use super::domain::{
    AnswerStatus, Applicability, ImplementationEffort, QuestionId, RiskLevel,
};
use super::responses::{Response, ResponseSet};

/// An answered question that falls short of full compliance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gap {
    pub question_id: QuestionId,
    pub question: String,
    pub article: String,
    pub section_id: String,
    pub section_name: String,
    pub risk_level: RiskLevel,
    pub implementation_effort: ImplementationEffort,
    pub applicability: Applicability,
    pub status: AnswerStatus,
    pub status_label: &'static str,
}

impl Gap {
    /// Only `Partial` and `NonCompliant` answers produce a gap.
    fn from_response(response: &Response<'_>) -> Option<Self> {
        let status_label = match response.status {
            AnswerStatus::NonCompliant => "Non-compliant",
            AnswerStatus::Partial => "Partial compliance",
            AnswerStatus::Compliant | AnswerStatus::NotApplicable => return None,
        };

        let question = response.question;
        Some(Self {
            question_id: question.id.clone(),
            question: question.text.clone(),
            article: question.reference.article.clone(),
            section_id: question.section_id.clone(),
            section_name: question.section_name.clone(),
            risk_level: question.risk_level,
            implementation_effort: question.implementation_effort,
            applicability: question.applicability,
            status: response.status,
            status_label,
        })
    }
}

/// Gaps bucketed by risk level. Each list keeps the order the questions were answered in.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GapReport {
    pub critical: Vec<Gap>,
    pub high: Vec<Gap>,
    pub medium: Vec<Gap>,
    pub low: Vec<Gap>,
}

impl GapReport {
    /// Critical, then high, then medium gaps. Low gaps are left for the detail view.
    pub fn priority(&self) -> impl Iterator<Item = &Gap> {
        self.critical
            .iter()
            .chain(self.high.iter())
            .chain(self.medium.iter())
    }

    pub fn total(&self) -> usize {
        self.critical.len() + self.high.len() + self.medium.len() + self.low.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    fn bucket_mut(&mut self, risk: RiskLevel) -> &mut Vec<Gap> {
        match risk {
            RiskLevel::Critical => &mut self.critical,
            RiskLevel::High => &mut self.high,
            RiskLevel::Medium => &mut self.medium,
            RiskLevel::Low => &mut self.low,
        }
    }
}

pub fn identify_gaps(responses: &ResponseSet<'_>) -> GapReport {
    let mut report = GapReport::default();

    for gap in responses.responses().iter().filter_map(Gap::from_response) {
        report.bucket_mut(gap.risk_level).push(gap);
    }

    report
}

/// One row of the remediation timeline, in months from the start of the programme.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionPhase {
    pub task: &'static str,
    pub start_month: u8,
    pub end_month: u8,
    pub questions: Vec<QuestionId>,
}

impl ActionPhase {
    fn new<'g, I>(task: &'static str, start_month: u8, end_month: u8, gaps: I) -> Self
    where
        I: IntoIterator<Item = &'g Gap>,
    {
        Self {
            task,
            start_month,
            end_month,
            questions: gaps.into_iter().map(|gap| gap.question_id.clone()).collect(),
        }
    }
}

/// Remediation timeline: critical and high gaps first (months 0-3), medium (2-6), low (5-9).
/// Empty buckets get no phase; ongoing monitoring (3-12) is always scheduled.
pub fn plan_actions(gaps: &GapReport) -> Vec<ActionPhase> {
    let mut plan = Vec::with_capacity(4);

    if !gaps.critical.is_empty() || !gaps.high.is_empty() {
        plan.push(ActionPhase::new(
            "Critical and high risk items",
            0,
            3,
            gaps.critical.iter().chain(gaps.high.iter()),
        ));
    }
    if !gaps.medium.is_empty() {
        plan.push(ActionPhase::new("Medium risk items", 2, 6, &gaps.medium));
    }
    if !gaps.low.is_empty() {
        plan.push(ActionPhase::new("Low risk items", 5, 9, &gaps.low));
    }
    plan.push(ActionPhase::new("Ongoing monitoring", 3, 12, std::iter::empty()));

    plan
}
