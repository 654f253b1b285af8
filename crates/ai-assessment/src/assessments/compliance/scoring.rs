use std::collections::HashMap;

use serde::Serialize;

use super::domain::{AnswerStatus, Applicability};
use super::responses::ResponseSet;

/// Score assigned to a group in which every answer is N/A.
pub const VACUOUS_SCORE: f64 = 100.0;

/// Per-status answer counts for a group of responses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusTally {
    pub total: usize,
    pub compliant: usize,
    pub partial: usize,
    pub non_compliant: usize,
    pub not_applicable: usize,
}

impl StatusTally {
    pub fn record(&mut self, status: AnswerStatus) {
        self.total += 1;
        match status {
            AnswerStatus::Compliant => self.compliant += 1,
            AnswerStatus::Partial => self.partial += 1,
            AnswerStatus::NonCompliant => self.non_compliant += 1,
            AnswerStatus::NotApplicable => self.not_applicable += 1,
        }
    }

    pub fn applicable(&self) -> usize {
        self.total - self.not_applicable
    }

    /// `(compliant*100 + partial*50) / applicable`, or [`VACUOUS_SCORE`] when nothing applies.
    pub fn raw_score(&self) -> f64 {
        let applicable = self.applicable();
        if applicable == 0 {
            return VACUOUS_SCORE;
        }

        let points = self.compliant * 100 + self.partial * 50;
        points as f64 / applicable as f64
    }
}

impl FromIterator<AnswerStatus> for StatusTally {
    fn from_iter<T: IntoIterator<Item = AnswerStatus>>(iter: T) -> Self {
        let mut tally = Self::default();
        for status in iter {
            tally.record(status);
        }
        tally
    }
}

/// Traffic-light banding used for the overall figure and per-section bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBand {
    Low,
    Medium,
    High,
}

impl RiskBand {
    pub fn from_score(score: f64) -> Self {
        if score >= 80.0 {
            Self::Low
        } else if score >= 60.0 {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionScore {
    pub section_id: String,
    pub section_name: String,
    pub weight: f64,
    #[serde(flatten)]
    pub tally: StatusTally,
    pub applicable_count: usize,
    pub raw_score: f64,
    pub weighted_score: f64,
    pub band: RiskBand,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObligationScore {
    pub obligation: Applicability,
    #[serde(flatten)]
    pub tally: StatusTally,
    pub applicable_count: usize,
    pub raw_score: f64,
}

impl ObligationScore {
    fn from_tally(obligation: Applicability, tally: StatusTally) -> Self {
        Self {
            obligation,
            applicable_count: tally.applicable(),
            raw_score: tally.raw_score(),
            tally,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObligationScores {
    pub provider: ObligationScore,
    pub deployer: ObligationScore,
    pub shared: ObligationScore,
}

/// Flat aggregate over every answer, ignoring section weights.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallCompliance {
    #[serde(flatten)]
    pub tally: StatusTally,
    pub applicable_count: usize,
    pub percentage: f64,
}

/// One score per section that has at least one response, in response order.
pub fn compute_section_scores(responses: &ResponseSet<'_>) -> Vec<SectionScore> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, &str, f64, StatusTally)> = Vec::new();

    for response in responses.responses() {
        let question = response.question;
        let slot = *slots
            .entry(question.section_id.as_str())
            .or_insert_with(|| {
                groups.push((
                    question.section_id.as_str(),
                    question.section_name.as_str(),
                    question.section_weight,
                    StatusTally::default(),
                ));
                groups.len() - 1
            });
        groups[slot].3.record(response.status);
    }

    groups
        .into_iter()
        .map(|(section_id, section_name, weight, tally)| {
            let raw_score = tally.raw_score();
            SectionScore {
                section_id: section_id.to_string(),
                section_name: section_name.to_string(),
                weight,
                tally,
                applicable_count: tally.applicable(),
                raw_score,
                weighted_score: raw_score * weight,
                band: RiskBand::from_score(raw_score),
            }
        })
        .collect()
}

/// Same arithmetic as the section aggregator, grouped by obligation type instead.
pub fn compute_obligation_scores(responses: &ResponseSet<'_>) -> ObligationScores {
    let mut provider = StatusTally::default();
    let mut deployer = StatusTally::default();
    let mut shared = StatusTally::default();

    for response in responses.responses() {
        let bucket = match response.question.applicability {
            Applicability::Provider => &mut provider,
            Applicability::Deployer => &mut deployer,
            Applicability::Shared => &mut shared,
        };
        bucket.record(response.status);
    }

    ObligationScores {
        provider: ObligationScore::from_tally(Applicability::Provider, provider),
        deployer: ObligationScore::from_tally(Applicability::Deployer, deployer),
        shared: ObligationScore::from_tally(Applicability::Shared, shared),
    }
}

pub fn overall_compliance(responses: &ResponseSet<'_>) -> OverallCompliance {
    let tally: StatusTally = responses
        .responses()
        .iter()
        .map(|response| response.status)
        .collect();

    OverallCompliance {
        applicable_count: tally.applicable(),
        percentage: tally.raw_score(),
        tally,
    }
}

/// Sum of weighted section scores. Reported next to, never folded into, the
/// flat overall percentage.
pub fn weighted_catalog_score(sections: &[SectionScore]) -> f64 {
    sections.iter().map(|section| section.weighted_score).sum()
}
