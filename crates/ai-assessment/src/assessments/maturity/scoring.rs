use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{snap_score, Dimension, LevelDescriptor, MaturityLevel};
use super::model::MaturityModel;
use crate::assessments::compliance::QuestionId;
use crate::assessments::ValidationError;

/// Chosen level (1-5) per qualified maturity question id.
pub type LevelAnswers = BTreeMap<QuestionId, u8>;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DimensionScore {
    pub dimension_id: String,
    pub dimension_name: String,
    pub weight: f64,
    pub score: f64,
    pub weighted_score: f64,
    pub level: MaturityLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BenchmarkComparison {
    pub industry: String,
    pub average: f64,
    pub delta: f64,
    pub leaders: Vec<String>,
    pub typical_challenges: String,
    pub investment_range: String,
}

/// Path from the assessed level to the one above it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NextLevelGuidance {
    pub level: MaturityLevel,
    pub level_number: u8,
    pub name: String,
    pub target_state: String,
    /// Barriers of the current level that hold the organisation back.
    pub key_barriers: Vec<String>,
    /// Success factors of the target level.
    pub critical_success_factors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub investment_required: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_value: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturityReport {
    pub model_version: String,
    pub dimensions: Vec<DimensionScore>,
    pub overall_score: f64,
    pub level: MaturityLevel,
    pub level_number: u8,
    pub level_name: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor: Option<LevelDescriptor>,
    pub benchmark: BenchmarkComparison,
    /// Absent at the top level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_level: Option<NextLevelGuidance>,
}

/// Every model question answered exactly once with a level in 1..=5, and nothing else.
pub fn validate_levels(model: &MaturityModel, answers: &LevelAnswers) -> Result<(), ValidationError> {
    let unknown: Vec<String> = answers
        .keys()
        .filter(|id| !model.questions().any(|question| &question.id == *id))
        .map(|id| id.to_string())
        .collect();
    if !unknown.is_empty() {
        return Err(ValidationError::UnknownQuestions(unknown));
    }

    let missing: Vec<String> = model
        .questions()
        .filter(|question| !answers.contains_key(&question.id))
        .map(|question| question.id.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(ValidationError::MissingResponses(missing));
    }

    if let Some((id, level)) = answers.iter().find(|(_, level)| !(1..=5).contains(*level)) {
        return Err(ValidationError::LevelOutOfRange {
            question: id.to_string(),
            level: *level,
        });
    }

    Ok(())
}

/// `Σ level × question weight` over the dimension. Unanswered questions contribute nothing.
pub fn score_dimension(dimension: &Dimension, answers: &LevelAnswers) -> f64 {
    let score: f64 = dimension
        .questions
        .iter()
        .filter_map(|question| {
            answers
                .get(&question.id)
                .map(|level| f64::from(*level) * question.weight)
        })
        .sum();
    snap_score(score)
}

pub fn compute_dimension_scores(model: &MaturityModel, answers: &LevelAnswers) -> Vec<DimensionScore> {
    model
        .dimensions()
        .iter()
        .map(|dimension| {
            let score = score_dimension(dimension, answers);
            DimensionScore {
                dimension_id: dimension.id.clone(),
                dimension_name: dimension.name.clone(),
                weight: dimension.weight,
                score,
                weighted_score: snap_score(score * dimension.weight),
                level: MaturityLevel::from_score(score),
            }
        })
        .collect()
}

/// `Σ dimension score × dimension weight`, rounded like the dimension scores.
pub fn overall_maturity(dimensions: &[DimensionScore]) -> f64 {
    let total: f64 = dimensions
        .iter()
        .map(|dimension| dimension.score * dimension.weight)
        .sum();
    snap_score(total)
}

pub fn next_level_guidance(model: &MaturityModel, level: MaturityLevel) -> Option<NextLevelGuidance> {
    let next = level.next()?;
    let target = model.descriptor(next)?;
    let current = model.descriptor(level);

    Some(NextLevelGuidance {
        level: next,
        level_number: next.number(),
        name: target.name.clone(),
        target_state: target.description.clone(),
        key_barriers: current
            .map(|descriptor| descriptor.key_barriers.clone())
            .unwrap_or_default(),
        critical_success_factors: target.critical_success_factors.clone(),
        time_required: current.and_then(|descriptor| descriptor.time_to_next_level.clone()),
        investment_required: target.investment_required.clone(),
        business_value: target
            .business_impact
            .as_ref()
            .map(|impact| impact.revenue.clone()),
    })
}

pub fn assess_maturity(
    model: &MaturityModel,
    answers: &LevelAnswers,
    industry: &str,
) -> Result<MaturityReport, ValidationError> {
    validate_levels(model, answers)?;

    let dimensions = compute_dimension_scores(model, answers);
    let overall_score = overall_maturity(&dimensions);
    let level = MaturityLevel::from_score(overall_score);
    let benchmark = model.benchmark(industry);

    Ok(MaturityReport {
        model_version: model.version().to_string(),
        dimensions,
        overall_score,
        level,
        level_number: level.number(),
        level_name: level.label(),
        descriptor: model.descriptor(level).cloned(),
        benchmark: BenchmarkComparison {
            delta: snap_score(overall_score - benchmark.average),
            industry: benchmark.industry,
            average: benchmark.average,
            leaders: benchmark.leaders,
            typical_challenges: benchmark.typical_challenges,
            investment_range: benchmark.investment_range,
        },
        next_level: next_level_guidance(model, level),
    })
}
