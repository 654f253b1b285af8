//! Companion maturity flow: weighted 1-5 levels per dimension rolled into one overall level.

pub mod domain;
pub mod model;
pub mod router;
pub mod scoring;
pub mod service;

pub use domain::{
    snap_score, BusinessImpact, Dimension, IndustryBenchmark, LevelDescriptor, MaturityLevel,
    MaturityQuestion,
};
pub use model::{
    DimensionDefinition, MaturityModel, MaturityModelDefinition, MaturityQuestionDefinition,
};
pub use router::maturity_router;
pub use scoring::{
    assess_maturity, compute_dimension_scores, next_level_guidance, overall_maturity,
    score_dimension, validate_levels, BenchmarkComparison, DimensionScore, LevelAnswers,
    MaturityReport, NextLevelGuidance,
};
pub use service::{MaturityAssessmentRequest, MaturityAssessmentService};
