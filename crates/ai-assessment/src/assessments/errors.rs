use std::path::PathBuf;

/// Catalog and model invariant violations. Raised once at load time and fatal.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid catalog JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("catalog defines no {0}")]
    Empty(&'static str),
    #[error("weights for {scope} must sum to 1.0 (found {total:.4})")]
    WeightSum { scope: String, total: f64 },
    #[error("weight {weight} in {scope} must be a finite, non-negative number")]
    InvalidWeight { scope: String, weight: f64 },
    #[error("duplicate id '{0}' in catalog")]
    DuplicateId(String),
    #[error("maturity question {question} must describe 5 levels (found {found})")]
    IndicatorCount { question: String, found: usize },
    #[error("maturity model is missing a descriptor for level {0}")]
    MissingLevel(u8),
}

/// A submitted answer set that cannot be scored.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("responses reference unknown questions: {}", .0.join(", "))]
    UnknownQuestions(Vec<String>),
    #[error("missing responses for {} question(s): {}", .0.len(), .0.join(", "))]
    MissingResponses(Vec<String>),
    #[error("maturity level for {question} must be between 1 and 5 (found {level})")]
    LevelOutOfRange { question: String, level: u8 },
    #[error("unknown role '{0}' (expected provider, deployer or both)")]
    UnknownRole(String),
}
