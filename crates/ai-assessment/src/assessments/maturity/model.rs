use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{Dimension, IndustryBenchmark, LevelDescriptor, MaturityLevel, MaturityQuestion};
use crate::assessments::compliance::QuestionId;
use crate::assessments::{check_weight_sum, CatalogError};

const AI_MATURITY_MODEL: &str = include_str!("../../../catalog/ai_maturity.json");

const FALLBACK_INDUSTRY: &str = "Other";
const FALLBACK_AVERAGE: f64 = 2.5;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaturityModelDefinition {
    pub version: String,
    pub title: String,
    pub dimensions: Vec<DimensionDefinition>,
    pub levels: Vec<LevelDescriptor>,
    #[serde(default)]
    pub industry_benchmarks: Vec<IndustryBenchmark>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DimensionDefinition {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub questions: Vec<MaturityQuestionDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaturityQuestionDefinition {
    pub id: String,
    pub text: String,
    pub weight: f64,
    pub indicators: Vec<String>,
}

/// Validated dimension model. Dimension weights sum to 1.0, and so do question
/// weights inside every dimension.
#[derive(Debug, Clone, Serialize)]
pub struct MaturityModel {
    version: String,
    title: String,
    dimensions: Vec<Dimension>,
    levels: Vec<LevelDescriptor>,
    industry_benchmarks: Vec<IndustryBenchmark>,
}

impl MaturityModel {
    pub fn ai_maturity() -> Result<Self, CatalogError> {
        Self::from_json_str(AI_MATURITY_MODEL)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&raw)
    }

    pub fn from_json_str(raw: &str) -> Result<Self, CatalogError> {
        let definition: MaturityModelDefinition = serde_json::from_str(raw)?;
        Self::from_definition(definition)
    }

    pub fn from_definition(definition: MaturityModelDefinition) -> Result<Self, CatalogError> {
        if definition.dimensions.is_empty() {
            return Err(CatalogError::Empty("dimensions"));
        }
        check_weight_sum(
            "maturity dimensions",
            definition.dimensions.iter().map(|dimension| dimension.weight),
        )?;

        for level in MaturityLevel::ordered() {
            if !definition
                .levels
                .iter()
                .any(|descriptor| descriptor.level == level.number())
            {
                return Err(CatalogError::MissingLevel(level.number()));
            }
        }

        let mut seen = HashSet::new();
        let mut dimensions = Vec::with_capacity(definition.dimensions.len());
        for dimension in definition.dimensions {
            if !seen.insert(dimension.id.clone()) {
                return Err(CatalogError::DuplicateId(dimension.id));
            }
            if dimension.questions.is_empty() {
                return Err(CatalogError::Empty("questions in a maturity dimension"));
            }
            check_weight_sum(
                &format!("dimension '{}'", dimension.id),
                dimension.questions.iter().map(|question| question.weight),
            )?;

            let mut questions = Vec::with_capacity(dimension.questions.len());
            for question in dimension.questions {
                let id = QuestionId::qualified(&dimension.id, &question.id);
                if !seen.insert(id.0.clone()) {
                    return Err(CatalogError::DuplicateId(id.0));
                }
                if question.indicators.len() != MaturityLevel::ordered().len() {
                    return Err(CatalogError::IndicatorCount {
                        question: id.0,
                        found: question.indicators.len(),
                    });
                }

                questions.push(MaturityQuestion {
                    id,
                    dimension_id: dimension.id.clone(),
                    text: question.text,
                    weight: question.weight,
                    indicators: question.indicators,
                });
            }

            dimensions.push(Dimension {
                id: dimension.id,
                name: dimension.name,
                weight: dimension.weight,
                questions,
            });
        }

        let model = Self {
            version: definition.version,
            title: definition.title,
            dimensions,
            levels: definition.levels,
            industry_benchmarks: definition.industry_benchmarks,
        };

        info!(
            version = %model.version,
            dimensions = model.dimensions.len(),
            questions = model.questions().count(),
            "maturity model loaded"
        );

        Ok(model)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn dimensions(&self) -> &[Dimension] {
        &self.dimensions
    }

    pub fn questions(&self) -> impl Iterator<Item = &MaturityQuestion> {
        self.dimensions
            .iter()
            .flat_map(|dimension| dimension.questions.iter())
    }

    pub fn descriptor(&self, level: MaturityLevel) -> Option<&LevelDescriptor> {
        self.levels
            .iter()
            .find(|descriptor| descriptor.level == level.number())
    }

    /// Benchmark for `industry`, matched case-insensitively, falling back to `Other`.
    pub fn benchmark(&self, industry: &str) -> IndustryBenchmark {
        let lookup = |name: &str| {
            self.industry_benchmarks
                .iter()
                .find(|benchmark| benchmark.industry.eq_ignore_ascii_case(name.trim()))
                .cloned()
        };

        lookup(industry)
            .or_else(|| lookup(FALLBACK_INDUSTRY))
            .unwrap_or_else(|| IndustryBenchmark {
                industry: FALLBACK_INDUSTRY.to_string(),
                average: FALLBACK_AVERAGE,
                ..IndustryBenchmark::default()
            })
    }
}
