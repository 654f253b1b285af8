use serde::{Deserialize, Serialize};

use crate::assessments::compliance::QuestionId;

/// Scores are weighted sums of decimal weights; round away the float noise at this scale.
const SCORE_SCALE: f64 = 1e9;

/// Round a score to nine decimal places so `2.5000000000000004` reads as `2.5`.
pub fn snap_score(score: f64) -> f64 {
    (score * SCORE_SCALE).round() / SCORE_SCALE
}

/// Discrete 1-5 maturity stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityLevel {
    Awareness,
    Active,
    Operational,
    Systemic,
    Transformational,
}

impl MaturityLevel {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::Awareness,
            Self::Active,
            Self::Operational,
            Self::Systemic,
            Self::Transformational,
        ]
    }

    /// Map a continuous 1.0-5.0 score onto a level. Boundaries fall into the lower level.
    pub fn from_score(score: f64) -> Self {
        let score = snap_score(score);
        if score <= 1.5 {
            Self::Awareness
        } else if score <= 2.5 {
            Self::Active
        } else if score <= 3.5 {
            Self::Operational
        } else if score <= 4.5 {
            Self::Systemic
        } else {
            Self::Transformational
        }
    }

    /// The level above this one; `None` at the top of the scale.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Awareness => Some(Self::Active),
            Self::Active => Some(Self::Operational),
            Self::Operational => Some(Self::Systemic),
            Self::Systemic => Some(Self::Transformational),
            Self::Transformational => None,
        }
    }

    pub const fn number(self) -> u8 {
        match self {
            Self::Awareness => 1,
            Self::Active => 2,
            Self::Operational => 3,
            Self::Systemic => 4,
            Self::Transformational => 5,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Awareness => "Awareness",
            Self::Active => "Active",
            Self::Operational => "Operational",
            Self::Systemic => "Systemic",
            Self::Transformational => "Transformational",
        }
    }
}

/// Typical outcomes for an organisation operating at a given level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessImpact {
    pub revenue: String,
    pub efficiency: String,
    pub innovation: String,
    pub risk: String,
}

/// Narrative for one maturity level. Only `level`, `name` and `description` are required
/// in model files.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LevelDescriptor {
    pub level: u8,
    pub name: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_to_next_level: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_position: Option<String>,
    #[serde(default)]
    pub characteristics: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_impact: Option<BusinessImpact>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub investment_required: Option<String>,
    #[serde(default)]
    pub key_barriers: Vec<String>,
    #[serde(default)]
    pub critical_success_factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturityQuestion {
    pub id: QuestionId,
    pub dimension_id: String,
    pub text: String,
    pub weight: f64,
    pub indicators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dimension {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub questions: Vec<MaturityQuestion>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndustryBenchmark {
    pub industry: String,
    pub average: f64,
    #[serde(default)]
    pub leaders: Vec<String>,
    #[serde(default)]
    pub typical_challenges: String,
    #[serde(default)]
    pub investment_range: String,
}
