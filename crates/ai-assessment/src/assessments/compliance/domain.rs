use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Catalog-wide question key in the form `<section_id>.<question_id>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

impl QuestionId {
    pub fn qualified(section_id: &str, question_id: &str) -> Self {
        Self(format!("{section_id}.{question_id}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for QuestionId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    Critical,
}

impl RiskLevel {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImplementationEffort {
    Low,
    Medium,
    High,
}

impl ImplementationEffort {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Role an organization declares in the AI value chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganizationRole {
    Provider,
    Deployer,
    Both,
}

impl OrganizationRole {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Provider => "Provider",
            Self::Deployer => "Deployer",
            Self::Both => "Provider and Deployer",
        }
    }
}

impl Default for OrganizationRole {
    fn default() -> Self {
        Self::Both
    }
}

impl FromStr for OrganizationRole {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "provider" => Ok(Self::Provider),
            "deployer" => Ok(Self::Deployer),
            "both" | "provider_and_deployer" => Ok(Self::Both),
            other => Err(format!(
                "unknown role '{other}' (expected provider, deployer, or both)"
            )),
        }
    }
}

/// Tag used by catalog files to mark which role an obligation binds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplicabilityTag {
    Provider,
    Deployer,
    Both,
}

/// Which role(s) a question's obligation binds to. An empty tag list, a `both` tag,
/// or both roles listed together all collapse to `Shared`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Applicability {
    Provider,
    Deployer,
    Shared,
}

impl Applicability {
    pub fn from_tags(tags: &[ApplicabilityTag]) -> Self {
        let provider = tags.contains(&ApplicabilityTag::Provider);
        let deployer = tags.contains(&ApplicabilityTag::Deployer);
        let both = tags.contains(&ApplicabilityTag::Both);

        match (provider, deployer, both) {
            (true, false, false) => Self::Provider,
            (false, true, false) => Self::Deployer,
            _ => Self::Shared,
        }
    }

    pub fn applies_to(self, role: OrganizationRole) -> bool {
        match (self, role) {
            (Self::Shared, _) | (_, OrganizationRole::Both) => true,
            (Self::Provider, OrganizationRole::Provider) => true,
            (Self::Deployer, OrganizationRole::Deployer) => true,
            _ => false,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Provider => "Provider Only",
            Self::Deployer => "Deployer Only",
            Self::Shared => "Shared",
        }
    }
}

/// Closed set of answers a respondent can give to a compliance question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerStatus {
    #[serde(alias = "Yes - Fully Compliant")]
    Compliant,
    #[serde(alias = "Partial - In Progress")]
    Partial,
    #[serde(alias = "No - Not Compliant")]
    NonCompliant,
    #[serde(alias = "N/A - Not Applicable")]
    NotApplicable,
}

impl AnswerStatus {
    /// Score contribution, or `None` when the answer leaves the denominator.
    pub const fn points(self) -> Option<u32> {
        match self {
            Self::Compliant => Some(100),
            Self::Partial => Some(50),
            Self::NonCompliant => Some(0),
            Self::NotApplicable => None,
        }
    }

    pub const fn is_gap(self) -> bool {
        matches!(self, Self::Partial | Self::NonCompliant)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Compliant => "Yes - Fully Compliant",
            Self::Partial => "Partial - In Progress",
            Self::NonCompliant => "No - Not Compliant",
            Self::NotApplicable => "N/A - Not Applicable",
        }
    }
}

impl FromStr for AnswerStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let normalized = trimmed.to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "compliant" | "yes" => return Ok(Self::Compliant),
            "partial" => return Ok(Self::Partial),
            "non_compliant" | "noncompliant" | "no" => return Ok(Self::NonCompliant),
            "not_applicable" | "n/a" | "na" => return Ok(Self::NotApplicable),
            _ => {}
        }

        [
            Self::Compliant,
            Self::Partial,
            Self::NonCompliant,
            Self::NotApplicable,
        ]
        .into_iter()
        .find(|status| status.label().eq_ignore_ascii_case(trimmed))
        .ok_or_else(|| format!("unrecognized answer status '{trimmed}'"))
    }
}

/// Display-only citation metadata carried by each question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionReference {
    #[serde(default)]
    pub article: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub example: String,
    #[serde(default)]
    pub documentation: String,
}

/// Immutable catalog entry. Section name and weight are resolved at load so a
/// question can be scored without a catalog lookup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Question {
    pub id: QuestionId,
    pub section_id: String,
    pub section_name: String,
    #[serde(skip)]
    pub section_weight: f64,
    pub text: String,
    pub risk_level: RiskLevel,
    pub implementation_effort: ImplementationEffort,
    pub applicability: Applicability,
    pub reference: QuestionReference,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Section {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub questions: Vec<Question>,
}

/// Headcount bracket used to look up a revenue tier for penalty estimates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SizeBracket {
    #[serde(alias = "1-50 employees")]
    Micro,
    #[serde(alias = "51-200 employees")]
    Small,
    #[serde(alias = "201-1000 employees")]
    Medium,
    #[serde(alias = "1001-5000 employees")]
    Large,
    #[serde(alias = "5000+ employees")]
    Enterprise,
}

impl SizeBracket {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Micro => "1-50 employees",
            Self::Small => "51-200 employees",
            Self::Medium => "201-1000 employees",
            Self::Large => "1001-5000 employees",
            Self::Enterprise => "5000+ employees",
        }
    }
}

impl Default for SizeBracket {
    fn default() -> Self {
        Self::Medium
    }
}

impl FromStr for SizeBracket {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        let bracket = match trimmed.to_ascii_lowercase().as_str() {
            "micro" | "1-50" => Self::Micro,
            "small" | "51-200" => Self::Small,
            "medium" | "201-1000" => Self::Medium,
            "large" | "1001-5000" => Self::Large,
            "enterprise" | "5000+" => Self::Enterprise,
            other => {
                return Err(format!(
                    "unknown size bracket '{other}' (expected micro, small, medium, large, enterprise)"
                ))
            }
        };
        Ok(bracket)
    }
}

/// Who is answering. Feeds the role filter and the penalty estimator only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub role: OrganizationRole,
    #[serde(default)]
    pub size: SizeBracket,
    #[serde(default = "default_industry")]
    pub industry: String,
}

fn default_industry() -> String {
    "Other".to_string()
}

impl OrganizationProfile {
    pub fn new(role: OrganizationRole, size: SizeBracket) -> Self {
        Self {
            name: None,
            role,
            size,
            industry: default_industry(),
        }
    }
}
