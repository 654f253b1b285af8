use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use super::domain::{
    Applicability, ApplicabilityTag, ImplementationEffort, OrganizationRole, Question,
    QuestionId, QuestionReference, RiskLevel, Section,
};
use crate::assessments::{check_weight_sum, CatalogError};

const EU_AI_ACT_CATALOG: &str = include_str!("../../../catalog/eu_ai_act.json");

/// Serialized catalog layout as stored in `catalog/*.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogDefinition {
    pub version: String,
    pub title: String,
    pub sections: Vec<SectionDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionDefinition {
    pub id: String,
    pub name: String,
    pub weight: f64,
    pub questions: Vec<QuestionDefinition>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionDefinition {
    pub id: String,
    pub text: String,
    pub risk_level: RiskLevel,
    pub implementation_effort: ImplementationEffort,
    #[serde(default)]
    pub applicable_to: Vec<ApplicabilityTag>,
    #[serde(default)]
    pub reference: QuestionReference,
}

/// Validated, read-only question catalog.
#[derive(Debug, Clone)]
pub struct ComplianceCatalog {
    version: String,
    title: String,
    sections: Vec<Section>,
    index: HashMap<QuestionId, (usize, usize)>,
}

impl ComplianceCatalog {
    /// The built-in EU AI Act questionnaire.
    pub fn eu_ai_act() -> Result<Self, CatalogError> {
        Self::from_json_str(EU_AI_ACT_CATALOG)
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
        let definition: CatalogDefinition = serde_json::from_str(raw)?;
        Self::from_definition(definition)
    }

    pub fn from_definition(definition: CatalogDefinition) -> Result<Self, CatalogError> {
        if definition.sections.is_empty() {
            return Err(CatalogError::Empty("sections"));
        }
        check_weight_sum(
            "catalog sections",
            definition.sections.iter().map(|section| section.weight),
        )?;

        let mut section_ids = HashSet::new();
        let mut sections = Vec::with_capacity(definition.sections.len());
        let mut index = HashMap::new();

        for (section_idx, section) in definition.sections.into_iter().enumerate() {
            if !section_ids.insert(section.id.clone()) {
                return Err(CatalogError::DuplicateId(section.id));
            }

            let mut questions = Vec::with_capacity(section.questions.len());
            for (question_idx, question) in section.questions.into_iter().enumerate() {
                let id = QuestionId::qualified(&section.id, &question.id);
                if index.insert(id.clone(), (section_idx, question_idx)).is_some() {
                    return Err(CatalogError::DuplicateId(id.0));
                }

                questions.push(Question {
                    id,
                    section_id: section.id.clone(),
                    section_name: section.name.clone(),
                    section_weight: section.weight,
                    text: question.text,
                    risk_level: question.risk_level,
                    implementation_effort: question.implementation_effort,
                    applicability: Applicability::from_tags(&question.applicable_to),
                    reference: question.reference,
                });
            }

            sections.push(Section {
                id: section.id,
                name: section.name,
                weight: section.weight,
                questions,
            });
        }

        let catalog = Self {
            version: definition.version,
            title: definition.title,
            sections,
            index,
        };

        info!(
            version = %catalog.version,
            sections = catalog.sections.len(),
            questions = catalog.len(),
            "compliance catalog loaded"
        );

        Ok(catalog)
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn questions(&self) -> impl Iterator<Item = &Question> {
        self.sections
            .iter()
            .flat_map(|section| section.questions.iter())
    }

    pub fn question(&self, id: &QuestionId) -> Option<&Question> {
        let (section_idx, question_idx) = *self.index.get(id)?;
        self.sections
            .get(section_idx)
            .and_then(|section| section.questions.get(question_idx))
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Questions binding the given role, in catalog order.
    pub fn filter(&self, role: OrganizationRole) -> Vec<&Question> {
        filter_questions(self.questions(), role)
    }
}

/// Narrow a question list to the ones applicable to `role`. Idempotent: feeding the
/// output back in with the same role yields the same list.
pub fn filter_questions<'c, I>(questions: I, role: OrganizationRole) -> Vec<&'c Question>
where
    I: IntoIterator<Item = &'c Question>,
{
    questions
        .into_iter()
        .filter(|question| question.applicability.applies_to(role))
        .collect()
}
