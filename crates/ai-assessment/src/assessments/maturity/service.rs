use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::model::MaturityModel;
use super::scoring::{assess_maturity, LevelAnswers, MaturityReport};
use crate::assessments::ValidationError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaturityAssessmentRequest {
    #[serde(default)]
    pub industry: Option<String>,
    pub responses: LevelAnswers,
}

#[derive(Debug, Clone)]
pub struct MaturityAssessmentService {
    model: Arc<MaturityModel>,
}

impl MaturityAssessmentService {
    pub fn new(model: Arc<MaturityModel>) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &MaturityModel {
        &self.model
    }

    pub fn assess(
        &self,
        request: &MaturityAssessmentRequest,
    ) -> Result<MaturityReport, ValidationError> {
        let industry = request.industry.as_deref().unwrap_or("Other");
        let report = assess_maturity(&self.model, &request.responses, industry).map_err(|err| {
            warn!(industry, error = %err, "rejected maturity submission");
            err
        })?;

        debug!(
            industry,
            answered = request.responses.len(),
            overall = report.overall_score,
            level = report.level_number,
            "maturity assessment scored"
        );

        Ok(report)
    }
}
