use ai_assessment::assessments::compliance::{
    ComplianceAssessmentService, OrganizationRole, SizeBracket,
};
use ai_assessment::assessments::maturity::MaturityAssessmentService;
use ai_assessment::assessments::CatalogError;
use ai_assessment::config::AssessmentConfig;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Both assessment engines, loaded once and shared read-only across requests.
#[derive(Debug, Clone)]
pub(crate) struct AssessmentServices {
    pub(crate) compliance: Arc<ComplianceAssessmentService>,
    pub(crate) maturity: Arc<MaturityAssessmentService>,
}

impl AssessmentServices {
    pub(crate) fn load(config: &AssessmentConfig) -> Result<Self, CatalogError> {
        let catalog = config.load_compliance_catalog()?;
        let model = config.load_maturity_model()?;

        Ok(Self {
            compliance: Arc::new(ComplianceAssessmentService::new(
                Arc::new(catalog),
                config.penalty,
            )),
            maturity: Arc::new(MaturityAssessmentService::new(Arc::new(model))),
        })
    }
}

pub(crate) fn parse_role(raw: &str) -> Result<OrganizationRole, String> {
    raw.parse()
}

pub(crate) fn parse_size(raw: &str) -> Result<SizeBracket, String> {
    raw.parse()
}
