use crate::infra::{parse_role, parse_size};
use crate::reports::{load_services, render_compliance_report, render_maturity_report};
use ai_assessment::assessments::compliance::{
    AnswerStatus, Answers, ComplianceAssessmentRequest, OrganizationProfile, OrganizationRole,
    Question, SizeBracket,
};
use ai_assessment::assessments::maturity::{
    LevelAnswers, MaturityAssessmentRequest, MaturityModel,
};
use ai_assessment::error::AppError;
use clap::Args;

/// Answer pattern cycled across the filtered questionnaire.
const DEMO_STATUSES: [AnswerStatus; 7] = [
    AnswerStatus::Compliant,
    AnswerStatus::Compliant,
    AnswerStatus::Partial,
    AnswerStatus::Compliant,
    AnswerStatus::NonCompliant,
    AnswerStatus::Partial,
    AnswerStatus::NotApplicable,
];

#[derive(Args, Debug)]
pub(crate) struct DemoArgs {
    /// Organization role used for the compliance walk-through
    #[arg(long, value_parser = parse_role, default_value = "both")]
    pub(crate) role: OrganizationRole,
    /// Headcount bracket used for the penalty estimate
    #[arg(long, value_parser = parse_size, default_value = "medium")]
    pub(crate) size: SizeBracket,
    /// Industry used for the maturity benchmark
    #[arg(long, default_value = "Technology")]
    pub(crate) industry: String,
    /// Skip the maturity portion of the demo.
    #[arg(long)]
    pub(crate) skip_maturity: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        role,
        size,
        industry,
        skip_maturity,
    } = args;

    let services = load_services()?;

    println!("AI assessment demo (synthetic answers)\n");
    let questions = services.compliance.catalog().filter(role);
    let mut profile = OrganizationProfile::new(role, size);
    profile.name = Some("Demo Organization".to_string());
    profile.industry = industry.clone();

    let report = services.compliance.assess(&ComplianceAssessmentRequest {
        profile,
        responses: synthetic_compliance_answers(&questions),
    })?;
    render_compliance_report(&report);

    if skip_maturity {
        return Ok(());
    }

    println!();
    let report = services.maturity.assess(&MaturityAssessmentRequest {
        industry: Some(industry),
        responses: synthetic_maturity_answers(services.maturity.model()),
    })?;
    render_maturity_report(&report);

    Ok(())
}

pub(crate) fn synthetic_compliance_answers(questions: &[&Question]) -> Answers {
    questions
        .iter()
        .zip(DEMO_STATUSES.iter().cycle())
        .map(|(question, status)| (question.id.clone(), *status))
        .collect()
}

pub(crate) fn synthetic_maturity_answers(model: &MaturityModel) -> LevelAnswers {
    model
        .questions()
        .zip([2_u8, 3, 3, 4, 2].into_iter().cycle())
        .map(|(question, level)| (question.id.clone(), level))
        .collect()
}
