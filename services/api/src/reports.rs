use crate::infra::{parse_role, parse_size, AssessmentServices};
use ai_assessment::assessments::compliance::{
    ComplianceAssessmentRequest, ComplianceReport, OrganizationProfile, OrganizationRole,
    SizeBracket,
};
use ai_assessment::assessments::import::{load_compliance_answers, load_maturity_answers};
use ai_assessment::assessments::maturity::{MaturityAssessmentRequest, MaturityReport};
use ai_assessment::config::AppConfig;
use ai_assessment::error::AppError;
use chrono::Local;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// Organization role: provider, deployer, or both
    #[arg(long, value_parser = parse_role, default_value = "both")]
    pub(crate) role: OrganizationRole,
}

#[derive(Args, Debug)]
pub(crate) struct ComplianceReportArgs {
    /// Organization role: provider, deployer, or both
    #[arg(long, value_parser = parse_role, default_value = "both")]
    pub(crate) role: OrganizationRole,
    /// Headcount bracket: micro, small, medium, large, enterprise
    #[arg(long, value_parser = parse_size, default_value = "medium")]
    pub(crate) size: SizeBracket,
    /// CSV answer sheet with `question_id,status` columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Organization name shown in the report header
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct MaturityReportArgs {
    /// CSV answer sheet with `question_id,level` columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Industry used for the benchmark comparison
    #[arg(long)]
    pub(crate) industry: Option<String>,
    /// Print the report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn load_services() -> Result<AssessmentServices, AppError> {
    let config = AppConfig::load()?;
    Ok(AssessmentServices::load(&config.assessment)?)
}

pub(crate) fn run_compliance_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let services = load_services()?;
    let view = services.compliance.catalog_view(args.role);

    println!("{} (version {})", view.title, view.version);
    println!(
        "{} questions apply to {}",
        view.questions.len(),
        args.role.label()
    );

    let mut current_section = "";
    for question in &view.questions {
        if question.section_id != current_section {
            println!("\n{}", question.section_name);
            current_section = &question.section_id;
        }
        println!(
            "  {} [{} risk | {}] {}",
            question.id,
            question.risk_level.label(),
            question.applicability.label(),
            question.text
        );
    }

    Ok(())
}

pub(crate) fn run_compliance_report(args: ComplianceReportArgs) -> Result<(), AppError> {
    let services = load_services()?;
    let responses = load_compliance_answers(&args.answers)?;

    let mut profile = OrganizationProfile::new(args.role, args.size);
    profile.name = args.name;

    let report = services.compliance.assess(&ComplianceAssessmentRequest {
        profile,
        responses,
    })?;

    if args.json {
        print_json(&report)
    } else {
        render_compliance_report(&report);
        Ok(())
    }
}

pub(crate) fn run_maturity_report(args: MaturityReportArgs) -> Result<(), AppError> {
    let services = load_services()?;
    let responses = load_maturity_answers(&args.answers)?;

    let report = services.maturity.assess(&MaturityAssessmentRequest {
        industry: args.industry,
        responses,
    })?;

    if args.json {
        print_json(&report)
    } else {
        render_maturity_report(&report);
        Ok(())
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value).map_err(std::io::Error::from)?;
    println!("{json}");
    Ok(())
}

pub(crate) fn render_compliance_report(report: &ComplianceReport) {
    let organization = report
        .profile
        .name
        .as_deref()
        .unwrap_or("Unnamed organization");

    println!("EU AI Act compliance report");
    println!(
        "{} | {} | {} | generated {}",
        organization,
        report.profile.role.label(),
        report.profile.size.label(),
        Local::now().format("%Y-%m-%d")
    );
    println!(
        "Overall compliance {:.1}% ({}) across {} applicable answers",
        report.overall.percentage,
        report.risk_band.label(),
        report.overall.applicable_count
    );
    println!(
        "- {} compliant | {} partial | {} non-compliant | {} not applicable",
        report.overall.tally.compliant,
        report.overall.tally.partial,
        report.overall.tally.non_compliant,
        report.overall.tally.not_applicable
    );
    println!("Weighted catalog score {:.1}", report.weighted_score);

    println!("\nSection scores");
    for section in &report.sections {
        println!(
            "- {}: {:.1}% (weight {:.2}, weighted {:.1}) {}",
            section.section_name,
            section.raw_score,
            section.weight,
            section.weighted_score,
            section.band.label()
        );
    }

    println!("\nObligation scores");
    for obligation in [
        &report.obligations.provider,
        &report.obligations.deployer,
        &report.obligations.shared,
    ] {
        println!(
            "- {}: {:.1}% over {} applicable answers",
            obligation.obligation.label(),
            obligation.raw_score,
            obligation.applicable_count
        );
    }

    if report.gaps.is_empty() {
        println!("\nCompliance gaps: none");
    } else {
        println!(
            "\nPriority gaps ({} total, {} low risk not listed)",
            report.gaps.total(),
            report.gaps.low.len()
        );
        for gap in report.gaps.priority() {
            println!(
                "- [{}] {} ({}, {} effort): {}",
                gap.risk_level.label(),
                gap.question_id,
                gap.status_label,
                gap.implementation_effort.label(),
                gap.article
            );
        }
    }

    println!("\nImplementation timeline");
    for phase in &report.action_plan {
        let items = if phase.questions.is_empty() {
            String::new()
        } else {
            format!(" ({} items)", phase.questions.len())
        };
        println!(
            "- months {:>2}-{:<2} {}{}",
            phase.start_month, phase.end_month, phase.task, items
        );
    }

    let penalty = &report.penalty;
    println!("\nPenalty exposure (EUR millions)");
    println!(
        "- revenue tier {:.0} | maximum penalty {:.2} | risk factor {:.2}",
        penalty.revenue_tier, penalty.max_penalty, penalty.risk_factor
    );
    println!(
        "- estimated exposure {:.2} | typical compliance investment {:.2}",
        penalty.estimated_exposure, penalty.compliance_investment
    );
}

pub(crate) fn render_maturity_report(report: &MaturityReport) {
    println!("AI maturity report (model {})", report.model_version);
    println!(
        "Overall score {:.2} | level {} {}",
        report.overall_score, report.level_number, report.level_name
    );
    if let Some(descriptor) = &report.descriptor {
        println!("{}", descriptor.description);
        if let Some(position) = &descriptor.market_position {
            println!("Market position: {position}");
        }
        if let Some(next) = &descriptor.time_to_next_level {
            println!("Time to next level: {next}");
        }
    }

    println!("\nDimension scores");
    for dimension in &report.dimensions {
        println!(
            "- {}: {:.2} ({}) weight {:.2}",
            dimension.dimension_name,
            dimension.score,
            dimension.level.label(),
            dimension.weight
        );
    }

    let benchmark = &report.benchmark;
    println!(
        "\nBenchmark: {} average {:.1} | delta {:+.2}",
        benchmark.industry, benchmark.average, benchmark.delta
    );
    if !benchmark.leaders.is_empty() {
        println!("- leaders: {}", benchmark.leaders.join(", "));
    }
    if !benchmark.typical_challenges.is_empty() {
        println!("- typical challenges: {}", benchmark.typical_challenges);
    }
    if !benchmark.investment_range.is_empty() {
        println!("- investment range: {}", benchmark.investment_range);
    }

    let Some(next) = &report.next_level else {
        return;
    };
    println!("\nPath to level {}: {}", next.level_number, next.name);
    println!("Target state: {}", next.target_state);
    for barrier in &next.key_barriers {
        println!("- overcome: {barrier}");
    }
    for factor in &next.critical_success_factors {
        println!("- build: {factor}");
    }
    if let Some(investment) = &next.investment_required {
        println!("Investment needed: {investment}");
    }
    if let Some(value) = &next.business_value {
        println!("Business value: {value}");
    }
}
