use crate::demo::{run_demo, DemoArgs};
use crate::reports::{
    run_compliance_catalog, run_compliance_report, run_maturity_report, CatalogArgs,
    ComplianceReportArgs, MaturityReportArgs,
};
use crate::server;
use ai_assessment::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "AI Assessment",
    about = "Score AI maturity and EU AI Act compliance questionnaires",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the compliance catalog or score a compliance answer sheet
    Compliance {
        #[command(subcommand)]
        command: ComplianceCommand,
    },
    /// Score a maturity answer sheet
    Maturity {
        #[command(subcommand)]
        command: MaturityCommand,
    },
    /// Run both assessments against a synthetic answer set
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ComplianceCommand {
    /// Print the questions that apply to a role
    Catalog(CatalogArgs),
    /// Score a CSV answer sheet (`question_id,status`)
    Report(ComplianceReportArgs),
}

#[derive(Subcommand, Debug)]
enum MaturityCommand {
    /// Score a CSV answer sheet (`question_id,level`)
    Report(MaturityReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Compliance {
            command: ComplianceCommand::Catalog(args),
        } => run_compliance_catalog(args),
        Command::Compliance {
            command: ComplianceCommand::Report(args),
        } => run_compliance_report(args),
        Command::Maturity {
            command: MaturityCommand::Report(args),
        } => run_maturity_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
