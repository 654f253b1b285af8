mod cli;
mod demo;
mod infra;
mod reports;
mod routes;
mod server;

use ai_assessment::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
