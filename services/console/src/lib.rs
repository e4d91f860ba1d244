mod cli;
mod commands;
mod infra;
mod session;

use credit_risk::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
