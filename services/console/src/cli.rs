use crate::commands::{run_history, run_predict, HistoryArgs, PredictArgs};
use crate::session;
use clap::{Parser, Subcommand};
use credit_risk::config::AppConfig;
use credit_risk::error::AppError;
use credit_risk::prediction::{HttpTransport, PredictionClient};
use credit_risk::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "Credit Risk Console",
    about = "Fill in a loan application and ask the credit-risk service for a decision",
    version
)]
struct Cli {
    /// Override the configured prediction backend base URL
    #[arg(long, global = true)]
    api_base: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Edit the application interactively and request predictions (default command)
    Session,
    /// Apply field edits to a fresh application and request a single prediction
    Predict(PredictArgs),
    /// List or export the predictions recorded by the backend
    History(HistoryArgs),
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = AppConfig::load_with_api_base(cli.api_base)?;

    telemetry::init(&config.telemetry)?;
    info!(?config.environment, api = config.api.base_url(), "credit risk console starting");

    let client = PredictionClient::new(HttpTransport::new(&config.api));

    match cli.command.unwrap_or(Command::Session) {
        Command::Session => session::run(client).await,
        Command::Predict(args) => run_predict(&client, args).await,
        Command::History(args) => run_history(&client, args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use credit_risk::form::FormField;

    #[test]
    fn defaults_to_session() {
        let cli = Cli::try_parse_from(["credit-risk-console"]).expect("parses");
        assert!(cli.command.is_none());
        assert!(cli.api_base.is_none());
    }

    #[test]
    fn predict_collects_assignments_in_order() {
        let cli = Cli::try_parse_from([
            "credit-risk-console",
            "predict",
            "--set",
            "dependents=3+",
            "--set",
            "income=7200",
            "--api-base",
            "http://risk.internal:5000",
        ])
        .expect("parses");

        assert_eq!(cli.api_base.as_deref(), Some("http://risk.internal:5000"));
        match cli.command {
            Some(Command::Predict(args)) => {
                let fields: Vec<FormField> = args.assignments.iter().map(|a| a.field).collect();
                assert_eq!(fields, vec![FormField::Dependents, FormField::Income]);
                assert_eq!(args.assignments[0].value, "3+");
            }
            other => panic!("expected predict command, got {other:?}"),
        }
    }

    #[test]
    fn predict_rejects_unknown_field() {
        let parsed = Cli::try_parse_from(["credit-risk-console", "predict", "--set", "salary=1"]);
        assert!(parsed.is_err());
    }
}
