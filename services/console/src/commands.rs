use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use clap::Args;
use credit_risk::error::AppError;
use credit_risk::form::{CreditApplicationForm, PredictCommit};
use credit_risk::prediction::{
    render_history, write_history_csv, PredictionClient, PredictionTransport,
};
use tracing::info;

use crate::infra::{parse_assignment, Assignment, TerminalNotifier};

#[derive(Args, Debug)]
pub(crate) struct PredictArgs {
    /// Field edit applied before predicting, e.g. --set dependents=3+ (repeatable, applied in order)
    #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
    pub(crate) assignments: Vec<Assignment>,
    /// Print the decoded result as JSON instead of the rendered form
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct HistoryArgs {
    /// Maximum number of rows to print
    #[arg(long, default_value_t = 20)]
    pub(crate) limit: usize,
    /// Write every returned row to a CSV file instead of printing
    #[arg(long)]
    pub(crate) csv: Option<PathBuf>,
}

pub(crate) async fn run_predict<T>(
    client: &PredictionClient<T>,
    args: PredictArgs,
) -> Result<(), AppError>
where
    T: PredictionTransport,
{
    let mut form = CreditApplicationForm::new(TerminalNotifier);
    for Assignment { field, value } in args.assignments {
        form.update_field(field, &value);
    }

    match form.predict(client).await {
        PredictCommit::Committed => {}
        PredictCommit::Failed | PredictCommit::Stale => return Err(AppError::PredictionFailed),
    }

    let mut stdout = std::io::stdout().lock();
    match form.result() {
        Some(result) if args.json => {
            serde_json::to_writer_pretty(&mut stdout, result).map_err(std::io::Error::from)?;
            writeln!(stdout)?;
        }
        _ => write!(stdout, "{}", form.render())?,
    }
    Ok(())
}

pub(crate) async fn run_history<T>(
    client: &PredictionClient<T>,
    args: HistoryArgs,
) -> Result<(), AppError>
where
    T: PredictionTransport,
{
    let entries = client.history().await?;

    match args.csv {
        Some(path) => {
            let file = File::create(&path)?;
            write_history_csv(&entries, file)?;
            info!(rows = entries.len(), path = %path.display(), "history exported");
            println!("Wrote {} predictions to {}", entries.len(), path.display());
        }
        None => print!("{}", render_history(&entries, args.limit)),
    }
    Ok(())
}
