use std::collections::HashMap;
use std::sync::Arc;

use credit_risk::error::{AppError, InputError};
use credit_risk::form::{
    CreditApplicationForm, FailureNotifier, FormField, PredictCommit, RequestSequence,
};
use credit_risk::prediction::{
    PredictError, PredictionClient, PredictionResult, PredictionTransport,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::{Id, JoinSet};
use tracing::warn;

use crate::infra::{parse_assignment, TerminalNotifier};

const HELP: &str = "\
Commands:
  set <field> <value>   edit a field (also: <field>=<value>)
  predict               send the current application to the backend
  show                  print the form and latest result
  fields                list field names and their options
  help                  print this message
  quit                  leave the session
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SessionCommand {
    Set { field: FormField, value: String },
    Predict,
    Show,
    Fields,
    Help,
    Quit,
    Empty,
}

/// Whether the session keeps reading input after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

pub(crate) fn parse_command(line: &str) -> Result<SessionCommand, InputError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (line, ""),
    };

    let command = match word {
        "" => SessionCommand::Empty,
        "set" => {
            let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
            SessionCommand::Set {
                field: name.parse()?,
                value: value.trim_start().to_string(),
            }
        }
        "predict" => SessionCommand::Predict,
        "show" => SessionCommand::Show,
        "fields" => SessionCommand::Fields,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" => SessionCommand::Quit,
        other if other.contains('=') => {
            let assignment = parse_assignment(line)?;
            SessionCommand::Set {
                field: assignment.field,
                value: assignment.value,
            }
        }
        other => return Err(InputError::UnknownCommand(other.to_string())),
    };
    Ok(command)
}

fn render_fields() -> String {
    let mut out = String::new();
    for field in FormField::ALL {
        let kind = if field.is_numeric() { "number" } else { "text" };
        let choices = field.choices();
        if choices.is_empty() {
            out.push_str(&format!("  {:<15} {kind}\n", field.name()));
        } else {
            out.push_str(&format!(
                "  {:<15} {kind}, one of: {}\n",
                field.name(),
                choices.join(", ")
            ));
        }
    }
    out
}

type Completion = (RequestSequence, Result<PredictionResult, PredictError>);

/// The interactive form. Commands and request completions are handled one at a time
/// by a single loop; requests themselves run in the background.
pub(crate) struct ConsoleSession<T, N> {
    client: Arc<PredictionClient<T>>,
    form: CreditApplicationForm<N>,
    in_flight: JoinSet<Completion>,
    sequences: HashMap<Id, RequestSequence>,
}

impl<T, N> ConsoleSession<T, N>
where
    T: PredictionTransport + 'static,
    N: FailureNotifier,
{
    pub(crate) fn new(client: PredictionClient<T>, notifier: N) -> Self {
        Self {
            client: Arc::new(client),
            form: CreditApplicationForm::new(notifier),
            in_flight: JoinSet::new(),
            sequences: HashMap::new(),
        }
    }

    pub(crate) fn form(&self) -> &CreditApplicationForm<N> {
        &self.form
    }

    pub(crate) fn has_in_flight(&self) -> bool {
        !self.in_flight.is_empty()
    }

    /// Applies one command and returns any text to print.
    pub(crate) fn apply(&mut self, command: SessionCommand) -> (Flow, Option<String>) {
        match command {
            SessionCommand::Set { field, value } => {
                self.form.update_field(field, &value);
                let shown = self.form.form().value(field);
                (Flow::Continue, Some(format!("{} = {shown}\n", field.label())))
            }
            SessionCommand::Predict => {
                let ticket = self.form.begin_predict();
                let sequence = ticket.sequence;
                let client = Arc::clone(&self.client);
                let task = self.in_flight.spawn(async move {
                    let outcome = client.predict(&ticket.form).await;
                    (ticket.sequence, outcome)
                });
                self.sequences.insert(task.id(), sequence);
                (
                    Flow::Continue,
                    Some(format!("Prediction #{} sent\n", sequence.0)),
                )
            }
            SessionCommand::Show => (Flow::Continue, Some(self.form.render())),
            SessionCommand::Fields => (Flow::Continue, Some(render_fields())),
            SessionCommand::Help => (Flow::Continue, Some(HELP.to_string())),
            SessionCommand::Quit => (Flow::Quit, None),
            SessionCommand::Empty => (Flow::Continue, None),
        }
    }

    /// Waits for the next request to finish. Returns the page to print when it committed.
    /// A task that panicked or was cancelled counts as a failed attempt for its request.
    pub(crate) async fn settle(&mut self) -> Option<String> {
        let (sequence, outcome) = match self.in_flight.join_next_with_id().await? {
            Ok((id, completion)) => {
                self.sequences.remove(&id);
                completion
            }
            Err(err) => {
                warn!(error = %err, "prediction task ended without a response");
                let sequence = self.sequences.remove(&err.id())?;
                (sequence, Err(PredictError::Interrupted(err.to_string())))
            }
        };

        match self.form.complete_predict(sequence, outcome) {
            PredictCommit::Committed => Some(self.form.render()),
            PredictCommit::Stale | PredictCommit::Failed => None,
        }
    }
}

pub(crate) async fn run<T>(client: PredictionClient<T>) -> Result<(), AppError>
where
    T: PredictionTransport + 'static,
{
    let mut session = ConsoleSession::new(client, TerminalNotifier);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut input_open = true;

    print!("{}\n{HELP}", session.form().render());

    loop {
        if !input_open && !session.has_in_flight() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    input_open = false;
                    continue;
                };
                match parse_command(&line) {
                    Ok(command) => {
                        let (flow, output) = session.apply(command);
                        if let Some(text) = output {
                            print!("{text}");
                        }
                        if flow == Flow::Quit {
                            break;
                        }
                    }
                    Err(err) => eprintln!("{err}"),
                }
            }
            page = session.settle(), if session.has_in_flight() => {
                if let Some(page) = page {
                    print!("\n{page}");
                }
            }
        }
    }

    Ok(())
}
