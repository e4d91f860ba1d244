use credit_risk::error::InputError;
use credit_risk::form::{FailureNotifier, FormField};

/// Prints the generic failure notice where the user will see it.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct TerminalNotifier;

impl FailureNotifier for TerminalNotifier {
    fn notify_failure(&self, message: &str) {
        eprintln!("!! {message}");
    }
}

/// A single `field=value` edit supplied on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Assignment {
    pub(crate) field: FormField,
    pub(crate) value: String,
}

pub(crate) fn parse_assignment(raw: &str) -> Result<Assignment, InputError> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| InputError::MalformedAssignment(raw.to_string()))?;
    let field = name.parse::<FormField>()?;
    Ok(Assignment {
        field,
        value: value.to_string(),
    })
}
