use crate::config::ConfigError;
use crate::form::UnknownField;
use crate::prediction::PredictError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Prediction(PredictError),
    /// A predict attempt failed and the user has already been notified.
    PredictionFailed,
    Export(csv::Error),
    Input(InputError),
}

/// Malformed user input at the console boundary.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
    #[error("expected FIELD=VALUE, got '{0}'")]
    MalformedAssignment(String),
    #[error("unknown command '{0}', try 'help'")]
    UnknownCommand(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Prediction(err) => write!(f, "prediction error: {}", err),
            AppError::PredictionFailed => write!(f, "prediction request failed"),
            AppError::Export(err) => write!(f, "export error: {}", err),
            AppError::Input(err) => write!(f, "input error: {}", err),
        }
    }
}

impl AppError {
    /// Whether the failure still needs to be reported when the process exits.
    pub fn needs_report(&self) -> bool {
        !matches!(self, AppError::PredictionFailed)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Prediction(err) => Some(err),
            AppError::PredictionFailed => None,
            AppError::Export(err) => Some(err),
            AppError::Input(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<PredictError> for AppError {
    fn from(value: PredictError) -> Self {
        Self::Prediction(value)
    }
}

impl From<csv::Error> for AppError {
    fn from(value: csv::Error) -> Self {
        Self::Export(value)
    }
}

impl From<InputError> for AppError {
    fn from(value: InputError) -> Self {
        Self::Input(value)
    }
}

impl From<UnknownField> for AppError {
    fn from(value: UnknownField) -> Self {
        Self::Input(InputError::UnknownField(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notified_prediction_failure_is_not_reported_again() {
        assert!(!AppError::PredictionFailed.needs_report());
        assert!(AppError::Input(InputError::UnknownCommand("submit".to_string())).needs_report());
        assert!(AppError::Prediction(PredictError::Status { status: 500 }).needs_report());
    }
}
