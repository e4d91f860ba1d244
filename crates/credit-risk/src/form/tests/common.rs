use std::collections::VecDeque;
use std::sync::Mutex;

use crate::form::{FailureNotifier, FormState};
use crate::prediction::{PredictionTransport, RawResponse, TransportError};

#[derive(Default)]
pub(super) struct RecordingNotifier {
    messages: Mutex<Vec<String>>,
}

impl RecordingNotifier {
    pub(super) fn messages(&self) -> Vec<String> {
        self.messages.lock().expect("notifier mutex").clone()
    }
}

impl FailureNotifier for RecordingNotifier {
    fn notify_failure(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier mutex")
            .push(message.to_string());
    }
}

/// Replays canned outcomes in order and records every form it was asked to send.
#[derive(Default)]
pub(super) struct ScriptedTransport {
    outcomes: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    sent: Mutex<Vec<FormState>>,
}

impl ScriptedTransport {
    pub(super) fn with(outcomes: Vec<Result<RawResponse, TransportError>>) -> Self {
        Self {
            outcomes: Mutex::new(outcomes.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn sent(&self) -> Vec<FormState> {
        self.sent.lock().expect("sent mutex").clone()
    }
}

impl PredictionTransport for ScriptedTransport {
    async fn predict(&self, form: &FormState) -> Result<RawResponse, TransportError> {
        self.sent.lock().expect("sent mutex").push(form.clone());
        self.outcomes
            .lock()
            .expect("outcome mutex")
            .pop_front()
            .unwrap_or_else(|| Err(TransportError("script exhausted".to_string())))
    }

    async fn history(&self) -> Result<RawResponse, TransportError> {
        Ok(RawResponse::new(200, "[]"))
    }
}

pub(super) fn approved(risk_score: f64) -> Result<RawResponse, TransportError> {
    Ok(RawResponse::new(
        200,
        format!(r#"{{"decision":"Approved","risk_score":{risk_score}}}"#),
    ))
}

pub(super) fn refused() -> Result<RawResponse, TransportError> {
    Err(TransportError("connection refused".to_string()))
}
