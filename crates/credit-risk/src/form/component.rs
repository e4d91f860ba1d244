use tracing::{debug, error, info};

use super::fields::FormField;
use super::render::render_page;
use super::state::FormState;
use crate::prediction::{PredictError, PredictionClient, PredictionResult, PredictionTransport};

/// Shown to the user for every failed attempt; failure details only go to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Error connecting to backend!";

/// Blocking user notification raised when a predict attempt fails.
pub trait FailureNotifier: Send + Sync {
    fn notify_failure(&self, message: &str);
}

/// Position of a predict request in issue order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSequence(pub u64);

/// Snapshot of the form taken when a predict request is issued.
#[derive(Debug, Clone)]
pub struct PredictTicket {
    pub sequence: RequestSequence,
    pub form: FormState,
}

/// What happened to a completed predict request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PredictCommit {
    /// Latest request succeeded and its result is now displayed.
    Committed,
    /// A newer request was issued after this one; its outcome was dropped.
    Stale,
    /// Latest request failed; the user was notified and the previous result kept.
    Failed,
}

/// The loan application form: field state, the last committed prediction, and the
/// request sequence used to drop responses that were overtaken by a newer request.
pub struct CreditApplicationForm<N> {
    form: FormState,
    result: Option<PredictionResult>,
    latest: RequestSequence,
    notifier: N,
}

impl<N> CreditApplicationForm<N>
where
    N: FailureNotifier,
{
    pub fn new(notifier: N) -> Self {
        Self::with_form(FormState::default(), notifier)
    }

    pub fn with_form(form: FormState, notifier: N) -> Self {
        Self {
            form,
            result: None,
            latest: RequestSequence(0),
            notifier,
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }

    pub fn latest_sequence(&self) -> RequestSequence {
        self.latest
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn update_field(&mut self, field: FormField, raw: &str) {
        self.form.update(field, raw);
        debug!(field = field.name(), value = %self.form.value(field), "form field updated");
    }

    /// Issues a new request identity. Any request issued earlier becomes stale.
    pub fn begin_predict(&mut self) -> PredictTicket {
        self.latest = RequestSequence(self.latest.0 + 1);
        info!(sequence = self.latest.0, "prediction requested");
        PredictTicket {
            sequence: self.latest,
            form: self.form.clone(),
        }
    }

    pub fn complete_predict(
        &mut self,
        sequence: RequestSequence,
        outcome: Result<PredictionResult, PredictError>,
    ) -> PredictCommit {
        if sequence != self.latest {
            debug!(
                sequence = sequence.0,
                latest = self.latest.0,
                failed = outcome.is_err(),
                "discarding response to superseded request"
            );
            return PredictCommit::Stale;
        }

        match outcome {
            Ok(result) => {
                info!(
                    sequence = sequence.0,
                    decision = %result.decision,
                    risk_score = result.risk_score,
                    "prediction committed"
                );
                self.result = Some(result);
                PredictCommit::Committed
            }
            Err(err) => {
                error!(sequence = sequence.0, error = %err, "prediction failed");
                self.notifier.notify_failure(GENERIC_FAILURE_MESSAGE);
                PredictCommit::Failed
            }
        }
    }

    /// Sequential predict for callers that await each request before the next.
    pub async fn predict<T>(&mut self, client: &PredictionClient<T>) -> PredictCommit
    where
        T: PredictionTransport,
    {
        let ticket = self.begin_predict();
        let outcome = client.predict(&ticket.form).await;
        self.complete_predict(ticket.sequence, outcome)
    }

    pub fn render(&self) -> String {
        render_page(&self.form, self.result.as_ref())
    }
}
