use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::history::HistoryEntry;
use super::transport::{PredictionTransport, RawResponse, TransportError};
use crate::form::FormState;

/// Decision returned by the backend for one application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub decision: String,
    pub risk_score: f64,
}

/// Every way a single predict attempt can fail. All of them are terminal for that attempt.
#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("prediction backend answered with status {status}")]
    Status { status: u16 },
    #[error("prediction backend sent an unreadable body: {0}")]
    Decode(#[source] serde_json::Error),
    /// The task running the request panicked or was cancelled before it produced an outcome.
    #[error("prediction request did not complete: {0}")]
    Interrupted(String),
}

/// Runs the validate, decode, commit pipeline over a transport.
#[derive(Debug, Clone)]
pub struct PredictionClient<T> {
    transport: T,
}

impl<T> PredictionClient<T>
where
    T: PredictionTransport,
{
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// One best-effort attempt: send, check status, then decode.
    pub async fn predict(&self, form: &FormState) -> Result<PredictionResult, PredictError> {
        let response = self.transport.predict(form).await?;
        let result: PredictionResult = decode_success(response)?;
        debug!(
            decision = %result.decision,
            risk_score = result.risk_score,
            "prediction decoded"
        );
        Ok(result)
    }

    /// Most recent predictions recorded by the backend, newest first.
    pub async fn history(&self) -> Result<Vec<HistoryEntry>, PredictError> {
        let response = self.transport.history().await?;
        decode_success(response)
    }
}

/// Refuses non-success statuses before the body is looked at.
pub(crate) fn decode_success<D>(response: RawResponse) -> Result<D, PredictError>
where
    D: DeserializeOwned,
{
    if !response.is_success() {
        warn!(status = response.status, "prediction backend rejected request");
        return Err(PredictError::Status {
            status: response.status,
        });
    }

    serde_json::from_slice(&response.body).map_err(PredictError::Decode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_success_body_and_ignores_extra_keys() {
        let response = RawResponse::new(
            200,
            r#"{"decision":"Approved","risk_score":0.81,"model":"rf-100"}"#,
        );
        let result: PredictionResult = decode_success(response).expect("decodes");
        assert_eq!(result.decision, "Approved");
        assert!((result.risk_score - 0.81).abs() < f64::EPSILON);
    }

    #[test]
    fn status_is_checked_before_decoding_error_body() {
        let response = RawResponse::new(500, r#"{"error":"model unavailable"}"#);
        match decode_success::<PredictionResult>(response) {
            Err(PredictError::Status { status }) => assert_eq!(status, 500),
            other => panic!("expected status failure, got {other:?}"),
        }
    }

    #[test]
    fn status_is_checked_even_when_body_looks_like_a_result() {
        let response = RawResponse::new(400, r#"{"decision":"Approved","risk_score":0.9}"#);
        assert!(matches!(
            decode_success::<PredictionResult>(response),
            Err(PredictError::Status { status: 400 })
        ));
    }

    #[test]
    fn missing_fields_are_a_decode_failure() {
        let response = RawResponse::new(200, r#"{"decision":"Approved"}"#);
        assert!(matches!(
            decode_success::<PredictionResult>(response),
            Err(PredictError::Decode(_))
        ));

        let response = RawResponse::new(200, r#"{"decision":"Approved","risk_score":"high"}"#);
        assert!(matches!(
            decode_success::<PredictionResult>(response),
            Err(PredictError::Decode(_))
        ));
    }

    #[test]
    fn non_json_body_is_a_decode_failure() {
        let response = RawResponse::new(200, "<html>Bad Gateway</html>");
        assert!(matches!(
            decode_success::<PredictionResult>(response),
            Err(PredictError::Decode(_))
        ));
    }
}
