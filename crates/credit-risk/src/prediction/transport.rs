use std::future::Future;

use crate::form::FormState;

/// Status and undecoded body of a backend response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The request never produced a response (refused connection, DNS failure, reset).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("prediction backend unreachable: {0}")]
pub struct TransportError(pub String);

/// Seam between the form and the network so the pipeline can be exercised without a backend.
///
/// Implementations send exactly one request per call: no retries, no timeout.
pub trait PredictionTransport: Send + Sync {
    /// `POST {API_BASE}/predict` with the form serialized as a JSON body.
    fn predict(
        &self,
        form: &FormState,
    ) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;

    /// `GET {API_BASE}/history`.
    fn history(&self) -> impl Future<Output = Result<RawResponse, TransportError>> + Send;
}
