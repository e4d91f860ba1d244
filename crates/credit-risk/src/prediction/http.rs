use reqwest::Client;
use tracing::debug;

use super::transport::{PredictionTransport, RawResponse, TransportError};
use crate::config::ApiConfig;
use crate::form::FormState;

/// reqwest-backed transport. The client carries no timeout and no retry policy.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    predict_url: String,
    history_url: String,
}

impl HttpTransport {
    pub fn new(api: &ApiConfig) -> Self {
        Self::with_client(Client::new(), api)
    }

    pub fn with_client(client: Client, api: &ApiConfig) -> Self {
        Self {
            client,
            predict_url: api.predict_url(),
            history_url: api.history_url(),
        }
    }

    async fn collect(response: reqwest::Response) -> Result<RawResponse, TransportError> {
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(transport_error)?;
        debug!(status, bytes = body.len(), "prediction backend responded");
        Ok(RawResponse::new(status, body.to_vec()))
    }
}

fn transport_error(err: reqwest::Error) -> TransportError {
    TransportError(err.to_string())
}

impl PredictionTransport for HttpTransport {
    async fn predict(&self, form: &FormState) -> Result<RawResponse, TransportError> {
        debug!(url = %self.predict_url, "sending prediction request");
        let response = self
            .client
            .post(&self.predict_url)
            .json(form)
            .send()
            .await
            .map_err(transport_error)?;
        Self::collect(response).await
    }

    async fn history(&self) -> Result<RawResponse, TransportError> {
        debug!(url = %self.history_url, "fetching prediction history");
        let response = self
            .client
            .get(&self.history_url)
            .send()
            .await
            .map_err(transport_error)?;
        Self::collect(response).await
    }
}
