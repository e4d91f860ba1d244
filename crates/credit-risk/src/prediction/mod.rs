//! Outbound contract with the prediction backend: `POST /predict` and `GET /history`.

pub mod client;
pub mod history;
mod http;
pub mod transport;

pub use client::{PredictError, PredictionClient, PredictionResult};
pub use history::{render_history, write_history_csv, HistoryEntry, HISTORY_COLUMNS};
pub use http::HttpTransport;
pub use transport::{PredictionTransport, RawResponse, TransportError};
