//! Loan application form state and the client side of the credit-risk prediction service.

pub mod config;
pub mod error;
pub mod form;
pub mod prediction;
pub mod telemetry;
