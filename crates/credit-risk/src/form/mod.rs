//! The loan application form: field state, coercion rules, rendering, and the
//! predict lifecycle that ties the form to the prediction backend.

pub mod component;
mod fields;
pub mod render;
mod state;

#[cfg(test)]
mod tests;

pub use component::{
    CreditApplicationForm, FailureNotifier, PredictCommit, PredictTicket, RequestSequence,
    GENERIC_FAILURE_MESSAGE,
};
pub use fields::{FormField, UnknownField};
pub use render::{format_risk_score, render_form, render_page, render_result};
pub use state::{coerce_numeric, FieldValue, FormState};
