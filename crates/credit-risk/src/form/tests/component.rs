use super::common::*;
use crate::form::{
    CreditApplicationForm, FormField, PredictCommit, RequestSequence, GENERIC_FAILURE_MESSAGE,
};
use crate::prediction::{PredictError, PredictionClient, PredictionResult, RawResponse};

fn result(decision: &str, risk_score: f64) -> PredictionResult {
    PredictionResult {
        decision: decision.to_string(),
        risk_score,
    }
}

#[tokio::test]
async fn successful_predict_commits_and_renders_result() {
    let client = PredictionClient::new(ScriptedTransport::with(vec![approved(0.123456)]));
    let mut form = CreditApplicationForm::new(RecordingNotifier::default());
    form.update_field(FormField::Dependents, "3+");

    let commit = form.predict(&client).await;

    assert_eq!(commit, PredictCommit::Committed);
    assert_eq!(form.result(), Some(&result("Approved", 0.123456)));
    let page = form.render();
    assert!(page.contains("Decision: Approved"));
    assert!(page.contains("Risk Score: 0.123"));
    assert!(form.notifier().messages().is_empty());

    let sent = client.transport().sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].dependents, "3+");
}

#[tokio::test]
async fn transport_failure_notifies_once_and_keeps_no_result() {
    let client = PredictionClient::new(ScriptedTransport::with(vec![refused()]));
    let mut form = CreditApplicationForm::new(RecordingNotifier::default());

    let commit = form.predict(&client).await;

    assert_eq!(commit, PredictCommit::Failed);
    assert!(form.result().is_none());
    assert_eq!(
        form.notifier().messages(),
        vec![GENERIC_FAILURE_MESSAGE.to_string()]
    );
    assert!(!form.render().contains("Result"));
}

#[tokio::test]
async fn failure_after_success_keeps_previous_result() {
    let client = PredictionClient::new(ScriptedTransport::with(vec![
        approved(0.42),
        Ok(RawResponse::new(503, r#"{"error":"overloaded"}"#)),
        Ok(RawResponse::new(200, "not json")),
    ]));
    let mut form = CreditApplicationForm::new(RecordingNotifier::default());

    assert_eq!(form.predict(&client).await, PredictCommit::Committed);
    form.update_field(FormField::Income, "9000");
    assert_eq!(form.predict(&client).await, PredictCommit::Failed);
    assert_eq!(form.predict(&client).await, PredictCommit::Failed);

    assert_eq!(form.result(), Some(&result("Approved", 0.42)));
    assert_eq!(form.notifier().messages().len(), 2);
    assert_eq!(form.form().income, 9000.0);
}

#[tokio::test]
async fn error_status_with_result_shaped_body_is_not_committed() {
    let client = PredictionClient::new(ScriptedTransport::with(vec![Ok(RawResponse::new(
        422,
        r#"{"decision":"Approved","risk_score":0.01}"#,
    ))]));
    let mut form = CreditApplicationForm::new(RecordingNotifier::default());

    assert_eq!(form.predict(&client).await, PredictCommit::Failed);
    assert!(form.result().is_none());
}

#[test]
fn each_request_gets_a_new_sequence() {
    let mut form = CreditApplicationForm::new(RecordingNotifier::default());
    assert_eq!(form.latest_sequence(), RequestSequence(0));

    let first = form.begin_predict();
    form.update_field(FormField::Age, "51");
    let second = form.begin_predict();

    assert!(second.sequence > first.sequence);
    assert_eq!(form.latest_sequence(), second.sequence);
    assert_eq!(first.form.age, 30.0);
    assert_eq!(second.form.age, 51.0);
}

#[test]
fn late_response_to_older_request_is_discarded() {
    let mut form = CreditApplicationForm::new(RecordingNotifier::default());
    let first = form.begin_predict();
    let second = form.begin_predict();

    // The second request resolves before the first.
    assert_eq!(
        form.complete_predict(second.sequence, Ok(result("Rejected", 0.71))),
        PredictCommit::Committed
    );
    assert_eq!(
        form.complete_predict(first.sequence, Ok(result("Approved", 0.12))),
        PredictCommit::Stale
    );

    assert_eq!(form.result(), Some(&result("Rejected", 0.71)));
}

#[test]
fn older_response_is_discarded_while_latest_is_in_flight() {
    let mut form = CreditApplicationForm::new(RecordingNotifier::default());
    let first = form.begin_predict();
    let second = form.begin_predict();

    assert_eq!(
        form.complete_predict(first.sequence, Ok(result("Approved", 0.12))),
        PredictCommit::Stale
    );
    assert!(form.result().is_none());

    assert_eq!(
        form.complete_predict(second.sequence, Ok(result("Rejected", 0.71))),
        PredictCommit::Committed
    );
    assert_eq!(form.result(), Some(&result("Rejected", 0.71)));
}

#[test]
fn stale_failure_is_silent() {
    let mut form = CreditApplicationForm::new(RecordingNotifier::default());
    let first = form.begin_predict();
    let second = form.begin_predict();

    let stale = form.complete_predict(
        first.sequence,
        Err(PredictError::Status { status: 500 }),
    );
    assert_eq!(stale, PredictCommit::Stale);
    assert!(form.notifier().messages().is_empty());

    form.complete_predict(second.sequence, Ok(result("Approved", 0.2)));
    assert_eq!(form.result(), Some(&result("Approved", 0.2)));
}
