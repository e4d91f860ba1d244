use super::fields::FormField;
use super::state::FormState;
use crate::prediction::PredictionResult;

/// Three decimal places, rounding exact midpoints away from zero like a browser's `toFixed(3)`.
pub fn format_risk_score(score: f64) -> String {
    // A value lies exactly halfway between two thousandths only when it is an odd multiple of 1/16.
    let sixteenths = score.abs() * 16.0;
    let midpoint = sixteenths.fract() == 0.0 && sixteenths % 2.0 == 1.0 && sixteenths < 1e15;
    if !midpoint {
        return format!("{score:.3}");
    }

    let thousandths = (sixteenths as u64 * 125 + 1) / 2;
    let sign = if score < 0.0 { "-" } else { "" };
    format!("{sign}{}.{:03}", thousandths / 1000, thousandths % 1000)
}

pub fn render_form(form: &FormState) -> String {
    let mut out = String::from("Credit Risk Predictor\n");
    for field in FormField::ALL {
        let choices = field.choices();
        if choices.is_empty() {
            out.push_str(&format!("  {}: {}\n", field.label(), form.value(field)));
        } else {
            out.push_str(&format!(
                "  {}: {} [{}]\n",
                field.label(),
                form.value(field),
                choices.join(" | ")
            ));
        }
    }
    out
}

pub fn render_result(result: &PredictionResult) -> String {
    format!(
        "Result\n  Decision: {}\n  Risk Score: {}\n",
        result.decision,
        format_risk_score(result.risk_score)
    )
}

/// The form is always shown; the result panel only once a prediction has been committed.
pub fn render_page(form: &FormState, result: Option<&PredictionResult>) -> String {
    let mut page = render_form(form);
    if let Some(result) = result {
        page.push('\n');
        page.push_str(&render_result(result));
    }
    page
}
