use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::form::render::format_risk_score;
use crate::form::FieldValue;

/// One row of the backend's prediction log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: i64,
    pub income: f64,
    pub loan_amount: f64,
    pub credit_history: f64,
    pub age: f64,
    pub gender: String,
    pub married: String,
    pub education: String,
    pub self_employed: String,
    pub dependents: String,
    pub property_area: String,
    pub loan_term: f64,
    /// Debt-to-income ratio computed by the backend. Absent on rows written before it existed.
    #[serde(default)]
    pub dti: Option<f64>,
    /// Loan-to-age ratio computed by the backend.
    #[serde(default)]
    pub lta: Option<f64>,
    pub risk_score: f64,
    pub decision: String,
}

/// Column order of the CSV export; matches the field order of [`HistoryEntry`].
pub const HISTORY_COLUMNS: [&str; 16] = [
    "id",
    "income",
    "loan_amount",
    "credit_history",
    "age",
    "gender",
    "married",
    "education",
    "self_employed",
    "dependents",
    "property_area",
    "loan_term",
    "dti",
    "lta",
    "risk_score",
    "decision",
];

/// Writes a header row followed by one row per entry. An empty log still gets its header.
pub fn write_history_csv<W: Write>(entries: &[HistoryEntry], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    if entries.is_empty() {
        csv_writer.write_record(HISTORY_COLUMNS)?;
    }
    for entry in entries {
        csv_writer.serialize(entry)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Plain-text listing of at most `limit` rows, in the order the backend returned them.
pub fn render_history(entries: &[HistoryEntry], limit: usize) -> String {
    if entries.is_empty() {
        return "No predictions recorded yet.\n".to_string();
    }

    let mut out = String::new();
    out.push_str("Prediction history\n");
    for entry in entries.iter().take(limit) {
        out.push_str(&format!(
            "- #{} {} (risk {}) | income {}, loan {}, term {}, credit history {}, age {}, dependents {}, {}\n",
            entry.id,
            entry.decision,
            format_risk_score(entry.risk_score),
            FieldValue::Number(entry.income),
            FieldValue::Number(entry.loan_amount),
            FieldValue::Number(entry.loan_term),
            FieldValue::Number(entry.credit_history),
            FieldValue::Number(entry.age),
            entry.dependents,
            entry.property_area,
        ));
    }

    let hidden = entries.len().saturating_sub(limit);
    if hidden > 0 {
        out.push_str(&format!("({hidden} older entries not shown)\n"));
    }
    out
}
