use std::fmt;

use serde::{Deserialize, Serialize};

use super::fields::FormField;

/// Applicant attributes as sent to the prediction service. Field names are the wire names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormState {
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
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            income: 5000.0,
            loan_amount: 150.0,
            credit_history: 1.0,
            age: 30.0,
            gender: "Male".to_string(),
            married: "Yes".to_string(),
            education: "Graduate".to_string(),
            self_employed: "No".to_string(),
            dependents: "0".to_string(),
            property_area: "Urban".to_string(),
            loan_term: 360.0,
        }
    }
}

/// Borrowed view of a single field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(value) => write!(f, "{value}"),
            FieldValue::Text(value) => f.write_str(value),
        }
    }
}

/// Parses raw input for a numeric field. Anything that is not a finite number becomes `0`.
pub fn coerce_numeric(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}

enum Slot<'a> {
    Number(&'a mut f64),
    Text(&'a mut String),
}

impl FormState {
    /// Replaces one field from raw control input; every other field is left as is.
    pub fn update(&mut self, field: FormField, raw: &str) {
        match self.slot(field) {
            Slot::Number(value) => *value = coerce_numeric(raw),
            Slot::Text(value) => *value = raw.to_string(),
        }
    }

    pub fn value(&self, field: FormField) -> FieldValue<'_> {
        match field {
            FormField::Income => FieldValue::Number(self.income),
            FormField::LoanAmount => FieldValue::Number(self.loan_amount),
            FormField::CreditHistory => FieldValue::Number(self.credit_history),
            FormField::Age => FieldValue::Number(self.age),
            FormField::LoanTerm => FieldValue::Number(self.loan_term),
            FormField::Gender => FieldValue::Text(&self.gender),
            FormField::Married => FieldValue::Text(&self.married),
            FormField::Education => FieldValue::Text(&self.education),
            FormField::SelfEmployed => FieldValue::Text(&self.self_employed),
            FormField::Dependents => FieldValue::Text(&self.dependents),
            FormField::PropertyArea => FieldValue::Text(&self.property_area),
        }
    }

    fn slot(&mut self, field: FormField) -> Slot<'_> {
        match field {
            FormField::Income => Slot::Number(&mut self.income),
            FormField::LoanAmount => Slot::Number(&mut self.loan_amount),
            FormField::CreditHistory => Slot::Number(&mut self.credit_history),
            FormField::Age => Slot::Number(&mut self.age),
            FormField::LoanTerm => Slot::Number(&mut self.loan_term),
            FormField::Gender => Slot::Text(&mut self.gender),
            FormField::Married => Slot::Text(&mut self.married),
            FormField::Education => Slot::Text(&mut self.education),
            FormField::SelfEmployed => Slot::Text(&mut self.self_employed),
            FormField::Dependents => Slot::Text(&mut self.dependents),
            FormField::PropertyArea => Slot::Text(&mut self.property_area),
        }
    }
}
