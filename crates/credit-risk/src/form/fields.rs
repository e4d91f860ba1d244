use std::fmt;
use std::str::FromStr;

/// The eleven applicant attributes collected by the form, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Income,
    LoanAmount,
    CreditHistory,
    Age,
    Gender,
    Married,
    Education,
    SelfEmployed,
    Dependents,
    PropertyArea,
    LoanTerm,
}

impl FormField {
    pub const ALL: [FormField; 11] = [
        FormField::Income,
        FormField::LoanAmount,
        FormField::CreditHistory,
        FormField::Age,
        FormField::Gender,
        FormField::Married,
        FormField::Education,
        FormField::SelfEmployed,
        FormField::Dependents,
        FormField::PropertyArea,
        FormField::LoanTerm,
    ];

    /// Wire name used in the request body.
    pub fn name(self) -> &'static str {
        match self {
            FormField::Income => "income",
            FormField::LoanAmount => "loan_amount",
            FormField::CreditHistory => "credit_history",
            FormField::Age => "age",
            FormField::Gender => "gender",
            FormField::Married => "married",
            FormField::Education => "education",
            FormField::SelfEmployed => "self_employed",
            FormField::Dependents => "dependents",
            FormField::PropertyArea => "property_area",
            FormField::LoanTerm => "loan_term",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            FormField::Income => "Income",
            FormField::LoanAmount => "Loan Amount",
            FormField::CreditHistory => "Credit History",
            FormField::Age => "Age",
            FormField::Gender => "Gender",
            FormField::Married => "Married",
            FormField::Education => "Education",
            FormField::SelfEmployed => "Self Employed",
            FormField::Dependents => "Dependents",
            FormField::PropertyArea => "Property Area",
            FormField::LoanTerm => "Loan Term (months)",
        }
    }

    /// Fields coerced to floating point on every edit. `dependents` is text so "3+" survives.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            FormField::Income
                | FormField::LoanAmount
                | FormField::CreditHistory
                | FormField::Age
                | FormField::LoanTerm
        )
    }

    /// Options offered by selection controls. Empty for free-entry inputs.
    pub fn choices(self) -> &'static [&'static str] {
        match self {
            FormField::CreditHistory => &["1", "0"],
            FormField::Gender => &["Male", "Female"],
            FormField::Married => &["Yes", "No"],
            FormField::Education => &["Graduate", "Not Graduate"],
            FormField::SelfEmployed => &["No", "Yes"],
            FormField::Dependents => &["0", "1", "2", "3+"],
            FormField::PropertyArea => &["Urban", "Semiurban", "Rural"],
            FormField::Income | FormField::LoanAmount | FormField::Age | FormField::LoanTerm => {
                &[]
            }
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown form field '{0}'")]
pub struct UnknownField(pub String);

impl FromStr for FormField {
    type Err = UnknownField;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let wanted = value.trim();
        FormField::ALL
            .into_iter()
            .find(|field| field.name() == wanted)
            .ok_or_else(|| UnknownField(wanted.to_string()))
    }
}
