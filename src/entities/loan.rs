// 🏦 Loan Entity - one validated bank loan record
//
// A LoanRecord can only be built from identifiers that already passed
// validation (RecordId, CustomerId, LoanTypeEntry).
// Once built it is never mutated.

use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::validation;

// ============================================================================
// LOAN TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LoanType {
    /// Vehicle financing
    Auto,

    /// Construction / builder loan
    Builder,

    /// Secured against property
    Mortgage,

    /// Unsecured personal loan
    Personal,

    /// Anything else the bank books
    Other,
}

impl LoanType {
    /// Every accepted loan type, in prompt order
    pub const ALL: [LoanType; 5] = [
        LoanType::Auto,
        LoanType::Builder,
        LoanType::Mortgage,
        LoanType::Personal,
        LoanType::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LoanType::Auto => "Auto",
            LoanType::Builder => "Builder",
            LoanType::Mortgage => "Mortgage",
            LoanType::Personal => "Personal",
            LoanType::Other => "Other",
        }
    }

    /// Case-insensitive lookup against the canonical names
    pub fn from_name(name: &str) -> Option<LoanType> {
        LoanType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for LoanType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for LoanType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::validate_loan_type(s).map(|entry| entry.kind())
    }
}

/// An accepted loan type, kept as the user typed it (trimmed).
///
/// "AUTO", "auto" and "Auto" are all `LoanType::Auto`, but each one is
/// reported back exactly as entered.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LoanTypeEntry {
    kind: LoanType,
    text: String,
}

impl LoanTypeEntry {
    pub(crate) fn from_validated(kind: LoanType, text: String) -> Self {
        LoanTypeEntry { kind, text }
    }

    pub fn kind(&self) -> LoanType {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl FromStr for LoanTypeEntry {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::validate_loan_type(s)
    }
}

impl fmt::Display for LoanTypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.text)
    }
}

impl Serialize for LoanTypeEntry {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.text)
    }
}

// ============================================================================
// IDENTIFIERS
// ============================================================================

/// Six ASCII digits, e.g. "123456"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RecordId(String);

impl RecordId {
    pub(crate) fn from_validated(value: String) -> Self {
        RecordId(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for RecordId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::validate_record_id(s)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Three uppercase ASCII letters then three digits, e.g. "ABC123"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CustomerId(String);

impl CustomerId {
    pub(crate) fn from_validated(value: String) -> Self {
        CustomerId(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for CustomerId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::validate_customer_id(s)
    }
}

impl fmt::Display for CustomerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

// ============================================================================
// LOAN RECORD
// ============================================================================

/// A single loan as entered at the console.
///
/// The loan type keeps the entered text; rate, amount and term carry no
/// range rules and are kept exactly as parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoanRecord {
    #[serde(rename = "Record_ID")]
    record_id: RecordId,

    #[serde(rename = "Customer_ID")]
    customer_id: CustomerId,

    #[serde(rename = "Loan_Type")]
    loan_type: LoanTypeEntry,

    #[serde(rename = "Interest_Rate")]
    interest_rate: f64,

    #[serde(rename = "Amount_Left")]
    amount_left: f64,

    /// Years remaining
    #[serde(rename = "Term_Left")]
    term_left: i32,
}

impl LoanRecord {
    pub fn new(
        record_id: RecordId,
        customer_id: CustomerId,
        loan_type: LoanTypeEntry,
        interest_rate: f64,
        amount_left: f64,
        term_left: i32,
    ) -> Self {
        LoanRecord {
            record_id,
            customer_id,
            loan_type,
            interest_rate,
            amount_left,
            term_left,
        }
    }

    pub fn record_id(&self) -> &RecordId {
        &self.record_id
    }

    pub fn customer_id(&self) -> &CustomerId {
        &self.customer_id
    }

    pub fn loan_type(&self) -> LoanType {
        self.loan_type.kind()
    }

    /// The loan type as the user entered it
    pub fn loan_type_entry(&self) -> &LoanTypeEntry {
        &self.loan_type
    }

    pub fn interest_rate(&self) -> f64 {
        self.interest_rate
    }

    pub fn amount_left(&self) -> f64 {
        self.amount_left
    }

    pub fn term_left(&self) -> i32 {
        self.term_left
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> LoanRecord {
        LoanRecord::new(
            "123456".parse().unwrap(),
            "ABC123".parse().unwrap(),
            "AUTO".parse().unwrap(),
            5.5,
            1000.0,
            3,
        )
    }

    #[test]
    fn test_loan_type_from_name_any_case() {
        assert_eq!(LoanType::from_name("AUTO"), Some(LoanType::Auto));
        assert_eq!(LoanType::from_name("mortgage"), Some(LoanType::Mortgage));
        assert_eq!(LoanType::from_name("pErSoNaL"), Some(LoanType::Personal));
        assert_eq!(LoanType::from_name("Car"), None);
    }

    #[test]
    fn test_loan_type_display_pads() {
        assert_eq!(format!("{:<10}|", LoanType::Other), "Other     |");
    }

    #[test]
    fn test_loan_type_entry_keeps_typed_text() {
        let entry: LoanTypeEntry = "  mortGAGE ".parse().unwrap();

        assert_eq!(entry.kind(), LoanType::Mortgage);
        assert_eq!(entry.as_str(), "mortGAGE");
        assert_eq!(format!("{:<10}|", entry), "mortGAGE  |");
        assert_eq!("PERSONAL".parse::<LoanType>(), Ok(LoanType::Personal));
    }

    #[test]
    fn test_ids_parse_through_validators() {
        assert!("123456".parse::<RecordId>().is_ok());
        assert!("12345a".parse::<RecordId>().is_err());
        assert!("XYZ999".parse::<CustomerId>().is_ok());
        assert!("xyz999".parse::<CustomerId>().is_err());
    }

    #[test]
    fn test_record_accessors() {
        let record = sample_record();

        assert_eq!(record.record_id().as_str(), "123456");
        assert_eq!(record.customer_id().as_str(), "ABC123");
        assert_eq!(record.loan_type(), LoanType::Auto);
        assert_eq!(record.loan_type_entry().as_str(), "AUTO");
        assert_eq!(record.interest_rate(), 5.5);
        assert_eq!(record.amount_left(), 1000.0);
        assert_eq!(record.term_left(), 3);
    }

    #[test]
    fn test_record_serializes_with_column_names() {
        let json = serde_json::to_value(sample_record()).unwrap();

        assert_eq!(json["Record_ID"], "123456");
        assert_eq!(json["Customer_ID"], "ABC123");
        assert_eq!(json["Loan_Type"], "AUTO");
        assert_eq!(json["Term_Left"], 3);
    }
}
