// 📐 Field Validation - format rules for loan record fields
//
// Each validator is pure: raw text in, accepted value or ValidationError out.
// Failures are never fatal; the collector reports the message and asks again.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::entities::{CustomerId, LoanType, LoanTypeEntry, RecordId};
use crate::error::ValidationError;

// ============================================================================
// PATTERNS
// ============================================================================

// ASCII classes only: `\d` would also accept non-ASCII Unicode digits.
static RECORD_ID_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{6}$").unwrap());

static CUSTOMER_ID_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z]{3}[0-9]{3}$").unwrap());

// ============================================================================
// USER-FACING MESSAGES
// ============================================================================

pub const INVALID_RECORD_ID: &str =
    "Invalid Record ID format. Please enter in the format 'XXXXXX'.";
pub const INVALID_CUSTOMER_ID: &str =
    "Invalid Customer ID format. Please enter in the format 'AAAXXX'.";
pub const INVALID_LOAN_TYPE: &str = "Invalid loan type. Please enter a valid loan type.";

// ============================================================================
// VALIDATORS
// ============================================================================

/// Exactly six ASCII digits, nothing else.
pub fn is_valid_record_id(input: &str) -> bool {
    RECORD_ID_PATTERN.is_match(input)
}

/// Exactly three uppercase ASCII letters followed by three ASCII digits.
/// Lowercase letters are rejected, not normalized.
pub fn is_valid_customer_id(input: &str) -> bool {
    CUSTOMER_ID_PATTERN.is_match(input)
}

pub fn validate_record_id(input: &str) -> Result<RecordId, ValidationError> {
    if is_valid_record_id(input) {
        Ok(RecordId::from_validated(input.to_string()))
    } else {
        Err(ValidationError {
            field: "record_id",
            message: INVALID_RECORD_ID,
        })
    }
}

pub fn validate_customer_id(input: &str) -> Result<CustomerId, ValidationError> {
    if is_valid_customer_id(input) {
        Ok(CustomerId::from_validated(input.to_string()))
    } else {
        Err(ValidationError {
            field: "customer_id",
            message: INVALID_CUSTOMER_ID,
        })
    }
}

/// Trimmed, case-insensitive match against the fixed loan type set.
/// The accepted entry keeps the trimmed text as typed.
pub fn validate_loan_type(input: &str) -> Result<LoanTypeEntry, ValidationError> {
    let text = input.trim();
    match LoanType::from_name(text) {
        Some(kind) => Ok(LoanTypeEntry::from_validated(kind, text.to_string())),
        None => Err(ValidationError {
            field: "loan_type",
            message: INVALID_LOAN_TYPE,
        }),
    }
}

// ============================================================================
// TESTS
// ============================================================================
