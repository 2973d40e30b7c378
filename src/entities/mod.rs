// Entity Models
//
// Loan records are values: built once from validated fields, never mutated.

pub mod loan;

pub use loan::{CustomerId, LoanRecord, LoanType, LoanTypeEntry, RecordId};
