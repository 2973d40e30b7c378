// Loan Records - Core Library
// Validators, collector and renderer, shared by the CLI and the tests

pub mod app;
pub mod collector;
pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod report;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use app::{run_session, SessionOutcome};
pub use collector::Collector;
pub use config::{Cli, Config};
pub use entities::{CustomerId, LoanRecord, LoanType, LoanTypeEntry, RecordId};
pub use error::{CollectError, ReportError, StoreError, ValidationError};
pub use input::{InputSource, LineInput};
pub use report::{render, render_table, ReportFormat};
pub use store::RecordCollection;
pub use validation::{
    is_valid_customer_id, is_valid_record_id, validate_customer_id, validate_loan_type,
    validate_record_id,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
