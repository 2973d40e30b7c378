// 📝 Interactive Collector - prompt, validate, retry, store
//
// Format violations re-ask the same field forever. A numeric parse failure
// throws away the partial record and restarts the slot from Record ID.
// A bad record count is not retried at all.

use std::fmt::Display;
use std::io::Write;
use std::str::FromStr;

use tracing::{debug, info, warn};

use crate::entities::LoanRecord;
use crate::error::{CollectError, ValidationError};
use crate::input::InputSource;
use crate::store::RecordCollection;
use crate::validation;

// ============================================================================
// PROMPTS
// ============================================================================

pub const COUNT_PROMPT: &str = "Enter the maximum number of records: ";
pub const RECORD_ID_PROMPT: &str = "Enter Record ID (XXXXXX): ";
pub const CUSTOMER_ID_PROMPT: &str = "Enter Customer ID (AAAXXX): ";
pub const LOAN_TYPE_PROMPT: &str = "Enter loan type (Auto/Builder/Mortgage/Personal/Other): ";
pub const INTEREST_RATE_PROMPT: &str = "Enter Interest Rate: ";
pub const AMOUNT_LEFT_PROMPT: &str = "Enter Amount left to pay: ";
pub const TERM_LEFT_PROMPT: &str = "Enter loan term left (years): ";

pub const INVALID_NUMBER_FORMAT: &str = "Invalid input format. Please enter valid data.";

// ============================================================================
// COLLECTOR
// ============================================================================

pub struct Collector<I, W> {
    input: I,
    output: W,
}

impl<I: InputSource, W: Write> Collector<I, W> {
    pub fn new(input: I, output: W) -> Self {
        Collector { input, output }
    }

    /// Ask for the number of records. Anything but a non-negative integer
    /// is `CollectError::InvalidCount`.
    pub fn read_record_count(&mut self) -> Result<usize, CollectError> {
        let line = self.prompt("record_count", COUNT_PROMPT)?;

        line.trim().parse::<usize>().map_err(|_| {
            warn!(input = %line, "record count rejected");
            CollectError::InvalidCount { input: line }
        })
    }

    /// Fill a fresh collection with exactly `count` records, in input order.
    pub fn collect(&mut self, count: usize) -> Result<RecordCollection, CollectError> {
        let mut records = RecordCollection::with_capacity(count);

        for slot in 1..=count {
            writeln!(self.output)?;
            writeln!(self.output, "Enter details for Record {}", slot)?;

            let record = self.read_record()?;
            records.push(record)?;
            info!(slot, of = count, "record stored");
        }

        Ok(records)
    }

    /// Read one complete record.
    ///
    /// Each pass of the loop starts with no fields gathered; a numeric parse
    /// failure drops everything and begins again at Record ID.
    pub fn read_record(&mut self) -> Result<LoanRecord, CollectError> {
        loop {
            let record_id = self.ask_until_valid(
                "record_id",
                RECORD_ID_PROMPT,
                validation::validate_record_id,
            )?;
            let customer_id = self.ask_until_valid(
                "customer_id",
                CUSTOMER_ID_PROMPT,
                validation::validate_customer_id,
            )?;
            let loan_type = self.ask_until_valid(
                "loan_type",
                LOAN_TYPE_PROMPT,
                validation::validate_loan_type,
            )?;

            let Some(interest_rate) = self.ask_number::<f64>("interest_rate", INTEREST_RATE_PROMPT)? else {
                self.restart_record()?;
                continue;
            };
            let Some(amount_left) = self.ask_number::<f64>("amount_left", AMOUNT_LEFT_PROMPT)? else {
                self.restart_record()?;
                continue;
            };
            let Some(term_left) = self.ask_number::<i32>("term_left", TERM_LEFT_PROMPT)? else {
                self.restart_record()?;
                continue;
            };

            return Ok(LoanRecord::new(
                record_id,
                customer_id,
                loan_type,
                interest_rate,
                amount_left,
                term_left,
            ));
        }
    }

    /// Write a full line to the user.
    pub fn say(&mut self, message: impl Display) -> Result<(), CollectError> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    #[cfg(test)]
    fn into_parts(self) -> (I, W) {
        (self.input, self.output)
    }

    // ========================================================================
    // HELPERS
    // ========================================================================

    fn prompt(&mut self, field: &'static str, text: &str) -> Result<String, CollectError> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        debug!(field, "awaiting input");
        self.input
            .read_line()?
            .ok_or(CollectError::InputClosed { field })
    }

    fn ask_until_valid<T>(
        &mut self,
        field: &'static str,
        text: &str,
        validate: fn(&str) -> Result<T, ValidationError>,
    ) -> Result<T, CollectError> {
        loop {
            let line = self.prompt(field, text)?;
            match validate(&line) {
                Ok(value) => return Ok(value),
                Err(err) => {
                    warn!(field, input = %line, "field rejected");
                    self.say(err)?;
                }
            }
        }
    }

    /// `Ok(None)` means the text did not parse as a number.
    fn ask_number<T: FromStr>(
        &mut self,
        field: &'static str,
        text: &str,
    ) -> Result<Option<T>, CollectError> {
        let line = self.prompt(field, text)?;
        let parsed = line.trim().parse::<T>().ok();
        if parsed.is_none() {
            warn!(field, input = %line, "numeric field rejected, restarting record");
        }
        Ok(parsed)
    }

    fn restart_record(&mut self) -> Result<(), CollectError> {
        self.say(INVALID_NUMBER_FORMAT)
    }
}

// ============================================================================
// TESTS
// ============================================================================
