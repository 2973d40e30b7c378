// 🔁 Session - count → collect → report
//
// One pass over the input source. The only early exit is a rejected record
// count: the message is printed and nothing else happens.

use std::io::Write;

use anyhow::{Context, Result};
use tracing::info;

use crate::collector::Collector;
use crate::config::Config;
use crate::error::CollectError;
use crate::input::InputSource;
use crate::report;
use crate::store::RecordCollection;

#[derive(Debug)]
pub enum SessionOutcome {
    /// All records were entered and the report was written
    Completed(RecordCollection),
    /// The record count was not a number; no records, no report
    InvalidCount,
}

pub fn run_session<I: InputSource, W: Write>(
    input: I,
    output: &mut W,
    config: &Config,
) -> Result<SessionOutcome> {
    let mut collector = Collector::new(input, &mut *output);

    let count = match collector.read_record_count() {
        Ok(count) => count,
        Err(err @ CollectError::InvalidCount { .. }) => {
            collector.say(&err)?;
            return Ok(SessionOutcome::InvalidCount);
        }
        Err(err) => return Err(err).context("Failed to read record count"),
    };

    info!(count, "collecting loan records");
    let records = collector
        .collect(count)
        .context("Failed to collect loan records")?;

    report::render(&records, config.format, output).context("Failed to write report")?;
    info!(records = records.len(), format = ?config.format, "report written");

    Ok(SessionOutcome::Completed(records))
}
