use anyhow::Result;
use std::io;

use loan_records::{run_session, Config, LineInput, SessionOutcome};

fn main() -> Result<()> {
    let config = Config::from_args();
    init_logging(&config)?;

    tracing::debug!(version = loan_records::VERSION, format = ?config.format, "starting loan record entry");

    let input = LineInput::new(io::stdin().lock());
    let mut stdout = io::stdout().lock();

    match run_session(input, &mut stdout, &config)? {
        SessionOutcome::Completed(records) => {
            tracing::info!(records = records.len(), "session complete");
        }
        SessionOutcome::InvalidCount => {
            // Reported to the user already; still a normal exit
            tracing::info!("session ended on invalid record count");
        }
    }

    Ok(())
}

/// Diagnostics go to stderr; stdout carries only prompts and the report.
fn init_logging(config: &Config) -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(config.env_filter()?)
        .with_writer(io::stderr)
        .init();
    Ok(())
}
