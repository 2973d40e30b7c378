// ⚙️ Configuration - command-line flags with environment fallbacks

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::report::ReportFormat;

/// Command-line flags. Each one can also come from the environment.
#[derive(Debug, Parser)]
#[command(name = "loan-records")]
#[command(about = "Enter bank loan records at the console and print them as a table.")]
#[command(version)]
pub struct Cli {
    /// Report format printed after all records are entered
    #[arg(long, value_enum, env = "LOAN_RECORDS_FORMAT", default_value_t = ReportFormat::Table)]
    pub format: ReportFormat,

    /// Log filter directive for stderr diagnostics (e.g. "debug", "loan_records=info")
    #[arg(long, env = "LOAN_RECORDS_LOG", default_value = "error")]
    pub log_level: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: ReportFormat,
    pub log_filter: String,
}

impl Config {
    pub fn from_args() -> Self {
        Cli::parse().into()
    }

    /// Parse `log_filter` into a tracing filter; a bad directive is an error.
    pub fn env_filter(&self) -> Result<EnvFilter> {
        EnvFilter::try_new(&self.log_filter)
            .with_context(|| format!("Invalid --log-level directive '{}'", self.log_filter))
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: ReportFormat::Table,
            log_filter: "error".to_string(),
        }
    }
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        Config {
            format: cli.format,
            log_filter: cli.log_level,
        }
    }
}
