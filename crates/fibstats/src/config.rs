//! Application configuration from CLI flags and environment.

use clap::Parser;

use fibstats_cli::OutputFormat;
use fibstats_core::{parse_count, StatsError, DEMO_COUNTS};

/// fibstats — descriptive statistics over Fibonacci sequences.
#[derive(Parser, Debug)]
#[command(name = "fibstats", version, about)]
pub struct AppConfig {
    /// Sequence length to report on; repeat or comma-separate for several.
    /// Defaults to 0, 1, 5 and 10.
    #[arg(
        short = 'n',
        long = "count",
        value_name = "N",
        env = "FIBSTATS_COUNTS",
        value_delimiter = ',',
        allow_negative_numbers = true
    )]
    pub counts: Vec<String>,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Also print the sequence and its extremes (text format).
    #[arg(short, long)]
    pub show_sequence: bool,

    /// Quiet mode (only output the average).
    #[arg(short, long)]
    pub quiet: bool,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Requested counts, falling back to the demonstration set.
    pub fn counts(&self) -> Result<Vec<i64>, StatsError> {
        if self.counts.is_empty() {
            return Ok(DEMO_COUNTS.to_vec());
        }
        self.counts.iter().map(|s| parse_count(s)).collect()
    }
}
