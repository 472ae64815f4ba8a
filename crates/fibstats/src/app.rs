//! Application entry point and dispatch.

use std::io::{self, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use fibstats_cli::presenter_for;
use fibstats_core::stats;

use crate::config::AppConfig;

/// Run the application, writing the report to stdout.
pub fn run(config: &AppConfig) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_with_writer(config, &mut out)
}

/// Run the application against an arbitrary writer.
pub fn run_with_writer(config: &AppConfig, out: &mut dyn Write) -> Result<()> {
    let counts = config.counts()?;
    info!(counts = ?counts, format = ?config.format, "reporting sequence statistics");

    let presenter = presenter_for(config.format, config.show_sequence, config.quiet);
    for n in counts {
        let result = stats(n);
        debug!(n, length = result.length, "presenting statistics");
        presenter
            .present(out, n, &result)
            .with_context(|| format!("failed to write statistics for n={n}"))?;
    }

    out.flush().context("failed to flush output")?;
    Ok(())
}
