//! Result presenters.

use std::io::{self, Write};

use clap::ValueEnum;
use tracing::trace;

use fibstats_core::SequenceStats;

use crate::output::{format_average, format_optional, format_sequence, format_stats_line};
use crate::report::StatsReport;

/// Output format selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One human-readable line per count.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Trait for presenting statistics to the user.
pub trait StatsPresenter {
    /// Write the statistics computed for count `n`.
    fn present(&self, out: &mut dyn Write, n: i64, stats: &SequenceStats) -> io::Result<()>;
}

/// Plain-text presenter.
pub struct TextPresenter {
    show_sequence: bool,
    quiet: bool,
}

impl TextPresenter {
    #[must_use]
    pub fn new(show_sequence: bool, quiet: bool) -> Self {
        Self {
            show_sequence,
            quiet,
        }
    }
}

impl StatsPresenter for TextPresenter {
    fn present(&self, out: &mut dyn Write, n: i64, stats: &SequenceStats) -> io::Result<()> {
        if self.quiet {
            return writeln!(out, "{}", format_average(stats.average.as_ref()));
        }

        writeln!(out, "{}", format_stats_line(n, stats))?;
        if self.show_sequence {
            writeln!(out, "  sequence={}", format_sequence(&stats.sequence))?;
            writeln!(
                out,
                "  maximum={}, minimum={}",
                format_optional(stats.maximum.as_ref()),
                format_optional(stats.minimum.as_ref())
            )?;
        }
        Ok(())
    }
}

/// JSON Lines presenter.
pub struct JsonPresenter;

impl StatsPresenter for JsonPresenter {
    fn present(&self, out: &mut dyn Write, n: i64, stats: &SequenceStats) -> io::Result<()> {
        let report = StatsReport::new(n, stats);
        serde_json::to_writer(&mut *out, &report)?;
        writeln!(out)
    }
}

/// Build the presenter for the requested format.
#[must_use]
pub fn presenter_for(
    format: OutputFormat,
    show_sequence: bool,
    quiet: bool,
) -> Box<dyn StatsPresenter> {
    trace!(?format, show_sequence, quiet, "selecting presenter");
    match format {
        OutputFormat::Text => Box::new(TextPresenter::new(show_sequence, quiet)),
        OutputFormat::Json => Box::new(JsonPresenter),
    }
}
