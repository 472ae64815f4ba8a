//! # fibstats-cli
//!
//! Output formatting and result presenters for the `fibstats` binary.

pub mod output;
pub mod presenter;
pub mod report;

pub use presenter::{presenter_for, JsonPresenter, OutputFormat, StatsPresenter, TextPresenter};
pub use report::StatsReport;
