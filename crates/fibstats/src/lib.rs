//! fibstats library — application logic for the `fibstats` binary.

pub mod app;
pub mod config;
pub mod errors;
