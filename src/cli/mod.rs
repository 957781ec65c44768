//! CLI argument parsing for the case-study presentation.

mod args;

pub use args::CliArgs;
