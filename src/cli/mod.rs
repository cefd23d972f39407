//! CLI commands and argument parsing.

mod args;
pub mod check;

pub use args::Cli;
