//! Command-line interface definitions.

use clap::{ColorChoice, Parser};
use std::path::PathBuf;

/// Rootcheck asset reference validator CLI
///
/// Scans every `.html` file under the project root for `src="/..."` and
/// `href="/..."` references and verifies each referenced path exists on
/// disk. Intended to run in CI, where a missing asset should fail the
/// pipeline.
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root to scan (default: current directory).
    /// Leading-`/` references are resolved against this directory.
    #[arg(value_name = "ROOT", default_value = ".", value_hint = clap::ValueHint::DirPath)]
    pub root: PathBuf,

    /// Control colored output (auto, always, never)
    #[arg(long, default_value = "auto")]
    pub color: ColorChoice,

    /// Enable verbose output for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
