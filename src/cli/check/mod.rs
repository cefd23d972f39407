//! Asset reference check command.

mod report;
mod scan;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::cli::Cli;
use crate::debug;
use crate::utils::fs::{collect_html_files, read_text_lenient};
use crate::utils::{plural_count, plural_s};

pub use report::MissingReport;
use scan::{RefKind, extract_refs};

/// Check failures that drive a non-zero exit status
#[derive(Debug, Error)]
pub enum CheckError {
    /// The root does not exist or is not a directory.
    #[error("root directory not found: {}", .0.display())]
    RootNotFound(PathBuf),

    /// One or more referenced paths do not exist under the root.
    #[error("found {count} missing root-relative asset{}", plural_s(*.count))]
    MissingAssets { count: usize },
}

/// Outcome of a full validation pass
#[derive(Debug, Default)]
pub struct CheckOutcome {
    /// Number of HTML files scanned.
    pub html_files: usize,
    /// Distinct references evaluated for existence.
    pub checked: FxHashSet<String>,
    /// References that failed the existence check.
    pub report: MissingReport,
}

/// Validate root-relative asset references under the configured root
pub fn run_check(cli: &Cli) -> Result<()> {
    let root = resolve_root(&cli.root)?;
    debug!("check"; "root resolved to {}", root.display());

    let outcome = check_tree(&root)?;

    if !outcome.report.is_empty() {
        outcome.report.print();
        return Err(CheckError::MissingAssets {
            count: outcome.report.len(),
        }
        .into());
    }

    println!(
        "OK: {} verified across {}.",
        plural_count(outcome.checked.len(), "root-relative asset"),
        plural_count(outcome.html_files, "HTML file"),
    );
    Ok(())
}

/// Resolve the root to an absolute path, failing early if it is absent.
fn resolve_root(root: &Path) -> Result<PathBuf> {
    if !root.is_dir() {
        return Err(CheckError::RootNotFound(root.to_path_buf()).into());
    }
    std::fs::canonicalize(root)
        .with_context(|| format!("failed to resolve root {}", root.display()))
}

/// Scan every HTML file under `root` and check each distinct
/// root-relative reference for filesystem existence.
///
/// Single linear pass: files are read and processed to completion one at
/// a time, and each distinct reference hits the filesystem exactly once.
pub fn check_tree(root: &Path) -> Result<CheckOutcome> {
    let files = collect_html_files(root);
    debug!("check"; "scanning {}", plural_count(files.len(), "HTML file"));

    let mut checked: FxHashSet<String> = FxHashSet::default();
    let mut report = MissingReport::default();

    for file in &files {
        let text = read_text_lenient(file)
            .with_context(|| format!("failed to read {}", file.display()))?;

        for reference in extract_refs(&text) {
            let RefKind::SiteRoot(path) = RefKind::parse(reference) else {
                continue;
            };
            // First sighting claims the path; repeats never re-check
            if !checked.insert(path.to_string()) {
                continue;
            }
            let target = root.join(path.trim_start_matches('/'));
            if target.exists() {
                debug!("check"; "ok {path}");
            } else {
                debug!("check"; "missing {path}");
                report.add(path);
            }
        }
    }

    Ok(CheckOutcome {
        html_files: files.len(),
        checked,
        report,
    })
}
