//! Missing-asset report type and formatting.

use std::collections::BTreeSet;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_s;

/// Accumulated missing references, kept sorted for deterministic output
#[derive(Debug, Default)]
pub struct MissingReport {
    missing: BTreeSet<String>,
}

impl MissingReport {
    /// Record a missing reference.
    pub fn add(&mut self, path: impl Into<String>) {
        self.missing.insert(path.into());
    }

    pub fn is_empty(&self) -> bool {
        self.missing.is_empty()
    }

    /// Number of distinct missing references.
    pub fn len(&self) -> usize {
        self.missing.len()
    }

    #[allow(unused)]
    pub fn contains(&self, path: &str) -> bool {
        self.missing.contains(path)
    }

    /// Missing references in lexicographic order.
    #[allow(unused)]
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.missing.iter().map(String::as_str)
    }

    /// Print the sorted missing list under a header (stdout, two-space indent).
    pub fn print(&self) {
        if self.missing.is_empty() {
            return;
        }
        println!("{}", "Missing root-relative assets:".red().bold());
        for path in &self.missing {
            println!("  {path}");
        }
    }
}

impl fmt::Display for MissingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let count = self.missing.len();
        if count == 0 {
            write!(f, "all references resolve")
        } else {
            write!(f, "{} missing asset{}", count, plural_s(count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report() {
        let report = MissingReport::default();
        assert!(report.is_empty());
        assert_eq!(report.len(), 0);
        assert_eq!(report.to_string(), "all references resolve");
    }

    #[test]
    fn test_entries_sorted() {
        let mut report = MissingReport::default();
        report.add("/z/last.css");
        report.add("/a/first.png");
        report.add("/m/middle.js");
        assert_eq!(
            report.entries().collect::<Vec<_>>(),
            vec!["/a/first.png", "/m/middle.js", "/z/last.css"]
        );
    }

    #[test]
    fn test_duplicates_counted_once() {
        let mut report = MissingReport::default();
        report.add("/shared/style.css");
        report.add("/shared/style.css");
        assert_eq!(report.len(), 1);
        assert!(report.contains("/shared/style.css"));
    }

    #[test]
    fn test_display_pluralizes() {
        let mut report = MissingReport::default();
        report.add("/one.png");
        assert_eq!(report.to_string(), "1 missing asset");
        report.add("/two.png");
        assert_eq!(report.to_string(), "2 missing assets");
    }
}
