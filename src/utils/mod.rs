//! Shared helpers for the validator.

pub mod fs;

/// Return "s" suffix for plural counts
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}

/// Format a count with its noun, pluralized
///
/// `plural_count(1, "file")` -> `"1 file"`, `plural_count(2, "file")` ->
/// `"2 files"`.
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    format!("{} {}{}", count, noun, plural_s(count))
}
