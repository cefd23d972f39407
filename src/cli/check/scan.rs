//! Attribute reference extraction.

use std::sync::LazyLock;

use regex::Regex;

/// Match `src="/path"` or `href='/path'`, capturing up to (not including)
/// the closing quote, a `?` query, or a `#` fragment. Captures therefore
/// arrive query- and fragment-free.
static ATTR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?:src|href)=["'](/[^"'#?]+)"#).expect("attribute pattern is valid")
});

/// Extract candidate root-relative references from HTML text.
///
/// Every yielded value starts with `/`. Protocol-relative values (`//...`)
/// still come through here; classification is the caller's job via
/// [`RefKind::parse`].
pub fn extract_refs(html: &str) -> impl Iterator<Item = &str> {
    ATTR_RE
        .captures_iter(html)
        .filter_map(|caps| caps.get(1).map(|m| m.as_str()))
}

/// Syntactic classification of a captured reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefKind<'a> {
    /// Root-relative filesystem candidate (/static/logo.png).
    SiteRoot(&'a str),
    /// Protocol-relative URL (//cdn.example.com/lib.js), never a local path.
    ProtocolRelative(&'a str),
    /// A bare `/`, nothing to check.
    BareRoot,
}

impl<'a> RefKind<'a> {
    /// Classify a reference that begins with `/`.
    #[inline]
    pub fn parse(reference: &'a str) -> Self {
        if reference == "/" {
            Self::BareRoot
        } else if reference.starts_with("//") {
            Self::ProtocolRelative(reference)
        } else {
            Self::SiteRoot(reference)
        }
    }
}
