//! Config field paths used in diagnostics.

/// A dotted path to a config field, e.g. `twitter.card`.
///
/// Sections expose their paths as `FIELDS` constants:
///
/// ```ignore
/// diag.warn(TwitterConfig::FIELDS.prefix, "empty prefix");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(&'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}
