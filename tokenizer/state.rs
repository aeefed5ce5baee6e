//! Scanner state for the dialogue tokenizer
//!
//! The override-tag grammar is context sensitive: the same byte is literal
//! text outside braces, comment filler inside them, and an argument after a
//! tag name. The scanner tracks which rules apply via a small state enum.

/// Tokenization context for state-aware scanning
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanContext {
    /// Outside any override block; everything is literal text
    #[default]
    Plain,

    /// Between `{` and `}`, before or between tags
    Override,

    /// Immediately after a tag's backslash, consuming the name
    TagName,

    /// After a complete tag name, consuming its arguments
    Argument,
}

impl ScanContext {
    /// Check if the scanner is inside an override block
    #[must_use]
    pub const fn inside_override(self) -> bool {
        !matches!(self, Self::Plain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_plain() {
        assert_eq!(ScanContext::default(), ScanContext::Plain);
        assert!(!ScanContext::Plain.inside_override());
        assert!(ScanContext::Argument.inside_override());
    }
}
