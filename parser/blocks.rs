//! Block and tag types for parsed dialogue text
//!
//! A dialogue line splits into a sequence of blocks: literal text, inert
//! brace comments, vector drawing payloads, and override blocks carrying
//! tags. Block spans partition the source line exactly, so concatenating
//! them reproduces the original text byte for byte.

use alloc::vec::Vec;
use core::fmt;

/// Single override tag inside an override block
///
/// `name` excludes the leading backslash; the `[begin, end)` byte range
/// covers the backslash, the name, and the raw argument text as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag<'a> {
    /// Tag name without the backslash, e.g. `b` or `pos`
    pub name: &'a str,

    /// Byte offset of the tag's backslash in the source line
    pub begin: usize,

    /// Byte offset one past the tag's last argument byte
    pub end: usize,
}

impl<'a> Tag<'a> {
    /// Create a tag from its name and source range
    #[must_use]
    pub const fn new(name: &'a str, begin: usize, end: usize) -> Self {
        Self { name, begin, end }
    }

    /// Length in bytes of the tag's source range
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.begin
    }

    /// A tag always spans at least its backslash and one name byte
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl fmt::Display for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\\{}@{}..{}", self.name, self.begin, self.end)
    }
}

/// One block of a parsed dialogue line
///
/// Closed variant set; consumers match exhaustively. Each block's `span` is
/// its literal source text (braces included for comment and override
/// blocks) and `end` is the byte offset just past it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogueBlock<'a> {
    /// Literal text rendered as-is
    Plain {
        /// Literal source text of the block
        span: &'a str,
        /// Byte offset one past the block
        end: usize,
    },

    /// Brace-delimited text with no recognizable tag; inert commentary
    Comment {
        /// Literal source text including the braces
        span: &'a str,
        /// Byte offset one past the closing brace
        end: usize,
    },

    /// Vector path data governed by a preceding `\p` override
    Drawing {
        /// Literal drawing command text
        span: &'a str,
        /// Byte offset one past the block
        end: usize,
    },

    /// One or more override tags between braces
    Override {
        /// Literal source text including the braces
        span: &'a str,
        /// Byte offset one past the closing brace
        end: usize,
        /// Tags in source order
        tags: Vec<Tag<'a>>,
    },
}

impl<'a> DialogueBlock<'a> {
    /// Literal source text of this block
    #[must_use]
    pub fn span(&self) -> &'a str {
        match self {
            Self::Plain { span, .. }
            | Self::Comment { span, .. }
            | Self::Drawing { span, .. }
            | Self::Override { span, .. } => span,
        }
    }

    /// Byte offset one past this block in the source line
    #[must_use]
    pub fn end(&self) -> usize {
        match self {
            Self::Plain { end, .. }
            | Self::Comment { end, .. }
            | Self::Drawing { end, .. }
            | Self::Override { end, .. } => *end,
        }
    }

    /// Byte offset of this block's first byte
    #[must_use]
    pub fn start(&self) -> usize {
        self.end() - self.span().len()
    }

    /// Tags of an override block, or an empty slice for other kinds
    #[must_use]
    pub fn tags(&self) -> &[Tag<'a>] {
        match self {
            Self::Override { tags, .. } => tags,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn tag_length() {
        let tag = Tag::new("pos", 1, 13);
        assert_eq!(tag.len(), 12);
        assert!(!tag.is_empty());
    }

    #[test]
    fn block_accessors() {
        let block = DialogueBlock::Override {
            span: "{\\b1}",
            end: 9,
            tags: vec![Tag::new("b", 5, 8)],
        };
        assert_eq!(block.span(), "{\\b1}");
        assert_eq!(block.end(), 9);
        assert_eq!(block.start(), 4);
        assert_eq!(block.tags().len(), 1);

        let plain = DialogueBlock::Plain { span: "hi", end: 2 };
        assert!(plain.tags().is_empty());
    }
}
