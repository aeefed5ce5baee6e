//! Token definitions for dialogue-line tokenization
//!
//! Provides zero-copy token types for lexical analysis of a dialogue line's
//! text payload. All tokens maintain references to the original source text
//! via lifetime parameters.
//!
//! # Token Design
//!
//! - Zero-copy via `&'a str` spans referencing source
//! - Byte offsets for editor integration; offsets are never rewritten after
//!   a token is produced
//! - Closed discriminant set for exhaustive matching in the block parser

use core::fmt;

/// Token produced by the dialogue tokenizer with zero-copy span
///
/// Represents one lexical unit of override-tag markup. The span references
/// the original source text; `start` is the byte offset of its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    /// Token type discriminant
    pub token_type: TokenType,

    /// Zero-copy span referencing source text
    pub span: &'a str,

    /// Byte offset of the span within the source
    pub start: usize,
}

impl<'a> Token<'a> {
    /// Create new token from its type, span, and starting byte offset
    #[must_use]
    pub const fn new(token_type: TokenType, span: &'a str, start: usize) -> Self {
        Self {
            token_type,
            span,
            start,
        }
    }

    /// Byte offset one past the last byte of the span
    #[must_use]
    pub const fn end(&self) -> usize {
        self.start + self.span.len()
    }

    /// Token length in bytes
    #[must_use]
    pub const fn len(&self) -> usize {
        self.span.len()
    }

    /// Check if token is empty (does not happen in normal tokenization)
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Check if this token is literal dialogue content rather than markup
    #[must_use]
    pub const fn is_literal(&self) -> bool {
        matches!(self.token_type, TokenType::Text | TokenType::LineBreak)
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}@{} '{}'", self.token_type, self.start, self.span)
    }
}

/// Token type discriminant for the override-tag grammar
///
/// A closed set: the tokenizer is total and represents malformed markup
/// in-band as `Error` tokens instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenType {
    /// Plain dialogue text, or inert characters inside an override block
    Text,

    /// Hard line break escape (`\N`, with any adjacent soft escapes)
    LineBreak,

    /// Override block opening `{`
    OverrideOpen,

    /// Override block closing `}`
    OverrideClose,

    /// Backslash plus tag name, e.g. `\b` or `\pos`
    TagName,

    /// Raw argument text following a tag name
    Argument,

    /// Comma separating parenthesized arguments, with surrounding blanks
    ArgSeparator,

    /// Opening parenthesis of an argument list, with trailing blanks
    ParenOpen,

    /// Closing parenthesis of an argument list, with leading blanks
    ParenClose,

    /// Malformed markup, e.g. a `{` inside an override block
    Error,
}

impl TokenType {
    /// Check if this type marks override structure rather than content
    #[must_use]
    pub const fn is_structural(self) -> bool {
        matches!(
            self,
            Self::OverrideOpen
                | Self::OverrideClose
                | Self::ParenOpen
                | Self::ParenClose
                | Self::ArgSeparator
        )
    }

    /// Get human-readable name for diagnostics
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::LineBreak => "line break",
            Self::OverrideOpen => "override open",
            Self::OverrideClose => "override close",
            Self::TagName => "tag name",
            Self::Argument => "argument",
            Self::ArgSeparator => "argument separator",
            Self::ParenOpen => "paren open",
            Self::ParenClose => "paren close",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
