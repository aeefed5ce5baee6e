//! Syntax styling spans for dialogue text
//!
//! Maps the token stream to contiguous style spans for an editor text box.
//! Styling follows block structure: filler inside braces is commentary,
//! text governed by a `\p` override is drawing data, and everything after
//! an unmatched `{` is literal. Adjacent spans of the same style merge, so
//! the output is the minimal run-length encoding of the line's styling.
//!
//! # Example
//!
//! ```rust
//! use ass_markup::highlight::{highlight, SyntaxStyle};
//!
//! let spans = highlight("{\\b1}bold");
//! assert_eq!(spans[1].style, SyntaxStyle::Tag);
//! assert_eq!(spans.last().unwrap().style, SyntaxStyle::Normal);
//! ```

use alloc::vec::Vec;

use crate::parser::{parse, DialogueBlock};
use crate::tokenizer::{tokenize, TokenType};

/// Visual style class for one span of a dialogue line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SyntaxStyle {
    /// Ordinary dialogue text
    Normal,
    /// Hard line break escape
    LineBreak,
    /// Override block braces
    Override,
    /// Tag name including its backslash
    Tag,
    /// Tag argument text
    Parameter,
    /// Parentheses and argument separators
    Punctuation,
    /// Inert filler inside braces
    Comment,
    /// Drawing command payload
    Drawing,
    /// Malformed markup
    Error,
}

/// One styled span of the source line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StyleSpan {
    /// Style class for this span
    pub style: SyntaxStyle,
    /// Byte offset of the span's first byte
    pub start: usize,
    /// Byte offset one past the span
    pub end: usize,
}

/// Compute styling spans for one dialogue line
///
/// Spans tile the input contiguously and adjacent spans never share a
/// style.
#[must_use]
pub fn highlight(text: &str) -> Vec<StyleSpan> {
    let tokens = tokenize(text);
    let blocks = parse(text);

    // ranges reclassified by the parser: drawing payloads, and the literal
    // tail that follows an unmatched `{`
    let drawing: Vec<(usize, usize)> = blocks
        .iter()
        .filter_map(|block| match block {
            DialogueBlock::Drawing { .. } => Some((block.start(), block.end())),
            _ => None,
        })
        .collect();
    let structure_end = tokens
        .iter()
        .rposition(|token| token.token_type == TokenType::OverrideClose)
        .map_or(0, |index| index + 1);

    let mut spans: Vec<StyleSpan> = Vec::new();
    let mut inside = false;
    let mut literal_tail = false;
    for (index, token) in tokens.iter().enumerate() {
        if token.token_type == TokenType::OverrideOpen && index >= structure_end {
            literal_tail = true;
        }
        let style = if literal_tail {
            literal_style(&drawing, token.start)
        } else {
            match token.token_type {
                TokenType::Text => {
                    if inside {
                        SyntaxStyle::Comment
                    } else {
                        literal_style(&drawing, token.start)
                    }
                }
                TokenType::LineBreak => SyntaxStyle::LineBreak,
                TokenType::OverrideOpen => {
                    inside = true;
                    SyntaxStyle::Override
                }
                TokenType::OverrideClose => {
                    inside = false;
                    SyntaxStyle::Override
                }
                TokenType::TagName => SyntaxStyle::Tag,
                TokenType::Argument => SyntaxStyle::Parameter,
                TokenType::ArgSeparator | TokenType::ParenOpen | TokenType::ParenClose => {
                    SyntaxStyle::Punctuation
                }
                TokenType::Error => SyntaxStyle::Error,
            }
        };
        push_span(&mut spans, style, token.start, token.end());
    }
    spans
}

/// Style for literal text: drawing payloads keep their own class
fn literal_style(drawing: &[(usize, usize)], offset: usize) -> SyntaxStyle {
    if drawing.iter().any(|&(start, end)| (start..end).contains(&offset)) {
        SyntaxStyle::Drawing
    } else {
        SyntaxStyle::Normal
    }
}

/// Append a span, merging it into the previous one when styles match
fn push_span(spans: &mut Vec<StyleSpan>, style: SyntaxStyle, start: usize, end: usize) {
    if let Some(last) = spans.last_mut() {
        if last.style == style && last.end == start {
            last.end = end;
            return;
        }
    }
    spans.push(StyleSpan { style, start, end });
}
