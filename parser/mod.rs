//! Block-structural parser for dialogue text
//!
//! Groups the token stream into a sequence of [`DialogueBlock`]s: plain
//! text, brace comments, drawing payloads, and override blocks with their
//! tags. Total and side-effect free; malformed input degrades to the most
//! specific structure that still parses, in the worst case a single plain
//! block spanning the whole line.
//!
//! Invariant: block spans partition the input exactly, so concatenating
//! them reproduces the source line byte for byte.
//!
//! # Example
//!
//! ```rust
//! use ass_markup::parser::{parse, DialogueBlock};
//!
//! let blocks = parse("Yes, I {\\i1}am{\\i0} here.");
//! assert_eq!(blocks.len(), 5);
//! assert!(matches!(blocks[1], DialogueBlock::Override { .. }));
//! ```

use alloc::{string::String, vec::Vec};

use crate::tokenizer::{tokenize, Token, TokenType};

pub mod blocks;

pub use blocks::{DialogueBlock, Tag};

#[cfg(test)]
mod tests;

/// Parse one dialogue line's text payload into blocks
///
/// Empty input yields a single empty plain block so callers always have a
/// block to anchor an edit to.
#[must_use]
pub fn parse(text: &str) -> Vec<DialogueBlock<'_>> {
    let mut blocks = Vec::new();
    if text.is_empty() {
        blocks.push(DialogueBlock::Plain { span: text, end: 0 });
        return blocks;
    }

    let tokens = tokenize(text);

    // A `{` after the last `}` can never close; renderers treat such a tail
    // as literal text, so every token from there on is literal here too.
    let structure_end = tokens
        .iter()
        .rposition(|token| token.token_type == TokenType::OverrideClose)
        .map_or(0, |index| index + 1);

    let mut in_drawing = false;
    let mut run_start: Option<usize> = None;
    let mut i = 0;
    while i < tokens.len() {
        let token = &tokens[i];
        if token.token_type == TokenType::OverrideOpen && i < structure_end {
            if let Some(start) = run_start.take() {
                blocks.push(literal_block(text, start, token.start, in_drawing));
            }

            // the matching close exists because i precedes the last close
            let close = tokens[i + 1..]
                .iter()
                .position(|t| t.token_type == TokenType::OverrideClose)
                .map_or(tokens.len() - 1, |offset| i + 1 + offset);
            let end = tokens[close].end();
            let span = &text[token.start..end];

            let tags = collect_tags(&tokens[i + 1..close]);
            if tags.is_empty() {
                blocks.push(DialogueBlock::Comment { span, end });
            } else {
                for tag in &tags {
                    if tag.name == "p" {
                        in_drawing = drawing_enabled(tag_arguments(text, tag));
                    }
                }
                blocks.push(DialogueBlock::Override { span, end, tags });
            }
            i = close + 1;
        } else {
            if run_start.is_none() {
                run_start = Some(token.start);
            }
            i += 1;
        }
    }

    if let Some(start) = run_start {
        blocks.push(literal_block(text, start, text.len(), in_drawing));
    }
    blocks
}

/// Remove all markup from a dialogue line, keeping only renderable text
///
/// Override blocks, brace comments, and drawing payloads are dropped; line
/// break escapes survive as written.
#[must_use]
pub fn strip_tags(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for block in parse(text) {
        if let DialogueBlock::Plain { span, .. } = block {
            out.push_str(span);
        }
    }
    out
}

/// Build a plain or drawing block for a literal run
fn literal_block(text: &str, start: usize, end: usize, in_drawing: bool) -> DialogueBlock<'_> {
    let span = &text[start..end];
    if in_drawing {
        DialogueBlock::Drawing { span, end }
    } else {
        DialogueBlock::Plain { span, end }
    }
}

/// Group the tokens between a block's braces into tags
///
/// A well-formed tag name at parenthesis depth zero starts a new tag; every
/// other token extends the current tag's range, which keeps nested tags
/// (such as a `\clip` inside `\t(...)`) inside their parent's arguments. A
/// bare backslash with no name never forms a tag, so a region holding only
/// such debris parses as a comment.
fn collect_tags<'a>(region: &[Token<'a>]) -> Vec<Tag<'a>> {
    let mut tags: Vec<Tag<'a>> = Vec::new();
    let mut depth = 0i32;
    for token in region {
        if depth == 0 && token.token_type == TokenType::TagName && token.span.len() > 1 {
            tags.push(Tag::new(&token.span[1..], token.start, token.end()));
            continue;
        }
        match token.token_type {
            TokenType::ParenOpen => depth += count_byte(token.span, b'('),
            TokenType::ParenClose => depth -= count_byte(token.span, b')'),
            _ => {}
        }
        if let Some(last) = tags.last_mut() {
            last.end = token.end();
        }
    }
    tags
}

/// Raw argument text of a tag as it appeared in the source line
fn tag_arguments<'a>(text: &'a str, tag: &Tag<'a>) -> &'a str {
    &text[tag.begin + 1 + tag.name.len()..tag.end]
}

/// Number of occurrences of `byte` in `span`
#[allow(clippy::cast_possible_wrap)]
fn count_byte(span: &str, byte: u8) -> i32 {
    span.bytes().filter(|&b| b == byte).count() as i32
}

/// Decide whether a `\p` argument switches drawing mode on
///
/// Leading zeros are accepted; any nonzero digit before a non-digit enables
/// drawing, anything else disables it.
fn drawing_enabled(arguments: &str) -> bool {
    let mut enabled = false;
    for byte in arguments.bytes() {
        match byte {
            b'1'..=b'9' => enabled = true,
            b'0' => {}
            _ => break,
        }
    }
    enabled
}
