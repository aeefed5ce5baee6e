//! Tag mutation for dialogue text
//!
//! Implements the "make this tag true from here" edit: given a caret
//! position, a tag name, and a value, compute the new line text that either
//! rewrites the nearest applicable occurrence of the tag or inserts a fresh
//! override block at the caret.
//!
//! The resolution rules mirror how renderers cascade overrides:
//!
//! - a drawing block is governed by the override block before it, so the
//!   edit steps back to that block
//! - a brace comment is inert, so the edit steps back past it (or lands at
//!   the start of the line when nothing precedes it)
//! - inside an override block, the rightmost occurrence of the tag (or of
//!   an aliased spelling of it) is the one that wins at render time, so
//!   that occurrence is the one replaced; earlier duplicates are left
//!   untouched
//!
//! # Example
//!
//! ```rust
//! use ass_markup::editing::set_tag;
//!
//! let edit = set_tag("{\\b1}bold", 5, "c", "&H0000FF&");
//! assert_eq!(edit.text, "{\\b1\\c&H0000FF&}bold");
//! assert_eq!(edit.range, 4..15);
//! ```

use alloc::{format, string::String};
use core::ops::Range;

use crate::parser::{parse, DialogueBlock, Tag};
use crate::utils::errors::MarkupError;
use crate::utils::floor_char_boundary;

/// Result of a tag edit: the new line text and the byte range of the
/// inserted or replaced markup, so a caller can reposition a cursor or
/// highlight the edit without re-parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TagEdit {
    /// The mutated line text
    pub text: String,

    /// Byte range of the new markup within `text`
    pub range: Range<usize>,
}

/// Pairs of tag names that address the same visual property
///
/// Legacy scripts mix both spellings, so replacement must treat each pair
/// as one tag.
const TAG_ALIASES: &[(&str, &str)] = &[
    ("c", "1c"),
    ("fr", "frz"),
    ("pos", "move"),
    ("clip", "iclip"),
];

/// Alternate spelling of a tag name, if one exists
///
/// # Example
///
/// ```rust
/// use ass_markup::editing::tag_alias;
///
/// assert_eq!(tag_alias("c"), Some("1c"));
/// assert_eq!(tag_alias("move"), Some("pos"));
/// assert_eq!(tag_alias("b"), None);
/// ```
#[must_use]
pub fn tag_alias(name: &str) -> Option<&'static str> {
    TAG_ALIASES.iter().find_map(|&(first, second)| {
        if name == first {
            Some(second)
        } else if name == second {
            Some(first)
        } else {
            None
        }
    })
}

/// Apply a tag assignment at `position` and return the mutated line
///
/// Total over arbitrary input: `position` is clamped to the text length and
/// snapped down to a character boundary, and every input yields a valid
/// output string. Re-applying the same assignment at the returned
/// `range.end` reproduces the same text.
#[must_use]
pub fn set_tag(text: &str, position: usize, tag_name: &str, value: &str) -> TagEdit {
    let mut position = floor_char_boundary(text, position.min(text.len()));
    let blocks = parse(text);
    let mut index = blocks
        .iter()
        .position(|block| block.end() >= position)
        .unwrap_or(blocks.len() - 1);

    loop {
        match &blocks[index] {
            // the governing override lives before the drawing payload
            DialogueBlock::Drawing { .. } if index > 0 => index -= 1,
            DialogueBlock::Comment { span, end } if index > 0 => {
                position = *end - span.len();
                index -= 1;
            }
            DialogueBlock::Override { end, tags, .. } => {
                return update_override(text, *end, tags, tag_name, value);
            }
            DialogueBlock::Plain { .. } => {
                return insert_override(text, position, tag_name, value);
            }
            // a comment or drawing with nothing before it
            _ => return insert_override(text, 0, tag_name, value),
        }
    }
}

/// Boundary-checked variant of [`set_tag`]
///
/// # Errors
///
/// Returns [`MarkupError::PositionOutOfBounds`] when `position` is past the
/// end of `text` and [`MarkupError::PositionNotCharBoundary`] when it falls
/// inside a multi-byte character.
pub fn set_tag_checked(
    text: &str,
    position: usize,
    tag_name: &str,
    value: &str,
) -> Result<TagEdit, MarkupError> {
    if position > text.len() {
        return Err(MarkupError::PositionOutOfBounds {
            position,
            length: text.len(),
        });
    }
    if !text.is_char_boundary(position) {
        return Err(MarkupError::PositionNotCharBoundary { position });
    }
    Ok(set_tag(text, position, tag_name, value))
}

/// Rewrite or extend an existing override block
fn update_override(
    text: &str,
    block_end: usize,
    tags: &[Tag<'_>],
    tag_name: &str,
    value: &str,
) -> TagEdit {
    let replacement = format!("\\{tag_name}{value}");
    let alias = tag_alias(tag_name);
    // scan from the back: the rightmost occurrence is the effective one
    let found = tags
        .iter()
        .rev()
        .find(|tag| tag.name == tag_name || Some(tag.name) == alias);
    let (start, end) = found.map_or(
        // no occurrence: append as the new last tag, before the brace
        (block_end - 1, block_end - 1),
        |tag| (tag.begin, tag.end),
    );
    splice(text, start, end, &replacement)
}

/// Wrap the assignment in a fresh override block at `position`
fn insert_override(text: &str, position: usize, tag_name: &str, value: &str) -> TagEdit {
    let insert = format!("{{\\{tag_name}{value}}}");
    splice(text, position, position, &insert)
}

/// Replace `text[start..end]` with `replacement`
fn splice(text: &str, start: usize, end: usize, replacement: &str) -> TagEdit {
    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    TagEdit {
        text: out,
        range: start..start + replacement.len(),
    }
}
