//! # ass-markup
//!
//! Override-tag markup engine for ASS (Advanced `SubStation` Alpha) dialogue
//! text. Operates on a single dialogue line's text payload (plain text
//! interleaved with `{...}` override blocks, drawing payloads, and brace
//! comments), providing the tokenizer, block parser, tag mutation, and
//! drawing-coordinate resampling an editor builds on.
//!
//! ## Features
//!
//! - **Zero-copy scanning**: tokens, tags, and blocks borrow `&str` spans
//!   from the input with byte offsets for editor integration
//! - **Total operations**: malformed markup degrades in-band (error tokens,
//!   comment blocks, dropped drawing tokens); nothing here panics or throws
//!   on bad input
//! - **Pure functions**: no state is kept across calls, so concurrent use
//!   needs no coordination
//! - **`no_std` support**: alloc-only builds for embedded and wasm targets
//!
//! ## Quick Start
//!
//! ```rust
//! use ass_markup::{parse, set_tag, tokenize, DialogueBlock};
//!
//! let line = "{\\b1}bold{\\b0} plain";
//!
//! // lexical view
//! let tokens = tokenize(line);
//! assert_eq!(tokens[1].span, "\\b");
//!
//! // structural view
//! let blocks = parse(line);
//! assert_eq!(blocks.len(), 4);
//! assert!(matches!(blocks[0], DialogueBlock::Override { .. }));
//!
//! // mutation: set the primary colour from a caret position
//! let edit = set_tag(line, 5, "c", "&H0000FF&");
//! assert_eq!(edit.text, "{\\b1\\c&H0000FF&}bold{\\b0} plain");
//! ```
//!
//! ## Invariants
//!
//! - Token offsets strictly increase and tile the input exactly
//! - Concatenating parsed block spans reproduces the input byte for byte
//! - Re-applying a tag assignment at the returned edit range is idempotent

#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(clippy::all)]
#![deny(unsafe_code)]

extern crate alloc;

pub mod editing;
pub mod highlight;
pub mod parser;
pub mod resample;
pub mod tokenizer;
pub mod utils;

pub use editing::{set_tag, set_tag_checked, tag_alias, TagEdit};
pub use highlight::{highlight, StyleSpan, SyntaxStyle};
pub use parser::{parse, strip_tags, DialogueBlock, Tag};
pub use resample::{resample_drawing, ResampleState};
pub use tokenizer::{tokenize, Token, TokenType};
pub use utils::errors::MarkupError;

/// Crate version for runtime compatibility checks
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
