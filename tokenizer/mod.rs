//! Dialogue-line tokenizer
//!
//! Scans one dialogue line's text payload into a flat, ordered sequence of
//! typed tokens with byte offsets. The scan is a single forward pass with no
//! backtracking; it is total and never fails, since malformed markup produces
//! [`TokenType::Error`] tokens instead of raising.
//!
//! # Grammar
//!
//! - Outside braces, non-`{` bytes accumulate into [`TokenType::Text`] runs.
//!   A run of two-byte escapes containing `\N` becomes one
//!   [`TokenType::LineBreak`]; `\n`/`\h` runs with no `\N` stay literal text.
//!   A stray `}` is not structural.
//! - `{` opens an override block. Inside it, a backslash starts a tag name
//!   (`[a-z0-9][a-z]*`; `\r` and `\fn` take free-form arguments and end their
//!   names early), parentheses group argument lists, and a comma inside
//!   parentheses separates arguments. Blanks bind to the separator or closing
//!   parenthesis that follows them. A second `{` inside a block is an error
//!   token; `}` always closes the block.
//!
//! Offsets are byte positions into the original input. Structural characters
//! are ASCII, so spans always fall on character boundaries; multi-byte
//! characters travel inside text and argument runs.
//!
//! # Example
//!
//! ```rust
//! use ass_markup::tokenizer::{tokenize, TokenType};
//!
//! let tokens = tokenize("{\\b1}bold");
//! assert_eq!(tokens[0].token_type, TokenType::OverrideOpen);
//! assert_eq!(tokens[1].span, "\\b");
//! assert_eq!(tokens[4].span, "bold");
//! ```

use alloc::vec::Vec;

pub mod state;
pub mod tokens;

pub use state::ScanContext;
pub use tokens::{Token, TokenType};


/// Tokenize one dialogue line's text payload
///
/// Total over arbitrary input. Token starts strictly increase and the tokens
/// tile the input exactly: the first starts at 0 and the last ends at
/// `text.len()` whenever `text` is non-empty.
#[must_use]
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    Scanner::new(text).run()
}

/// Blank characters that bind to argument separators and closing parens
const fn is_blank(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t')
}

/// Single-pass scanner over the dialogue grammar
struct Scanner<'a> {
    /// Source text being tokenized
    source: &'a str,
    /// Byte position of the next unconsumed character
    pos: usize,
    /// Current grammar context
    context: ScanContext,
    /// Parenthesis nesting inside the current argument list
    paren_depth: i32,
    /// Tokens produced so far
    tokens: Vec<Token<'a>>,
}

impl<'a> Scanner<'a> {
    fn new(source: &'a str) -> Self {
        Self {
            source,
            pos: 0,
            context: ScanContext::Plain,
            paren_depth: 0,
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Vec<Token<'a>> {
        while self.pos < self.source.len() {
            match self.context {
                ScanContext::Plain => self.scan_plain(),
                ScanContext::Override => self.scan_override(),
                ScanContext::TagName => self.scan_tag_name(),
                ScanContext::Argument => self.scan_argument(),
            }
        }
        self.tokens
    }

    /// Append a token piece, coalescing it with an adjacent piece of the
    /// same type. A piece starting at a backslash always begins a new
    /// `TagName` so consecutive tags stay distinct.
    fn emit(&mut self, token_type: TokenType, start: usize, end: usize) {
        debug_assert!(start < end);
        if let Some(last) = self.tokens.last_mut() {
            let fresh_tag =
                token_type == TokenType::TagName && self.source.as_bytes()[start] == b'\\';
            if last.token_type == token_type && last.end() == start && !fresh_tag {
                last.span = &self.source[last.start..end];
                return;
            }
        }
        self.tokens
            .push(Token::new(token_type, &self.source[start..end], start));
    }

    /// Width in bytes of the character at `pos`
    fn char_width(&self, pos: usize) -> usize {
        self.source[pos..].chars().next().map_or(1, char::len_utf8)
    }

    fn scan_plain(&mut self) {
        let i = self.pos;
        let bytes = self.source.as_bytes();
        match bytes[i] {
            b'{' => {
                self.emit(TokenType::OverrideOpen, i, i + 1);
                self.context = ScanContext::Override;
                self.paren_depth = 0;
                self.pos = i + 1;
            }
            b'\\' if matches!(bytes.get(i + 1), Some(b'N' | b'n' | b'h')) => {
                self.scan_escape_run();
            }
            // stray `}` included: an unmatched close brace is ordinary text
            _ => {
                let width = self.char_width(i);
                self.emit(TokenType::Text, i, i + width);
                self.pos = i + width;
            }
        }
    }

    /// Consume a maximal run of `\N`/`\n`/`\h` escapes. The run is a hard
    /// break only if it contains `\N`; soft escapes on their own stay part
    /// of the surrounding text.
    fn scan_escape_run(&mut self) {
        let bytes = self.source.as_bytes();
        let start = self.pos;
        let mut i = start;
        let mut breaks = false;
        while bytes.get(i) == Some(&b'\\') {
            match bytes.get(i + 1) {
                Some(b'N') => breaks = true,
                Some(b'n' | b'h') => {}
                _ => break,
            }
            i += 2;
        }
        let token_type = if breaks {
            TokenType::LineBreak
        } else {
            TokenType::Text
        };
        self.emit(token_type, start, i);
        self.pos = i;
    }

    fn scan_override(&mut self) {
        let i = self.pos;
        match self.source.as_bytes()[i] {
            b'{' => {
                self.emit(TokenType::Error, i, i + 1);
                self.pos = i + 1;
            }
            b'}' => {
                self.emit(TokenType::OverrideClose, i, i + 1);
                self.context = ScanContext::Plain;
                self.pos = i + 1;
            }
            b'\\' => self.scan_tag_start(),
            // anything before the first backslash is inert comment filler
            _ => {
                let width = self.char_width(i);
                self.emit(TokenType::Text, i, i + width);
                self.pos = i + width;
            }
        }
    }

    /// Handle a backslash inside an override block. `\r` and `\fn` take
    /// free-form arguments (style and font names), so their names end here
    /// rather than at the next non-letter.
    fn scan_tag_start(&mut self) {
        let i = self.pos;
        let bytes = self.source.as_bytes();
        if bytes.get(i + 1) == Some(&b'r') {
            self.emit(TokenType::TagName, i, i + 2);
            self.context = ScanContext::Argument;
            self.pos = i + 2;
        } else if bytes.get(i + 1) == Some(&b'f') && bytes.get(i + 2) == Some(&b'n') {
            self.emit(TokenType::TagName, i, i + 3);
            self.context = ScanContext::Argument;
            self.pos = i + 3;
        } else {
            self.emit(TokenType::TagName, i, i + 1);
            self.context = ScanContext::TagName;
            self.pos = i + 1;
        }
    }

    /// Consume a tag name: one letter or digit, then letters. The name run
    /// extends the backslash's token.
    fn scan_tag_name(&mut self) {
        let i = self.pos;
        let bytes = self.source.as_bytes();
        match bytes[i] {
            b'a'..=b'z' | b'0'..=b'9' => {
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_lowercase() {
                    j += 1;
                }
                self.emit(TokenType::TagName, i, j);
                self.context = ScanContext::Argument;
                self.pos = j;
            }
            _ => {
                let width = self.char_width(i);
                self.emit(TokenType::Error, i, i + width);
                self.context = ScanContext::Override;
                self.pos = i + width;
            }
        }
    }

    fn scan_argument(&mut self) {
        let i = self.pos;
        let bytes = self.source.as_bytes();
        match bytes[i] {
            b'{' => {
                self.emit(TokenType::Error, i, i + 1);
                self.pos = i + 1;
            }
            // `}` ends the block even with parentheses still open
            b'}' => {
                self.emit(TokenType::OverrideClose, i, i + 1);
                self.context = ScanContext::Plain;
                self.pos = i + 1;
            }
            b'\\' => self.scan_tag_start(),
            b'(' => {
                let mut j = i + 1;
                while j < bytes.len() && is_blank(bytes[j]) {
                    j += 1;
                }
                self.emit(TokenType::ParenOpen, i, j);
                self.paren_depth += 1;
                self.pos = j;
            }
            b')' => self.close_paren(i, i + 1),
            b',' if self.paren_depth > 0 => {
                let mut j = i + 1;
                while j < bytes.len() && is_blank(bytes[j]) {
                    j += 1;
                }
                self.emit(TokenType::ArgSeparator, i, j);
                self.pos = j;
            }
            b' ' | b'\t' => self.scan_argument_blanks(),
            _ => {
                let width = self.char_width(i);
                self.emit(TokenType::Argument, i, i + width);
                self.pos = i + width;
            }
        }
    }

    /// A blank run binds to a following separator or closing paren; blanks
    /// with no structural character after them are argument content.
    fn scan_argument_blanks(&mut self) {
        let start = self.pos;
        let bytes = self.source.as_bytes();
        let mut j = start;
        while j < bytes.len() && is_blank(bytes[j]) {
            j += 1;
        }
        match bytes.get(j) {
            Some(b')') => self.close_paren(start, j + 1),
            Some(b',') if self.paren_depth > 0 => {
                let mut k = j + 1;
                while k < bytes.len() && is_blank(bytes[k]) {
                    k += 1;
                }
                self.emit(TokenType::ArgSeparator, start, k);
                self.pos = k;
            }
            _ => {
                self.emit(TokenType::Argument, start, start + 1);
                self.pos = start + 1;
            }
        }
    }

    fn close_paren(&mut self, start: usize, end: usize) {
        self.emit(TokenType::ParenClose, start, end);
        self.paren_depth -= 1;
        if self.paren_depth == 0 {
            self.context = ScanContext::Override;
        }
    }
}
