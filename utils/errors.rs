//! Error types for ass-markup operations
//!
//! The markup engine itself is total: malformed input degrades in-band
//! (`Error` tokens, comment blocks, dropped drawing tokens) and never
//! surfaces an error to the caller. `MarkupError` exists for the one place
//! where a failure is worth reporting: a caller-side contract violation at
//! the API boundary, such as a byte position that does not lie inside the
//! text being edited.
//!
//! # Error Philosophy
//!
//! - Use `thiserror` for structured error handling (no `anyhow` bloat)
//! - Keep the taxonomy minimal; interactive editing must never be
//!   interrupted by an exception-shaped control flow
//! - Maintain zero-cost error handling where possible

#[cfg(not(feature = "std"))]
use core::fmt;

#[cfg(feature = "std")]
use thiserror::Error;

/// Error type for boundary validation in ass-markup
///
/// Only produced by the checked entry points; the core tokenizer, parser,
/// mutator, and resampler never fail.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkupError {
    /// Position past the end of the text being edited
    #[cfg_attr(
        feature = "std",
        error("position out of bounds: {position} (text length: {length})")
    )]
    PositionOutOfBounds {
        /// Offending byte position
        position: usize,
        /// Length of the text the position was checked against
        length: usize,
    },

    /// Position inside a multi-byte character
    #[cfg_attr(
        feature = "std",
        error("position {position} is not a character boundary")
    )]
    PositionNotCharBoundary {
        /// Offending byte position
        position: usize,
    },

    /// Zero or degenerate resolution passed to the resampler configuration
    #[cfg_attr(feature = "std", error("invalid resolution: {width}x{height}"))]
    InvalidResolution {
        /// Script width in pixels
        width: u32,
        /// Script height in pixels
        height: u32,
    },
}

/// Result type alias for convenience
pub type Result<T> = core::result::Result<T, MarkupError>;

/// `no_std` compatible Display implementation
#[cfg(not(feature = "std"))]
impl fmt::Display for MarkupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PositionOutOfBounds { position, length } => {
                write!(
                    f,
                    "position out of bounds: {} (text length: {})",
                    position, length
                )
            }
            Self::PositionNotCharBoundary { position } => {
                write!(f, "position {} is not a character boundary", position)
            }
            Self::InvalidResolution { width, height } => {
                write!(f, "invalid resolution: {}x{}", width, height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_position_out_of_bounds() {
        let err = MarkupError::PositionOutOfBounds {
            position: 12,
            length: 5,
        };
        let msg = alloc::format!("{err}");
        assert!(msg.contains("12"));
        assert!(msg.contains('5'));
    }

    #[test]
    fn display_invalid_resolution() {
        let err = MarkupError::InvalidResolution {
            width: 0,
            height: 480,
        };
        assert!(alloc::format!("{err}").contains("0x480"));
    }

    #[test]
    fn errors_are_comparable() {
        let a = MarkupError::PositionNotCharBoundary { position: 3 };
        let b = MarkupError::PositionNotCharBoundary { position: 3 };
        assert_eq!(a, b);
    }
}
