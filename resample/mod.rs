//! Drawing-command coordinate resampling
//!
//! Rewrites the numeric coordinates of a `\p` drawing payload when a script
//! is retargeted to a different resolution. Coordinates alternate x/y; each
//! command letter restarts the cycle. Values are shifted by the configured
//! margin, scaled, quantized to eighth-pixel units, and written back in
//! compact form. Unrecognized tokens are dropped rather than copied; that
//! is the error-tolerance policy for malformed payloads.
//!
//! # Example
//!
//! ```rust
//! use ass_markup::resample::{resample_drawing, ResampleState};
//!
//! let state = ResampleState {
//!     margin: [0.0; 4],
//!     scale_x: 2.0,
//!     scale_y: 2.0,
//! };
//! let scaled = resample_drawing("m 0 0 l 10 10 10 20", &state);
//! assert_eq!(scaled, "m 0 0 l 20 20 20 40");
//! ```

use alloc::string::String;

use crate::utils::compact_float;
use crate::utils::errors::MarkupError;

/// Immutable resampling configuration
///
/// `margin` entries are in source-resolution pixels and are added to a
/// coordinate before the scale factor is applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResampleState {
    /// Extra canvas on each side: left, top, right, bottom
    pub margin: [f64; 4],

    /// Horizontal scale factor
    pub scale_x: f64,

    /// Vertical scale factor
    pub scale_y: f64,
}

impl ResampleState {
    /// Index of the left margin
    pub const LEFT: usize = 0;
    /// Index of the top margin
    pub const TOP: usize = 1;
    /// Index of the right margin
    pub const RIGHT: usize = 2;
    /// Index of the bottom margin
    pub const BOTTOM: usize = 3;

    /// Configuration that leaves coordinates unchanged
    #[must_use]
    pub const fn identity() -> Self {
        Self {
            margin: [0.0; 4],
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }

    /// Build a configuration for retargeting `source` to `dest` pixels
    ///
    /// The margins widen the source canvas before the scale factors are
    /// derived, which is how letterboxing is folded into a resample.
    ///
    /// # Errors
    ///
    /// Returns [`MarkupError::InvalidResolution`] when either resolution
    /// has a zero dimension or the margins collapse the source canvas.
    pub fn from_resolutions(
        source: (u32, u32),
        dest: (u32, u32),
        margin: [f64; 4],
    ) -> Result<Self, MarkupError> {
        if source.0 == 0 || source.1 == 0 {
            return Err(MarkupError::InvalidResolution {
                width: source.0,
                height: source.1,
            });
        }
        if dest.0 == 0 || dest.1 == 0 {
            return Err(MarkupError::InvalidResolution {
                width: dest.0,
                height: dest.1,
            });
        }
        let source_x = f64::from(source.0) + margin[Self::LEFT] + margin[Self::RIGHT];
        let source_y = f64::from(source.1) + margin[Self::TOP] + margin[Self::BOTTOM];
        if source_x <= 0.0 || source_y <= 0.0 {
            return Err(MarkupError::InvalidResolution {
                width: source.0,
                height: source.1,
            });
        }
        Ok(Self {
            margin,
            scale_x: f64::from(dest.0) / source_x,
            scale_y: f64::from(dest.1) / source_y,
        })
    }
}

impl Default for ResampleState {
    fn default() -> Self {
        Self::identity()
    }
}

/// Drawing command letters; each one restarts the x/y alternation
const fn is_command_letter(byte: u8) -> bool {
    matches!(byte, b'm' | b'n' | b'l' | b'b' | b's' | b'p' | b'c')
}

/// Rescale the coordinates of a drawing-command payload
///
/// Pure function of its inputs. Command letters are normalized to
/// lowercase; anything that is neither a number nor a known letter is
/// silently dropped.
#[must_use]
pub fn resample_drawing(drawing: &str, state: &ResampleState) -> String {
    let mut out = String::with_capacity(drawing.len());
    let mut is_x = true;

    for token in drawing.split_whitespace() {
        if let Ok(value) = token.parse::<f64>() {
            let value = if is_x {
                (value + state.margin[ResampleState::LEFT]) * state.scale_x
            } else {
                (value + state.margin[ResampleState::TOP]) * state.scale_y
            };
            // round half-up to eighth-pixel units
            let value = (value * 8.0 + 0.5).floor() / 8.0;
            out.push_str(&compact_float(value));
            out.push(' ');
            is_x = !is_x;
        } else if token.len() == 1 {
            let letter = token.as_bytes()[0].to_ascii_lowercase();
            if is_command_letter(letter) {
                is_x = true;
                out.push(char::from(letter));
                out.push(' ');
            }
        }
    }

    out.pop();
    out
}
