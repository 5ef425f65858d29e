//! Character ramps
//!
//! A ramp is the lookup table used for brightness buckets, ordered from the
//! darkest glyph (index 0) to the brightest.

use crate::luma::LUMA_SCALE;

/// Built-in 70 character ramp, darkest first
pub const DEFAULT_RAMP: &str =
    " .'`^\",:;Il!i><~+_-?][}{1)(|\\/tfjrxnuvczXYUJCLQ0OZmwqpdbkhao*#MW&8%B@$";

/// Ordered, non-empty sequence of glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRamp {
    chars: Vec<char>,
}

impl Default for CharacterRamp {
    fn default() -> Self {
        Self {
            chars: DEFAULT_RAMP.chars().collect(),
        }
    }
}

impl CharacterRamp {
    /// Build a ramp from user input
    ///
    /// Empty or whitespace-only input falls back to [`DEFAULT_RAMP`]. Any other
    /// string is used as-is, including interior and leading spaces.
    pub fn new(chars: &str) -> Self {
        if chars.trim().is_empty() {
            if !chars.is_empty() {
                log::warn!("whitespace-only character ramp, using the default ramp");
            }
            return Self::default();
        }
        Self {
            chars: chars.chars().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always false: a ramp holds at least one glyph
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn darkest(&self) -> char {
        self.chars[0]
    }

    pub fn brightest(&self) -> char {
        self.chars[self.chars.len() - 1]
    }

    pub fn as_chars(&self) -> &[char] {
        &self.chars
    }

    /// Bucket index for a scaled luma value
    ///
    /// `scaled` is brightness multiplied by [`LUMA_SCALE`] (see
    /// [`crate::luma::scaled_luma`]). Computes
    /// `floor(brightness / 255 * (len - 1))` without rounding error, clamped
    /// to the ramp bounds.
    pub fn index_for(&self, scaled: u32, invert: bool) -> usize {
        let max = 255 * LUMA_SCALE;
        let mut value = scaled.min(max);

        if invert {
            value = max - value;
        }

        let last = (self.chars.len() - 1) as u64;
        let index = (value as u64 * last) / max as u64;
        (index as usize).min(self.chars.len() - 1)
    }

    /// Glyph for a scaled luma value
    pub fn char_for(&self, scaled: u32, invert: bool) -> char {
        self.chars[self.index_for(scaled, invert)]
    }
}

impl From<&str> for CharacterRamp {
    fn from(chars: &str) -> Self {
        Self::new(chars)
    }
}
