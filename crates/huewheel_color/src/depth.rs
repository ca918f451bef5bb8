//! Color-depth quantization.
//!
//! A [`ColorDepth`] limits each RGB channel to a number of evenly spaced
//! levels spanning `0..=255`. The same [`quantize`] function is used for wheel
//! pixels and for single swatches.

use serde::{Deserialize, Serialize};

use crate::convert::Rgb;

/// Number of levels per channel, clamped to
/// [`ColorDepth::MIN_LEVELS`]..=[`ColorDepth::MAX_LEVELS`].
///
/// Anything at or above 256 levels leaves colors untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ColorDepth(u32);

impl ColorDepth {
    /// Fewest levels accepted.
    pub const MIN_LEVELS: u32 = 1;
    /// Most levels accepted.
    pub const MAX_LEVELS: u32 = 65_536;
    /// Full 8-bit depth, no quantization.
    pub const FULL: Self = Self(256);

    /// Create a depth, clamping `levels` into the accepted range.
    pub fn new(levels: u32) -> Self {
        Self(levels.clamp(Self::MIN_LEVELS, Self::MAX_LEVELS))
    }

    /// Levels per channel.
    pub fn levels(self) -> u32 {
        self.0
    }

    /// Whether this depth leaves colors unchanged.
    pub fn is_full(self) -> bool {
        self.0 >= 256
    }

    /// Quantize a color to this depth.
    pub fn quantize(self, rgb: Rgb) -> Rgb {
        quantize(rgb, self.0)
    }
}

impl Default for ColorDepth {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<u32> for ColorDepth {
    fn from(levels: u32) -> Self {
        Self::new(levels)
    }
}

impl From<ColorDepth> for u32 {
    fn from(depth: ColorDepth) -> Self {
        depth.0
    }
}

/// Snap every channel of `rgb` to the nearest of `levels` evenly spaced values.
///
/// - `levels >= 256`: identity
/// - `levels <= 1`: every channel becomes the mid value 128
/// - otherwise `round(c / step) * step` with `step = 255 / (levels - 1)`,
///   rounded to the nearest integer and clamped to `0..=255`
pub fn quantize(rgb: Rgb, levels: u32) -> Rgb {
    if levels >= 256 {
        return rgb;
    }
    if levels <= 1 {
        return Rgb::new(128, 128, 128);
    }

    let step = 255.0 / f64::from(levels - 1);
    let snap = |c: u8| -> u8 {
        let snapped = (f64::from(c) / step).round() * step;
        snapped.round().clamp(0.0, 255.0) as u8
    };

    Rgb::new(snap(rgb.r), snap(rgb.g), snap(rgb.b))
}
