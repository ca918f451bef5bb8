//! Tonal spread: a symmetric palette fanned out around one base color.
//!
//! Unlike the two-point gradient, a spread walks from `-1` to `+1` around the
//! base, nudging hue, saturation and value in proportion to the position.

use serde::{Deserialize, Serialize};

use crate::convert::Hsv;

/// Hue swing at the ends of a spread, per unit of `hue_spread`.
const HUE_SWING: f64 = 0.1;
/// Saturation and value swing at the ends, per unit of adjustment.
const TONE_SWING: f64 = 0.3;

/// Adjustments for a tonal spread.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TonalSpread {
    /// Brightness swing, `-1.0..=1.0`
    pub shade_adjust: f64,
    /// Constant hue rotation in turns, `-1.0..=1.0`
    pub hue_adjust: f64,
    /// Saturation swing, `-1.0..=1.0`
    pub sat_adjust: f64,
    /// Hue fan-out factor, `0.0..=2.0`
    pub hue_spread: f64,
}

impl Default for TonalSpread {
    fn default() -> Self {
        Self {
            shade_adjust: 0.0,
            hue_adjust: 0.0,
            sat_adjust: 0.0,
            hue_spread: 1.0,
        }
    }
}

impl TonalSpread {
    /// Copy with every adjustment clamped into its range.
    pub fn clamped(self) -> Self {
        Self {
            shade_adjust: self.shade_adjust.clamp(-1.0, 1.0),
            hue_adjust: self.hue_adjust.clamp(-1.0, 1.0),
            sat_adjust: self.sat_adjust.clamp(-1.0, 1.0),
            hue_spread: self.hue_spread.clamp(0.0, 2.0),
        }
    }

    /// `count` colors spread symmetrically around `base`.
    ///
    /// The middle of the palette is `base` with only the constant hue
    /// rotation applied. A single color sits at the middle.
    pub fn generate(&self, base: Hsv, count: usize) -> Vec<Hsv> {
        (0..count)
            .map(|i| {
                let frac = if count > 1 {
                    -1.0 + 2.0 * i as f64 / (count - 1) as f64
                } else {
                    0.0
                };
                self.at(base, frac)
            })
            .collect()
    }

    /// Apply only the constant parts of the adjustment to one color.
    pub fn adjust(&self, hsv: Hsv) -> Hsv {
        Hsv::new(
            hsv.h + self.hue_adjust,
            (hsv.s + self.sat_adjust * TONE_SWING).clamp(0.0, 1.0),
            (hsv.v + self.shade_adjust * TONE_SWING).clamp(0.0, 1.0),
        )
    }

    fn at(&self, base: Hsv, frac: f64) -> Hsv {
        Hsv::new(
            base.h + frac * self.hue_spread * HUE_SWING + self.hue_adjust,
            (base.s + frac * self.sat_adjust * TONE_SWING).clamp(0.0, 1.0),
            (base.v + frac * self.shade_adjust * TONE_SWING).clamp(0.0, 1.0),
        )
    }
}
