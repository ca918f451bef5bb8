//! Display metadata for a color and its complement.

use std::fmt;

use crate::convert::{Hsv, Rgb};
use crate::depth::ColorDepth;
use crate::gradient::GradientColor;
use crate::naming::ColorNamer;

/// A color with its hex code and resolved name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Swatch {
    /// RGB value
    pub rgb: Rgb,
    /// Lowercase `#rrggbb`
    pub hex: String,
    /// Nearest color name
    pub name: &'static str,
}

impl Swatch {
    /// Describe `rgb` using `namer`.
    pub fn describe(rgb: Rgb, namer: &ColorNamer) -> Self {
        Self {
            rgb,
            hex: rgb.to_hex(),
            name: namer.name_of(rgb),
        }
    }
}

/// `<hex> (<r>, <g>, <b>) <name>`
impl fmt::Display for Swatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.hex, self.rgb, self.name)
    }
}

/// A color and its complement, ready for the readout panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorInfo {
    /// The color itself
    pub color: Swatch,
    /// The color half a turn around the wheel
    pub opposite: Swatch,
}

impl ColorInfo {
    /// Describe a color pair.
    pub fn describe(rgb: Rgb, opposite: Rgb, namer: &ColorNamer) -> Self {
        Self {
            color: Swatch::describe(rgb, namer),
            opposite: Swatch::describe(opposite, namer),
        }
    }

    /// Describe an HSV color and its complement at `depth`.
    pub fn from_hsv(hsv: Hsv, depth: ColorDepth, namer: &ColorNamer) -> Self {
        Self::describe(hsv.to_rgb_at(depth), hsv.opposite().to_rgb_at(depth), namer)
    }

    /// Describe a computed gradient color; the complement comes from the same
    /// computation, never a second one.
    pub fn from_gradient(color: &GradientColor, namer: &ColorNamer) -> Self {
        Self::describe(color.rgb, color.opposite, namer)
    }

    /// Two-line text shown below the wheel.
    pub fn readout(&self) -> String {
        self.to_string()
    }
}

/// ```text
/// Colour: #ff0000 (255, 0, 0) red
/// Opposite: #00ffff (0, 255, 255) cyan
/// ```
impl fmt::Display for ColorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Colour: {}\nOpposite: {}", self.color, self.opposite)
    }
}
