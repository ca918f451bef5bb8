//! Color conversion between HSV, RGB and hex notation.
//!
//! Hue, saturation and value are normalized to `0.0..=1.0`; hue is circular
//! and always stored modulo 1.0. RGB channels are 8-bit and produced by
//! truncation, never rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::depth::ColorDepth;
use crate::error::ParseHexError;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
}

impl Rgb {
    /// Create a color from its three channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from an `[r, g, b]` array.
    pub const fn from_array(rgb: [u8; 3]) -> Self {
        Self::new(rgb[0], rgb[1], rgb[2])
    }

    /// Channels as an `[r, g, b]` array.
    pub const fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Lowercase `#rrggbb` notation.
    pub fn to_hex(self) -> String {
        rgb_to_hex(self)
    }

    /// Convert to HSV.
    pub fn to_hsv(self) -> Hsv {
        rgb_to_hsv(self)
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_squared(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }

    /// Parse three decimal channel entries, as typed into RGB input fields.
    ///
    /// Returns `None` unless every entry is an integer in `0..=255`.
    pub fn from_entries(r: &str, g: &str, b: &str) -> Option<Self> {
        let channel = |s: &str| s.trim().parse::<u8>().ok();
        Some(Self::new(channel(r)?, channel(g)?, channel(b)?))
    }
}

impl From<[u8; 3]> for Rgb {
    fn from(rgb: [u8; 3]) -> Self {
        Self::from_array(rgb)
    }
}

impl From<Rgb> for [u8; 3] {
    fn from(rgb: Rgb) -> Self {
        rgb.to_array()
    }
}

/// Formats like a tuple, e.g. `(255, 0, 0)`, matching the readout text.
impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.r, self.g, self.b)
    }
}

impl FromStr for Rgb {
    type Err = ParseHexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);

        if digits.len() != 6 {
            return Err(ParseHexError::InvalidLength(digits.len()));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseHexError::InvalidDigit(digits.to_string()));
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ParseHexError::InvalidDigit(digits.to_string()))
        };

        Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

/// A color in HSV space with every component in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hsv {
    /// Hue, circular, in `[0, 1)`
    pub h: f64,
    /// Saturation
    pub s: f64,
    /// Value (brightness)
    pub v: f64,
}

impl Hsv {
    /// Create an HSV color, wrapping the hue into `[0, 1)`.
    ///
    /// Saturation and value are stored as given.
    pub fn new(h: f64, s: f64, v: f64) -> Self {
        Self { h: wrap_hue(h), s, v }
    }

    /// The complementary color: hue rotated by half a turn.
    pub fn opposite(self) -> Self {
        Self {
            h: opposite_hue(self.h),
            ..self
        }
    }

    /// Rotate the hue by `delta` turns.
    pub fn rotated(self, delta: f64) -> Self {
        Self::new(self.h + delta, self.s, self.v)
    }

    /// Convert to full-depth RGB.
    pub fn to_rgb(self) -> Rgb {
        hsv_to_rgb(self.h, self.s, self.v)
    }

    /// Convert to RGB and quantize to `depth`.
    ///
    /// Every call site that shows a color (wheel pixels, swatches, exported
    /// entries) goes through here so they agree bit-for-bit.
    pub fn to_rgb_at(self, depth: ColorDepth) -> Rgb {
        depth.quantize(self.to_rgb())
    }
}

/// Wrap a hue into `[0, 1)`.
pub fn wrap_hue(h: f64) -> f64 {
    let wrapped = h.rem_euclid(1.0);
    // rem_euclid rounds tiny negative inputs up to exactly 1.0
    if wrapped >= 1.0 { 0.0 } else { wrapped }
}

/// Hue on the opposite side of the wheel.
pub fn opposite_hue(h: f64) -> f64 {
    wrap_hue(h + 0.5)
}

/// Convert HSV (all components `0.0..=1.0`) to 8-bit RGB.
///
/// The hue wraps modulo 1.0. Channels are truncated toward zero and saturate
/// at `0` and `255`, so values scaled above 1.0 by a fine-tune multiplier clip
/// rather than overflow.
pub fn hsv_to_rgb(h: f64, s: f64, v: f64) -> Rgb {
    let (r, g, b) = hsv_to_unit_rgb(h, s, v);
    Rgb::new(truncate_channel(r), truncate_channel(g), truncate_channel(b))
}

fn hsv_to_unit_rgb(h: f64, s: f64, v: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (v, v, v);
    }

    let h = wrap_hue(h) * 6.0;
    let sector = h.floor();
    let f = h - sector;

    let p = v * (1.0 - s);
    let q = v * (1.0 - s * f);
    let t = v * (1.0 - s * (1.0 - f));

    match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

fn truncate_channel(unit: f64) -> u8 {
    // `as` truncates toward zero and saturates (NaN becomes 0)
    (unit * 255.0) as u8
}

/// Convert 8-bit RGB to HSV.
///
/// Greys (all channels equal) have hue and saturation 0.
pub fn rgb_to_hsv(rgb: Rgb) -> Hsv {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let v = max;

    if max == min {
        return Hsv { h: 0.0, s: 0.0, v };
    }

    let range = max - min;
    let s = range / max;
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let h = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    Hsv {
        h: wrap_hue(h / 6.0),
        s,
        v,
    }
}

/// Lowercase `#rrggbb` notation.
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.r, rgb.g, rgb.b)
}

/// Parse `#rrggbb` or `rrggbb`, ignoring surrounding whitespace.
///
/// Returns `None` for anything that is not exactly six hex digits.
pub fn hex_to_rgb(hex: &str) -> Option<Rgb> {
    hex.parse().ok()
}
