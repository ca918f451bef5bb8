//! Unit tests for palette format implementations.
//!
//! These tests check the exact text each format writes and the shared
//! file export path.


use huewheel_color::Rgb;

use crate::format::palette::{PaletteData, PaletteEntry};

/// The red-to-cyan palette used across format tests.
fn red_cyan_palette() -> PaletteData {
    let mut data = PaletteData::new("mypalette");
    data.push(PaletteEntry::new(Rgb::new(255, 0, 0), "red"));
    data.push(PaletteEntry::new(Rgb::new(0, 255, 255), "cyan"));
    data
}
