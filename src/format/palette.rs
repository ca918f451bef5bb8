//! Palette data handed to the format writers.
//!
//! `PaletteData` is the intermediate representation every format renders
//! from: an ordered list of colors with their resolved names.

use std::path::Path;

use huewheel_color::{ColorNamer, Rgb};
use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_PALETTE_NAME;

/// One palette color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteEntry {
    /// Color value
    pub rgb: Rgb,
    /// Color name
    pub name: String,
}

impl PaletteEntry {
    /// Create an entry.
    pub fn new(rgb: Rgb, name: impl Into<String>) -> Self {
        Self {
            rgb,
            name: name.into(),
        }
    }
}

/// An ordered, named palette.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaletteData {
    /// Palette name written into the file header
    pub name: String,
    /// Colors in gradient order
    pub entries: Vec<PaletteEntry>,
}

impl PaletteData {
    /// Create an empty palette.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Build a palette from colors, naming each with `namer`.
    pub fn from_colors(
        name: impl Into<String>,
        colors: impl IntoIterator<Item = Rgb>,
        namer: &ColorNamer,
    ) -> Self {
        Self {
            name: name.into(),
            entries: colors
                .into_iter()
                .map(|rgb| PaletteEntry::new(rgb, namer.name_of(rgb)))
                .collect(),
        }
    }

    /// Palette name for an output file: its stem, or a fallback when the
    /// path has none.
    pub fn name_from_path(path: &Path) -> String {
        path.file_stem()
            .and_then(|stem| stem.to_str())
            .filter(|stem| !stem.is_empty())
            .unwrap_or(DEFAULT_PALETTE_NAME)
            .to_string()
    }

    /// Append a color.
    pub fn push(&mut self, entry: PaletteEntry) {
        self.entries.push(entry);
    }

    /// Number of colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The colors without names.
    pub fn colors(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.entries.iter().map(|entry| entry.rgb)
    }
}
