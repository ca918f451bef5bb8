//! JSON palette format.

use serde::Serialize;

use crate::format::error::FormatError;
use crate::format::palette::PaletteData;
use crate::format::traits::{ExportOptions, ExportResult, PaletteFormat};

/// Version written into JSON palettes.
const JSON_PALETTE_VERSION: u32 = 1;

#[derive(Serialize)]
struct JsonPalette<'a> {
    version: u32,
    name: &'a str,
    colors: Vec<JsonColor<'a>>,
}

#[derive(Serialize)]
struct JsonColor<'a> {
    hex: String,
    rgb: [u8; 3],
    name: &'a str,
}

/// Pretty-printed JSON with hex, RGB and name for every color.
pub struct JsonPaletteFormat;

impl PaletteFormat for JsonPaletteFormat {
    fn id(&self) -> &'static str {
        "json"
    }

    fn display_name(&self) -> &'static str {
        "JSON Palette"
    }

    fn extensions(&self) -> &[&'static str] {
        &["json"]
    }

    fn supports_names(&self) -> bool {
        true
    }

    fn export_to_string(
        &self,
        data: &PaletteData,
        options: &ExportOptions,
    ) -> Result<(String, ExportResult), FormatError> {
        let document = JsonPalette {
            version: JSON_PALETTE_VERSION,
            name: options.palette_name(data),
            colors: data
                .entries
                .iter()
                .map(|entry| JsonColor {
                    hex: entry.rgb.to_hex(),
                    rgb: entry.rgb.to_array(),
                    name: &entry.name,
                })
                .collect(),
        };

        let json = serde_json::to_string_pretty(&document)?;
        Ok((json, ExportResult::new(data.len())))
    }
}
