//! Plain hex list format: one lowercase `rrggbb` per line.

use crate::format::error::FormatError;
use crate::format::palette::PaletteData;
use crate::format::traits::{ExportOptions, ExportResult, FormatWarning, PaletteFormat};

/// Hex list format, as read by pixel-art editors.
///
/// Color names and the palette name are not stored.
pub struct HexListFormat;

impl PaletteFormat for HexListFormat {
    fn id(&self) -> &'static str {
        "hex"
    }

    fn display_name(&self) -> &'static str {
        "Hex List"
    }

    fn extensions(&self) -> &[&'static str] {
        &["hex", "txt"]
    }

    fn supports_names(&self) -> bool {
        false
    }

    fn export_to_string(
        &self,
        data: &PaletteData,
        _options: &ExportOptions,
    ) -> Result<(String, ExportResult), FormatError> {
        let mut result = ExportResult::new(data.len());
        if !data.is_empty() {
            result.add_warning(FormatWarning::info("Color names are not stored in hex lists"));
        }

        let mut text = String::with_capacity(data.len() * 7);
        for rgb in data.colors() {
            let [r, g, b] = rgb.to_array();
            text.push_str(&format!("{r:02x}{g:02x}{b:02x}\n"));
        }

        Ok((text, result))
    }
}
