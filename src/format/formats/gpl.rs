//! GIMP palette (`.gpl`) format implementation.
//!
//! ```text
//! GIMP Palette
//! Name: sunset
//! #
//! 255   0   0 red
//!   0 255 255 cyan
//! ```
//!
//! Lines are joined with `\n` and the file has no trailing newline.

use crate::format::error::FormatError;
use crate::format::palette::PaletteData;
use crate::format::traits::{ExportOptions, ExportResult, FormatWarning, PaletteFormat};

/// First line of every GIMP palette.
const HEADER: &str = "GIMP Palette";

/// GIMP palette format.
///
/// Stores RGB and one name per color. The palette name must fit on the
/// header line.
pub struct GimpPaletteFormat;

impl PaletteFormat for GimpPaletteFormat {
    fn id(&self) -> &'static str {
        "gpl"
    }

    fn display_name(&self) -> &'static str {
        "GIMP Palette"
    }

    fn extensions(&self) -> &[&'static str] {
        &["gpl"]
    }

    fn supports_names(&self) -> bool {
        true
    }

    fn export_to_string(
        &self,
        data: &PaletteData,
        options: &ExportOptions,
    ) -> Result<(String, ExportResult), FormatError> {
        let name = options.palette_name(data);
        if name.contains(['\n', '\r']) {
            return Err(FormatError::invalid_palette(
                self.id(),
                "palette name must be a single line",
            ));
        }

        let mut result = ExportResult::new(data.len());
        if data.is_empty() {
            result.add_warning(FormatWarning::warning("Palette has no colors"));
        }

        let mut lines = Vec::with_capacity(data.len() + 3);
        lines.push(HEADER.to_string());
        lines.push(format!("Name: {name}"));
        lines.push("#".to_string());
        for entry in &data.entries {
            let [r, g, b] = entry.rgb.to_array();
            lines.push(format!("{:3} {:3} {:3} {}", r, g, b, entry.name));
        }

        Ok((lines.join("\n"), result))
    }
}
