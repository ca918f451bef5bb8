//! Palette export system.
//!
//! Palettes are written through the [`PaletteFormat`] trait so new formats
//! can be added without touching the application. All built-in formats are
//! available from the [`FormatRegistry`].
//!
//! ## Supported Formats
//!
//! - **GIMP Palette** (`gpl`): the default; names each color
//! - **Hex list** (`hex`): one `rrggbb` per line, as used by pixel-art tools
//! - **JSON** (`json`): pretty-printed document with hex, RGB and names
//!
//! ## Usage
//!
//! ```rust,ignore
//! use huewheel::format::{ExportOptions, FormatRegistry, PaletteData};
//!
//! let registry = FormatRegistry::new();
//! let format = registry.get("gpl").ok_or_else(|| FormatError::unknown_format("gpl"))?;
//! let result = format.export(&palette, path, &ExportOptions::default())?;
//! ```

mod error;
pub mod formats;
mod palette;
mod registry;
mod traits;

pub use error::FormatError;
pub use palette::{PaletteData, PaletteEntry};
pub use registry::FormatRegistry;
pub use traits::{ExportOptions, ExportResult, FormatWarning, PaletteFormat, WarningSeverity};
