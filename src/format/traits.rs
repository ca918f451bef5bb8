//! Trait definitions for palette format implementations.

use std::path::{Path, PathBuf};

use crate::format::error::FormatError;
use crate::format::palette::PaletteData;

/// Trait for palette export implementations.
///
/// Formats only need to render text; writing the file is shared.
pub trait PaletteFormat: Send + Sync {
    /// Unique identifier for this format (e.g., "gpl", "hex", "json").
    fn id(&self) -> &'static str;

    /// Human-readable name for UI display.
    fn display_name(&self) -> &'static str;

    /// File extensions this format uses, preferred first.
    fn extensions(&self) -> &[&'static str];

    /// Whether color names survive in the output.
    fn supports_names(&self) -> bool;

    /// Render the palette to text.
    ///
    /// The returned result carries counts and warnings; `files_created` is
    /// filled in by [`export`](Self::export).
    fn export_to_string(
        &self,
        data: &PaletteData,
        options: &ExportOptions,
    ) -> Result<(String, ExportResult), FormatError>;

    /// Export the palette to `path`.
    fn export(
        &self,
        data: &PaletteData,
        path: &Path,
        options: &ExportOptions,
    ) -> Result<ExportResult, FormatError> {
        let path = options.output_path(path, self.extensions());
        log::info!("Exporting {} palette to {:?}", self.id(), path);

        let (text, mut result) = self.export_to_string(data, options)?;
        std::fs::write(&path, text)?;
        result.files_created.push(path);

        log::info!(
            "Exported {} colors ({} warnings)",
            result.colors_exported,
            result.warnings.len()
        );
        Ok(result)
    }
}

/// Options for export operations.
#[derive(Debug, Clone, Default)]
pub struct ExportOptions {
    /// Palette name to write instead of the one in the data.
    pub name: Option<String>,

    /// Add the format's extension when the path has none.
    pub append_extension: bool,
}

impl ExportOptions {
    /// Create new export options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override the palette name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Add the format's extension to bare paths.
    pub fn append_extension(mut self, append: bool) -> Self {
        self.append_extension = append;
        self
    }

    /// Name to write for `data`.
    pub fn palette_name<'a>(&'a self, data: &'a PaletteData) -> &'a str {
        self.name.as_deref().unwrap_or(&data.name)
    }

    /// Final output path for a format with `extensions`.
    pub fn output_path(&self, path: &Path, extensions: &[&str]) -> PathBuf {
        match extensions.first() {
            Some(ext) if self.append_extension && path.extension().is_none() => {
                path.with_extension(ext)
            }
            _ => path.to_path_buf(),
        }
    }
}

/// Result of an export operation.
#[derive(Debug, Default)]
pub struct ExportResult {
    /// Number of colors written.
    pub colors_exported: usize,

    /// Warnings generated during export (e.g., dropped names).
    pub warnings: Vec<FormatWarning>,

    /// Files created during export.
    pub files_created: Vec<PathBuf>,
}

impl ExportResult {
    /// Create a result for `colors_exported` colors.
    pub fn new(colors_exported: usize) -> Self {
        Self {
            colors_exported,
            ..Self::default()
        }
    }

    /// Add a warning to the result.
    pub fn add_warning(&mut self, warning: FormatWarning) {
        self.warnings.push(warning);
    }

    /// Check if there were any warnings.
    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}

/// Warning generated during export.
#[derive(Debug, Clone)]
pub struct FormatWarning {
    /// Human-readable warning message.
    pub message: String,

    /// Severity level of the warning.
    pub severity: WarningSeverity,
}

impl FormatWarning {
    /// Create a new warning.
    pub fn new(message: impl Into<String>, severity: WarningSeverity) -> Self {
        Self {
            message: message.into(),
            severity,
        }
    }

    /// Create an info-level warning.
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, WarningSeverity::Info)
    }

    /// Create a warning-level warning.
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, WarningSeverity::Warning)
    }
}

/// Severity level for format warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningSeverity {
    /// Informational message, not a problem.
    Info,
    /// Something was dropped or changed.
    Warning,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_keeps_extension() {
        let options = ExportOptions::new().append_extension(true);
        assert_eq!(
            options.output_path(Path::new("out/palette.txt"), &["gpl"]),
            PathBuf::from("out/palette.txt")
        );
        assert_eq!(
            options.output_path(Path::new("out/palette"), &["gpl"]),
            PathBuf::from("out/palette.gpl")
        );
    }

    #[test]
    fn test_output_path_untouched_by_default() {
        let options = ExportOptions::new();
        assert_eq!(
            options.output_path(Path::new("palette"), &["gpl"]),
            PathBuf::from("palette")
        );
    }

    #[test]
    fn test_palette_name_override() {
        let data = PaletteData::new("from-file");
        assert_eq!(ExportOptions::new().palette_name(&data), "from-file");
        assert_eq!(ExportOptions::new().name("custom").palette_name(&data), "custom");
    }
}
