//! Format registry for discovering and accessing palette formats.

use std::collections::HashMap;
use std::path::Path;

use crate::format::error::FormatError;
use crate::format::formats::{GimpPaletteFormat, HexListFormat, JsonPaletteFormat};
use crate::format::traits::PaletteFormat;

/// Registry of available palette formats.
///
/// All built-in formats are registered automatically on creation.
pub struct FormatRegistry {
    formats: HashMap<&'static str, Box<dyn PaletteFormat>>,
}

impl FormatRegistry {
    /// ID of the format used when none is requested.
    pub const DEFAULT_FORMAT: &'static str = "gpl";

    /// Create a new registry with all built-in formats registered.
    pub fn new() -> Self {
        let mut registry = Self {
            formats: HashMap::new(),
        };

        registry.register(Box::new(GimpPaletteFormat));
        registry.register(Box::new(HexListFormat));
        registry.register(Box::new(JsonPaletteFormat));

        registry
    }

    /// Register a format implementation.
    pub fn register(&mut self, format: Box<dyn PaletteFormat>) {
        self.formats.insert(format.id(), format);
    }

    /// Get a format by its ID.
    pub fn get(&self, id: &str) -> Option<&dyn PaletteFormat> {
        self.formats.get(id).map(|f| f.as_ref())
    }

    /// Get a format by its ID, or an error naming the missing ID.
    pub fn require(&self, id: &str) -> Result<&dyn PaletteFormat, FormatError> {
        self.get(id).ok_or_else(|| FormatError::unknown_format(id))
    }

    /// Find formats by file extension (case-insensitive).
    pub fn by_extension(&self, ext: &str) -> Vec<&dyn PaletteFormat> {
        self.all()
            .into_iter()
            .filter(|f| f.extensions().iter().any(|e| e.eq_ignore_ascii_case(ext)))
            .collect()
    }

    /// Pick a format from the extension of `path`.
    pub fn for_path(&self, path: &Path) -> Option<&dyn PaletteFormat> {
        let ext = path.extension()?.to_str()?;
        self.by_extension(ext).into_iter().next()
    }

    /// Get all registered formats, ordered by ID.
    pub fn all(&self) -> Vec<&dyn PaletteFormat> {
        let mut formats: Vec<_> = self.formats.values().map(|f| f.as_ref()).collect();
        formats.sort_by_key(|f| f.id());
        formats
    }

    /// Get all format IDs, sorted.
    pub fn ids(&self) -> Vec<&'static str> {
        let mut ids: Vec<_> = self.formats.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

impl Default for FormatRegistry {
    fn default() -> Self {
        Self::new()
    }
}
