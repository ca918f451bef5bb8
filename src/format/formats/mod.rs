//! Palette format implementations.

mod gpl;
mod hex;
mod json;

#[cfg(test)]
mod tests;

pub use gpl::GimpPaletteFormat;
pub use hex::HexListFormat;
pub use json::JsonPaletteFormat;
