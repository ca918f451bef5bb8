//! Color core for the Huewheel picker.
//!
//! Everything here is UI-agnostic: HSV/RGB/hex conversion, color-depth
//! quantization, nearest-name lookup and the two-point gradient engine.

pub mod convert;
pub mod depth;
pub mod error;
pub mod gradient;
pub mod info;
pub mod naming;
pub mod spread;

pub use convert::{Hsv, Rgb, hex_to_rgb, hsv_to_rgb, opposite_hue, rgb_to_hex, rgb_to_hsv, wrap_hue};
pub use depth::{ColorDepth, quantize};
pub use error::{ParseHexError, Result};
pub use gradient::{GradientColor, GradientParams, GradientSpec, curve_warp};
pub use info::{ColorInfo, Swatch};
pub use naming::{ColorNamer, NameTable, NamedColor, UNKNOWN_NAME};
pub use spread::TonalSpread;
