//! Application message types for Huewheel.
//!
//! All UI events are represented as messages in the Elm architecture style.
//! Slider values arrive in the units the controls display; [`PickerApp`]
//! converts them to fractions and turns.
//!
//! [`PickerApp`]: crate::app::PickerApp

/// Messages that can be sent to update application state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Wheel controls
    /// Hue slider (degrees, `0..=360`) or shade slider (percent, `0..=100`) moved
    HueShade {
        hue_degrees: f64,
        shade_percent: f64,
    },
    /// Pointer moved over the wheel canvas
    WheelHovered { x: f64, y: f64 },
    /// Wheel canvas clicked
    WheelClicked,

    // Gradient controls
    /// Number of gradient steps changed
    Steps(u32),
    /// Curve slider moved (`-100..=100`)
    Curve(f64),
    /// Fine-tune sliders moved
    FineTune {
        /// Start shade multiplier, percent of 100
        start_shade_percent: f64,
        /// End shade multiplier, percent of 100
        end_shade_percent: f64,
        /// End hue offset in degrees (`-180..=180`)
        end_hue_degrees: f64,
    },
    /// Color depth changed (levels per channel)
    ColorDepth(u32),

    // Color entry
    /// RGB fields submitted as raw text
    RgbEntered { r: String, g: String, b: String },
    /// Hex field submitted
    HexEntered(String),

    // Gradient squares
    /// Pointer moved over a gradient square
    SquareHovered(u32),
    /// Gradient square clicked
    SquareClicked(u32),
}
