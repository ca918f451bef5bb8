//! Huewheel - HSV color wheel and gradient palette builder
//!
//! Pick a color on a wheel, tune a gradient from it to its complement and
//! export the result as a palette. The color math lives in
//! [`huewheel_color`]; this crate holds the picker state, message handling,
//! wheel bitmap, palette formats, configuration and the command-line
//! front-end.

pub mod app;
pub mod cli;
pub mod config;
pub mod constants;
pub mod debounce;
pub mod format;
pub mod message;
pub mod state;
pub mod wheel;

pub use app::{GradientView, Hover, PickerApp, Update};
pub use config::{AppConfig, ConfigError, LogLevel};
pub use debounce::RecomputeDebouncer;
pub use format::{FormatError, FormatRegistry, PaletteData, PaletteFormat};
pub use message::Message;
pub use state::{Focus, PickedColor, PickerState, Selection};
pub use wheel::WheelGeometry;
