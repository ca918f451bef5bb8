//! Global constants for the Huewheel application

use std::time::Duration;

/// Default width and height of the wheel bitmap in pixels
pub const DEFAULT_WHEEL_SIZE: u32 = 300;

/// Smallest wheel bitmap that still has a visible disc
pub const MIN_WHEEL_SIZE: u32 = 8;

/// Largest wheel bitmap the CLI will render
pub const MAX_WHEEL_SIZE: u32 = 4096;

/// Gap between the wheel disc and the bitmap edge
pub const WHEEL_MARGIN: u32 = 2;

/// Delay before a gradient recompute runs after the last triggering event
pub const RECOMPUTE_DEBOUNCE: Duration = Duration::from_millis(50);

/// Full range of the hue slider, in degrees
pub const HUE_SLIDER_DEGREES: f64 = 360.0;

/// Full range of the shade and fine shade sliders, in percent
pub const SHADE_SLIDER_PERCENT: f64 = 100.0;

/// Range of the end hue fine-tune slider, in degrees either way
pub const FINE_HUE_SLIDER_DEGREES: f64 = 180.0;

/// Palette name used when none can be derived from the file name
pub const DEFAULT_PALETTE_NAME: &str = "palette";
