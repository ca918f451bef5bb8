//! Selection and focus state of the picker.

use huewheel_color::{ColorDepth, Hsv, Rgb};

/// A color chosen on the wheel or typed into the RGB/hex fields.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PickedColor {
    /// The picked color in HSV
    pub hsv: Hsv,
    /// Exact RGB typed by the user, if the color came from an input field
    pub entered: Option<Rgb>,
}

impl PickedColor {
    /// Color picked from the wheel.
    pub fn from_hsv(hsv: Hsv) -> Self {
        Self { hsv, entered: None }
    }

    /// Color typed as RGB; the entered value is shown as-is.
    pub fn from_rgb(rgb: Rgb) -> Self {
        Self {
            hsv: rgb.to_hsv(),
            entered: Some(rgb),
        }
    }

    /// The complement of the picked color.
    pub fn opposite(&self) -> Hsv {
        self.hsv.opposite()
    }

    /// RGB shown for this color at `depth`.
    pub fn display_rgb(&self, depth: ColorDepth) -> Rgb {
        match self.entered {
            Some(rgb) => depth.quantize(rgb),
            None => self.hsv.to_rgb_at(depth),
        }
    }
}

/// What the gradient is built from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Selection {
    /// Nothing picked yet; the gradient starts at the wheel's base hue
    #[default]
    None,
    /// A color was picked
    Picked(PickedColor),
}

impl Selection {
    /// The picked color, if any.
    pub fn picked(&self) -> Option<&PickedColor> {
        match self {
            Selection::None => None,
            Selection::Picked(color) => Some(color),
        }
    }
}

/// Which panel the readout follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The color wheel
    #[default]
    Wheel,
    /// A gradient square, by index
    Square(u32),
}
