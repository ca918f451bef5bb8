//! HSV color wheel geometry and bitmap.
//!
//! The wheel is a disc where angle selects hue and distance from the centre
//! selects saturation; value is the global shade. Pointer hover and bitmap
//! rendering both go through [`WheelGeometry::hsv_at`] and
//! [`Hsv::to_rgb_at`], so a hovered pixel always reads back the exact color
//! drawn under it.

use std::f64::consts::PI;

use huewheel_color::{ColorDepth, Hsv};
use image::{Rgb as Pixel, RgbImage};

use crate::constants::WHEEL_MARGIN;

/// Square wheel canvas of `size` x `size` pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WheelGeometry {
    size: u32,
}

impl WheelGeometry {
    /// Geometry for a square canvas.
    pub fn new(size: u32) -> Self {
        Self { size }
    }

    /// Canvas width and height.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Centre coordinate on both axes.
    pub fn center(&self) -> f64 {
        f64::from(self.size / 2)
    }

    /// Disc radius in pixels.
    pub fn radius(&self) -> f64 {
        f64::from((self.size / 2).saturating_sub(WHEEL_MARGIN))
    }

    /// Color under canvas position `(x, y)`, or `None` outside the disc.
    ///
    /// The hue is measured from the negative x axis and rotated by
    /// `hue_shift` turns.
    pub fn hsv_at(&self, x: f64, y: f64, hue_shift: f64, shade: f64) -> Option<Hsv> {
        let size = f64::from(self.size);
        if !(0.0..size).contains(&x) || !(0.0..size).contains(&y) {
            return None;
        }

        let radius = self.radius();
        if radius <= 0.0 {
            return None;
        }

        let dx = x - self.center();
        let dy = y - self.center();
        let r = dx.hypot(dy);
        if r > radius {
            return None;
        }

        let angle = (dy.atan2(dx) + PI) / (2.0 * PI);
        Some(Hsv::new(angle + hue_shift, (r / radius).min(1.0), shade))
    }

    /// Render the wheel. Pixels outside the disc are black.
    pub fn render(&self, hue_shift: f64, shade: f64, depth: ColorDepth) -> RgbImage {
        log::debug!(
            "Rendering {}px wheel (hue shift {:.3}, shade {:.3}, {} levels)",
            self.size,
            hue_shift,
            shade,
            depth.levels()
        );

        RgbImage::from_fn(self.size, self.size, |x, y| {
            match self.hsv_at(f64::from(x), f64::from(y), hue_shift, shade) {
                Some(hsv) => Pixel(hsv.to_rgb_at(depth).to_array()),
                None => Pixel([0, 0, 0]),
            }
        })
    }
}
