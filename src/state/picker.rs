//! Picker state and the transitions driven by UI events.

use huewheel_color::{ColorDepth, GradientParams, GradientSpec, Hsv, Rgb, hex_to_rgb, wrap_hue};

use crate::state::selection::{Focus, PickedColor, Selection};

/// Complete state of one picker window.
///
/// Hue shift and fine hue are stored in turns and shades as fractions; the
/// message layer converts from slider units.
#[derive(Debug, Clone, PartialEq)]
pub struct PickerState {
    /// Rotation of the wheel, in turns
    pub hue_shift: f64,
    /// Global brightness, `0.0..=1.0`
    pub shade: f64,
    /// Whether the current selection is pinned
    pub locked: bool,
    /// Which panel drives the readout
    pub focus: Focus,
    /// Gradient square under the pointer
    pub hovered_square: Option<u32>,
    /// Picked color, if any
    pub selection: Selection,
    /// Gradient controls
    pub gradient: GradientParams,
    /// Color depth applied to everything shown
    pub depth: ColorDepth,
}

impl Default for PickerState {
    fn default() -> Self {
        Self {
            hue_shift: 0.0,
            shade: 1.0,
            locked: false,
            focus: Focus::Wheel,
            hovered_square: None,
            selection: Selection::None,
            gradient: GradientParams::default(),
            depth: ColorDepth::FULL,
        }
    }
}

impl PickerState {
    /// Fresh state with default controls.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state with the given gradient controls and depth.
    pub fn with_defaults(gradient: GradientParams, depth: ColorDepth) -> Self {
        Self {
            gradient: gradient.clamped(),
            depth,
            ..Self::default()
        }
    }

    /// Start and end colors of the gradient.
    ///
    /// With a picked color the gradient runs from it to its complement;
    /// otherwise from the fully saturated base hue of the wheel.
    pub fn endpoints_hsv(&self) -> (Hsv, Hsv) {
        let start = match self.selection.picked() {
            Some(picked) => picked.hsv,
            None => Hsv::new(self.hue_shift, 1.0, self.shade),
        };
        (start, start.opposite())
    }

    /// The gradient as currently configured.
    pub fn gradient_spec(&self) -> GradientSpec {
        let (start, end) = self.endpoints_hsv();
        GradientSpec::new(start, end, &self.gradient, self.shade, self.depth)
    }

    /// Move the hue and shade sliders.
    ///
    /// A picked color rotates with the wheel and takes on the new shade.
    pub fn set_hue_and_shade(&mut self, hue_shift: f64, shade: f64) {
        let shade = shade.clamp(0.0, 1.0);
        let delta = hue_shift - self.hue_shift;
        self.hue_shift = wrap_hue(hue_shift);
        self.shade = shade;

        if let Selection::Picked(picked) = &mut self.selection {
            *picked = PickedColor::from_hsv(Hsv::new(picked.hsv.h + delta, picked.hsv.s, shade));
        }
    }

    /// Set the number of gradient steps.
    pub fn set_steps(&mut self, steps: u32) {
        self.gradient.steps = steps.clamp(GradientParams::MIN_STEPS, GradientParams::MAX_STEPS);
        self.focus_middle_if_unfocused();
    }

    /// Set the gradient curve.
    pub fn set_curve(&mut self, curve: f64) {
        self.gradient.curve = curve.clamp(-GradientParams::CURVE_LIMIT, GradientParams::CURVE_LIMIT);
        self.focus_middle_if_unfocused();
    }

    /// Set the fine-tune controls: start and end shade multipliers and the
    /// end hue offset in turns.
    pub fn set_fine_tune(&mut self, fine_shade1: f64, fine_shade2: f64, fine_hue2: f64) {
        self.gradient = GradientParams {
            fine_shade1,
            fine_shade2,
            fine_hue2,
            ..self.gradient
        }
        .clamped();
        self.focus_middle_if_unfocused();
    }

    /// Set the color depth.
    pub fn set_depth(&mut self, depth: ColorDepth) {
        self.depth = depth;
    }

    /// Pick a color typed as RGB and lock onto it.
    pub fn set_color_from_rgb(&mut self, rgb: Rgb) {
        self.selection = Selection::Picked(PickedColor::from_rgb(rgb));
        self.locked = true;
        self.focus = Focus::Wheel;
    }

    /// Pick a color typed as hex. Malformed input leaves the state untouched.
    pub fn set_color_from_hex(&mut self, hex: &str) -> bool {
        match hex_to_rgb(hex) {
            Some(rgb) => {
                self.set_color_from_rgb(rgb);
                true
            }
            None => {
                log::debug!("Ignoring malformed hex entry {:?}", hex);
                false
            }
        }
    }

    /// The pointer moved over the wheel; `hsv` is the color under it, `None`
    /// outside the disc.
    ///
    /// Returns whether the selection changed. A locked picker ignores hover.
    pub fn hover_wheel(&mut self, hsv: Option<Hsv>) -> bool {
        self.hovered_square = None;
        if self.locked {
            return false;
        }

        match hsv {
            Some(hsv) => {
                self.selection = Selection::Picked(PickedColor::from_hsv(hsv));
                self.focus = Focus::Wheel;
                true
            }
            None => false,
        }
    }

    /// The pointer moved over gradient square `idx`.
    ///
    /// Returns whether the readout should show that square. A lock on the
    /// wheel ignores square hover; a lock on a square keeps its focus but
    /// still previews the hovered one.
    pub fn hover_square(&mut self, idx: u32) -> bool {
        self.hovered_square = Some(idx);
        if !self.locked {
            self.focus = Focus::Square(idx);
            return true;
        }
        self.focus != Focus::Wheel
    }

    /// Gradient square `idx` was clicked.
    ///
    /// Clicking the locked square unlocks; clicking any other square locks
    /// onto it.
    pub fn click_square(&mut self, idx: u32) {
        self.hovered_square = Some(idx);
        if self.locked && self.focus == Focus::Square(idx) {
            self.locked = false;
            self.focus = Focus::Wheel;
        } else {
            self.locked = true;
            self.focus = Focus::Square(idx);
        }
    }

    /// The wheel was clicked: toggle the lock.
    ///
    /// If a square is still recorded as hovered, locking pins that square.
    pub fn toggle_lock(&mut self) {
        self.locked = !self.locked;
        self.focus = match (self.locked, self.hovered_square) {
            (true, Some(idx)) => Focus::Square(idx),
            _ => Focus::Wheel,
        };
    }

    /// Gradient index the readout shows after a recompute: the focused
    /// square, else the first one, which is the picked color itself.
    ///
    /// Always a valid index for the current step count.
    pub fn readout_index(&self) -> u32 {
        let steps = self.gradient.steps.max(1);
        match self.focus {
            Focus::Square(idx) => idx.min(steps - 1),
            Focus::Wheel => 0,
        }
    }

    /// Gradient controls follow the middle square unless one is focused.
    fn focus_middle_if_unfocused(&mut self) {
        if self.focus == Focus::Wheel {
            self.focus = Focus::Square(self.gradient.steps / 2);
        }
    }
}
