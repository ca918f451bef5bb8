//! Two-point gradient engine.
//!
//! A gradient runs from a start color to an end color (usually its
//! complement) in a fixed number of steps. Interpolation takes the shorter
//! way around the hue circle, the value channel of each endpoint is the global
//! shade times a per-endpoint fine shade, and a power-law curve biases the
//! samples toward one end.
//!
//! Everything here is a pure function of its inputs. Live preview, the
//! endpoint readout and palette export all go through
//! [`GradientSpec::color_at`], so what is exported is exactly what was shown.

use serde::{Deserialize, Serialize};

use crate::convert::{Hsv, Rgb, wrap_hue};
use crate::depth::ColorDepth;

/// User-tunable gradient parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradientParams {
    /// Number of colors in the gradient
    pub steps: u32,
    /// Curve bias in `-100.0..=100.0`; positive favours the end color
    pub curve: f64,
    /// Value multiplier for the start color
    pub fine_shade1: f64,
    /// Value multiplier for the end color
    pub fine_shade2: f64,
    /// Hue offset added to the end color, in turns (`-0.5..=0.5`)
    pub fine_hue2: f64,
}

impl GradientParams {
    /// Default number of steps.
    pub const DEFAULT_STEPS: u32 = 20;
    /// Fewest steps offered by the steps control.
    pub const MIN_STEPS: u32 = 2;
    /// Most steps offered by the steps control.
    pub const MAX_STEPS: u32 = 50;
    /// Magnitude limit of the curve parameter.
    pub const CURVE_LIMIT: f64 = 100.0;
    /// Largest fine shade multiplier accepted.
    pub const MAX_FINE_SHADE: f64 = 2.0;

    /// Copy with every field clamped into its accepted range.
    ///
    /// `steps` keeps a floor of 1; a single-step gradient is degenerate but
    /// well defined.
    pub fn clamped(self) -> Self {
        Self {
            steps: self.steps.clamp(1, Self::MAX_STEPS),
            curve: self.curve.clamp(-Self::CURVE_LIMIT, Self::CURVE_LIMIT),
            fine_shade1: self.fine_shade1.clamp(0.0, Self::MAX_FINE_SHADE),
            fine_shade2: self.fine_shade2.clamp(0.0, Self::MAX_FINE_SHADE),
            fine_hue2: self.fine_hue2.clamp(-0.5, 0.5),
        }
    }
}

impl Default for GradientParams {
    fn default() -> Self {
        Self {
            steps: Self::DEFAULT_STEPS,
            curve: 0.0,
            fine_shade1: 1.0,
            fine_shade2: 1.0,
            fine_hue2: 0.0,
        }
    }
}

/// Power-law easing of the interpolation parameter.
///
/// With `c = curve / 100`: `c > 0` maps `t` to `t^(1/(1+2c))`, pulling samples
/// toward the end color; `c < 0` maps it to `t^(1-2c)`, pulling them toward the
/// start. `0` and `1` are fixed points for every curve.
pub fn curve_warp(t: f64, curve: f64) -> f64 {
    let c = curve / 100.0;
    if c == 0.0 {
        t
    } else if c > 0.0 {
        t.powf(1.0 / (1.0 + 2.0 * c))
    } else {
        t.powf(1.0 - 2.0 * c)
    }
}

/// Start and end colors with their fine-tune adjustments.
///
/// Built fresh from application state for every recomputation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientEndpoints {
    /// Start color; its value channel is replaced by the shaded value
    pub start: Hsv,
    /// End color; its value channel is replaced by the shaded value
    pub end: Hsv,
    /// Value multiplier for the start color
    pub fine_shade1: f64,
    /// Value multiplier for the end color
    pub fine_shade2: f64,
    /// Hue offset applied to the end color only
    pub fine_hue_offset: f64,
}

impl GradientEndpoints {
    /// Endpoints using the fine-tune values of `params`.
    pub fn new(start: Hsv, end: Hsv, params: &GradientParams) -> Self {
        Self {
            start,
            end,
            fine_shade1: params.fine_shade1,
            fine_shade2: params.fine_shade2,
            fine_hue_offset: params.fine_hue2,
        }
    }

    /// Start and end after applying the global shade and fine tuning.
    ///
    /// The value of each endpoint is `shade * fine_shade`, deliberately
    /// unclamped; the RGB conversion saturates.
    pub fn resolve(&self, shade: f64) -> (Hsv, Hsv) {
        let start = Hsv {
            v: shade * self.fine_shade1,
            ..self.start
        };
        let end = Hsv {
            h: wrap_hue(self.end.h + self.fine_hue_offset),
            s: self.end.s,
            v: shade * self.fine_shade2,
        };
        (start, end)
    }
}

/// One computed gradient color with its metadata.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientColor {
    /// Position in the gradient
    pub index: u32,
    /// Interpolation parameter after curve warping
    pub t: f64,
    /// Interpolated color
    pub hsv: Hsv,
    /// `hsv` converted and quantized
    pub rgb: Rgb,
    /// Complement of `hsv`, converted and quantized at the same depth
    pub opposite: Rgb,
}

/// A fully specified gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientSpec {
    endpoints: GradientEndpoints,
    steps: u32,
    curve: f64,
    shade: f64,
    depth: ColorDepth,
}

impl GradientSpec {
    /// Gradient from `start` to `end` under `params`, at global `shade` and
    /// color `depth`. A step count of 0 is treated as 1.
    pub fn new(start: Hsv, end: Hsv, params: &GradientParams, shade: f64, depth: ColorDepth) -> Self {
        Self {
            endpoints: GradientEndpoints::new(start, end, params),
            steps: params.steps.max(1),
            curve: params.curve,
            shade,
            depth,
        }
    }

    /// Color at position `idx`.
    pub fn color_at(&self, idx: u32) -> GradientColor {
        let (start, end) = self.endpoints.resolve(self.shade);

        let t = if self.steps > 1 {
            f64::from(idx) / f64::from(self.steps - 1)
        } else {
            0.0
        };
        let tc = curve_warp(t, self.curve);

        // Signed shortest distance around the hue circle, in [-0.5, 0.5)
        let dh = (end.h - start.h + 1.5).rem_euclid(1.0) - 0.5;

        let hsv = Hsv::new(
            start.h + tc * dh,
            start.s + tc * (end.s - start.s),
            start.v + tc * (end.v - start.v),
        );

        GradientColor {
            index: idx,
            t: tc,
            hsv,
            rgb: hsv.to_rgb_at(self.depth),
            opposite: hsv.opposite().to_rgb_at(self.depth),
        }
    }

    /// Every color with metadata, start to end.
    pub fn colors(&self) -> Vec<GradientColor> {
        (0..self.steps).map(|idx| self.color_at(idx)).collect()
    }

    /// Exactly `steps` RGB colors, start to end.
    pub fn sequence(&self) -> Vec<Rgb> {
        (0..self.steps).map(|idx| self.color_at(idx).rgb).collect()
    }

    /// First and last colors, for a compact readout of the whole gradient.
    pub fn endpoints(&self) -> (GradientColor, GradientColor) {
        (self.color_at(0), self.color_at(self.steps - 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red() -> Hsv {
        Hsv::new(0.0, 1.0, 1.0)
    }

    fn spec(steps: u32, curve: f64) -> GradientSpec {
        let params = GradientParams {
            steps,
            curve,
            ..GradientParams::default()
        };
        GradientSpec::new(red(), red().opposite(), &params, 1.0, ColorDepth::FULL)
    }

    #[test]
    fn test_curve_warp_fixed_points() {
        for curve in [-100.0, -50.0, -1.0, 0.0, 1.0, 33.3, 100.0] {
            assert_eq!(curve_warp(0.0, curve), 0.0, "curve {curve}");
            assert_eq!(curve_warp(1.0, curve), 1.0, "curve {curve}");
        }
    }

    #[test]
    fn test_curve_warp_zero_is_identity() {
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            assert_eq!(curve_warp(t, 0.0), t);
        }
    }

    #[test]
    fn test_curve_warp_direction() {
        // c = 0.5 gives a square root, c = -0.5 a square
        assert!((curve_warp(0.25, 50.0) - 0.5).abs() < 1e-12);
        assert!((curve_warp(0.25, -50.0) - 0.0625).abs() < 1e-12);
        assert!(curve_warp(0.5, 100.0) > 0.5);
        assert!(curve_warp(0.5, -100.0) < 0.5);
    }

    #[test]
    fn test_red_to_cyan_two_steps() {
        let seq = spec(2, 0.0).sequence();
        assert_eq!(seq, vec![Rgb::new(255, 0, 0), Rgb::new(0, 255, 255)]);
    }

    #[test]
    fn test_exact_opposite_goes_negative_way() {
        // dh is -0.5 for an exact complement, so the midpoint hue is 0.75
        let mid = spec(3, 0.0).color_at(1);
        assert!((mid.hsv.h - 0.75).abs() < 1e-12);
        assert_eq!(mid.rgb, Rgb::new(127, 0, 255));
    }

    #[test]
    fn test_hue_takes_shorter_arc() {
        let params = GradientParams {
            steps: 3,
            ..GradientParams::default()
        };
        let start = Hsv::new(0.9, 1.0, 1.0);
        let end = Hsv::new(0.1, 1.0, 1.0);
        let mid = GradientSpec::new(start, end, &params, 1.0, ColorDepth::FULL).color_at(1);
        let dist = mid.hsv.h.min(1.0 - mid.hsv.h);
        assert!(dist < 1e-9, "midpoint hue was {}", mid.hsv.h);
    }

    #[test]
    fn test_single_step_uses_start() {
        let single = spec(1, 0.0);
        let seq = single.sequence();
        assert_eq!(seq.len(), 1);
        assert_eq!(seq[0], single.color_at(0).rgb);
        assert_eq!(seq[0], Rgb::new(255, 0, 0));
        assert_eq!(single.color_at(0).t, 0.0);
    }

    #[test]
    fn test_zero_steps_treated_as_one() {
        assert_eq!(spec(0, 0.0).sequence().len(), 1);
    }

    #[test]
    fn test_sequence_length_matches_steps() {
        for steps in [2, 3, 7, 20, 50] {
            assert_eq!(spec(steps, 25.0).sequence().len(), steps as usize);
        }
    }

    #[test]
    fn test_endpoints_match_sequence_ends() {
        let gradient = spec(9, -40.0);
        let seq = gradient.sequence();
        let (first, last) = gradient.endpoints();
        assert_eq!(first.rgb, seq[0]);
        assert_eq!(last.rgb, seq[8]);
        assert_eq!(last.index, 8);
    }

    #[test]
    fn test_fine_shade_scales_global_shade() {
        let params = GradientParams {
            steps: 2,
            fine_shade1: 0.5,
            fine_shade2: 1.0,
            ..GradientParams::default()
        };
        // Endpoint value channels are ignored in favour of shade * fine shade
        let start = Hsv::new(0.0, 1.0, 0.1);
        let gradient = GradientSpec::new(start, start.opposite(), &params, 0.8, ColorDepth::FULL);
        let (first, last) = gradient.endpoints();
        assert!((first.hsv.v - 0.4).abs() < 1e-12);
        assert!((last.hsv.v - 0.8).abs() < 1e-12);
        assert_eq!(first.rgb, Rgb::new(102, 0, 0));
    }

    #[test]
    fn test_fine_shade_above_one_saturates() {
        let params = GradientParams {
            steps: 2,
            fine_shade1: 2.0,
            ..GradientParams::default()
        };
        let gradient = GradientSpec::new(red(), red().opposite(), &params, 1.0, ColorDepth::FULL);
        assert_eq!(gradient.color_at(0).rgb, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_fine_hue_moves_end_only() {
        let params = GradientParams {
            steps: 2,
            fine_hue2: -1.0 / 6.0,
            ..GradientParams::default()
        };
        let gradient = GradientSpec::new(red(), red().opposite(), &params, 1.0, ColorDepth::FULL);
        let (first, last) = gradient.endpoints();
        assert_eq!(first.rgb, Rgb::new(255, 0, 0));
        // cyan shifted back by 60 degrees is green
        assert!((last.hsv.h - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_opposite_is_consistent_with_primary() {
        let gradient = spec(5, 30.0);
        for color in gradient.colors() {
            assert_eq!(color.opposite, color.hsv.opposite().to_rgb());
        }
    }

    #[test]
    fn test_depth_applies_to_every_color() {
        let params = GradientParams {
            steps: 6,
            ..GradientParams::default()
        };
        let depth = ColorDepth::new(4);
        let gradient = GradientSpec::new(red(), red().opposite(), &params, 1.0, depth);
        for color in gradient.colors() {
            assert_eq!(color.rgb, depth.quantize(color.hsv.to_rgb()));
            assert_eq!(color.opposite, depth.quantize(color.hsv.opposite().to_rgb()));
            for channel in color.rgb.to_array() {
                assert_eq!(channel % 85, 0);
            }
        }
    }

    #[test]
    fn test_positive_curve_moves_toward_end() {
        let linear = spec(5, 0.0).color_at(1).t;
        let biased = spec(5, 80.0).color_at(1).t;
        assert!(biased > linear);
    }

    #[test]
    fn test_params_clamped() {
        let params = GradientParams {
            steps: 500,
            curve: -250.0,
            fine_shade1: -1.0,
            fine_shade2: 3.0,
            fine_hue2: 0.9,
        }
        .clamped();
        assert_eq!(params.steps, GradientParams::MAX_STEPS);
        assert_eq!(params.curve, -100.0);
        assert_eq!(params.fine_shade1, 0.0);
        assert_eq!(params.fine_shade2, 2.0);
        assert_eq!(params.fine_hue2, 0.5);
    }

    #[test]
    fn test_params_deserialize_with_defaults() {
        let params: GradientParams = serde_json::from_str(r#"{"steps": 8}"#).unwrap();
        assert_eq!(params.steps, 8);
        assert_eq!(params.fine_shade1, 1.0);
    }
}
