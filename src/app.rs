//! Huewheel application controller.
//!
//! [`PickerApp`] owns the picker state and everything derived from it:
//! - the gradient view (colors, names, readout), rebuilt on a debounce
//! - the color namer shared with any front-end thread
//! - the palette format registry used for export
//!
//! A front-end feeds it [`Message`]s, redraws what the returned [`Update`]
//! asks for and calls [`PickerApp::poll`] from its event loop so debounced
//! recomputes eventually run.

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use huewheel_color::{ColorDepth, ColorInfo, ColorNamer, GradientColor, Rgb, Swatch};
use image::RgbImage;
use web_time::Instant;

use crate::config::AppConfig;
use crate::constants::{FINE_HUE_SLIDER_DEGREES, HUE_SLIDER_DEGREES, SHADE_SLIDER_PERCENT};
use crate::debounce::RecomputeDebouncer;
use crate::format::{
    ExportOptions, ExportResult, FormatError, FormatRegistry, PaletteData, PaletteEntry,
};
use crate::message::Message;
use crate::state::{Focus, PickerState};
use crate::wheel::WheelGeometry;

// ============================================================================
// Update results
// ============================================================================

/// What happened to the hover tooltip.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Hover {
    /// Leave the tooltip as it is
    #[default]
    Unchanged,
    /// Hide the tooltip
    Clear,
    /// Show this text
    Show(String),
}

/// What the front-end must redraw after a message.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Update {
    /// New readout text, if it changed
    pub readout: Option<ColorInfo>,
    /// Tooltip change
    pub hover: Hover,
    /// The wheel bitmap is stale
    pub redraw_wheel: bool,
    /// A gradient recompute is pending
    pub recompute_scheduled: bool,
}

// ============================================================================
// Gradient view
// ============================================================================

/// The computed gradient as shown in the squares panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GradientView {
    /// Colors in gradient order
    pub colors: Vec<GradientColor>,
    /// Hex, RGB and name for each color
    pub swatches: Vec<Swatch>,
    /// Readout shown after the recompute
    pub readout: Option<ColorInfo>,
    /// First and last color
    pub endpoints: Option<(Swatch, Swatch)>,
}

impl GradientView {
    /// Number of squares.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Check if the gradient is empty.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// RGB values in order.
    pub fn rgb_sequence(&self) -> Vec<Rgb> {
        self.colors.iter().map(|c| c.rgb).collect()
    }

    /// Text listing, one `<hex> (<r>, <g>, <b>) <name>` line per color.
    pub fn listing(&self) -> String {
        self.swatches
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// Compact `<first> -> <last>` summary of the gradient.
    pub fn endpoint_line(&self) -> Option<String> {
        let (first, last) = self.endpoints.as_ref()?;
        Some(format!("{} {} -> {} {}", first.hex, first.name, last.hex, last.name))
    }

    /// Palette for export.
    pub fn to_palette(&self, name: impl Into<String>) -> PaletteData {
        PaletteData {
            name: name.into(),
            entries: self
                .swatches
                .iter()
                .map(|s| PaletteEntry::new(s.rgb, s.name))
                .collect(),
        }
    }
}

// ============================================================================
// Application
// ============================================================================

/// Main application state.
pub struct PickerApp {
    state: PickerState,
    namer: Arc<ColorNamer>,
    debouncer: RecomputeDebouncer,
    formats: FormatRegistry,
    wheel: WheelGeometry,
    view: GradientView,
    /// Number of gradient rebuilds so far
    recomputes: u64,
}

impl Default for PickerApp {
    fn default() -> Self {
        Self::new()
    }
}

impl PickerApp {
    /// Create an application with default settings.
    pub fn new() -> Self {
        Self::from_config(&AppConfig::default())
    }

    /// Create an application from loaded configuration.
    pub fn from_config(config: &AppConfig) -> Self {
        let prefs = &config.preferences;
        let state = PickerState::with_defaults(config.gradient, ColorDepth::new(prefs.color_depth));

        Self::build(
            state,
            Arc::new(ColorNamer::new()),
            RecomputeDebouncer::with_delay(Duration::from_millis(prefs.debounce_ms)),
            WheelGeometry::new(prefs.wheel_size),
        )
    }

    /// Create an application sharing an existing namer.
    pub fn with_namer(namer: Arc<ColorNamer>) -> Self {
        Self::build(
            PickerState::default(),
            namer,
            RecomputeDebouncer::new(),
            WheelGeometry::new(crate::constants::DEFAULT_WHEEL_SIZE),
        )
    }

    fn build(
        state: PickerState,
        namer: Arc<ColorNamer>,
        debouncer: RecomputeDebouncer,
        wheel: WheelGeometry,
    ) -> Self {
        let mut app = Self {
            state,
            namer,
            debouncer,
            formats: FormatRegistry::new(),
            wheel,
            view: GradientView::default(),
            recomputes: 0,
        };
        app.recompute_now();
        app
    }

    /// Current picker state.
    pub fn state(&self) -> &PickerState {
        &self.state
    }

    /// The gradient as of the last recompute.
    pub fn view(&self) -> &GradientView {
        &self.view
    }

    /// The shared color namer.
    pub fn namer(&self) -> &Arc<ColorNamer> {
        &self.namer
    }

    /// Available palette formats.
    pub fn formats(&self) -> &FormatRegistry {
        &self.formats
    }

    /// Wheel geometry.
    pub fn wheel(&self) -> WheelGeometry {
        self.wheel
    }

    /// Number of gradient rebuilds so far.
    pub fn recompute_count(&self) -> u64 {
        self.recomputes
    }

    /// Check if a recompute is waiting on the debounce.
    pub fn is_recompute_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Handle a message.
    pub fn update(&mut self, message: Message) -> Update {
        self.update_at(message, Instant::now())
    }

    /// Handle a message received at `now`.
    pub fn update_at(&mut self, message: Message, now: Instant) -> Update {
        let mut update = Update::default();

        match message {
            // Wheel controls
            Message::HueShade {
                hue_degrees,
                shade_percent,
            } => {
                self.state.set_hue_and_shade(
                    hue_degrees / HUE_SLIDER_DEGREES,
                    shade_percent / SHADE_SLIDER_PERCENT,
                );
                update.redraw_wheel = true;
                update.readout = match self.state.focus {
                    Focus::Wheel => self.selection_info(),
                    Focus::Square(_) => Some(self.focused_readout()),
                };
                self.schedule_recompute(&mut update, now);
            }
            Message::WheelHovered { x, y } => {
                let hsv = self
                    .wheel
                    .hsv_at(x, y, self.state.hue_shift, self.state.shade);
                if self.state.hover_wheel(hsv) {
                    let info = self.selection_info();
                    update.hover = match &info {
                        Some(info) => Hover::Show(format!("{}\n{}", info.color, info.opposite)),
                        None => Hover::Clear,
                    };
                    update.readout = info;
                    self.schedule_recompute(&mut update, now);
                } else if !self.state.locked {
                    update.hover = Hover::Clear;
                }
            }
            Message::WheelClicked => {
                self.state.toggle_lock();
                log::debug!(
                    "Selection {}",
                    if self.state.locked { "locked" } else { "unlocked" }
                );
            }

            // Gradient controls
            Message::Steps(steps) => {
                self.state.set_steps(steps);
                update.readout = Some(self.focused_readout());
                self.schedule_recompute(&mut update, now);
            }
            Message::Curve(curve) => {
                self.state.set_curve(curve);
                update.readout = Some(self.focused_readout());
                self.schedule_recompute(&mut update, now);
            }
            Message::FineTune {
                start_shade_percent,
                end_shade_percent,
                end_hue_degrees,
            } => {
                self.state.set_fine_tune(
                    start_shade_percent / SHADE_SLIDER_PERCENT,
                    end_shade_percent / SHADE_SLIDER_PERCENT,
                    end_hue_degrees / (2.0 * FINE_HUE_SLIDER_DEGREES),
                );
                update.readout = Some(self.focused_readout());
                self.schedule_recompute(&mut update, now);
            }
            Message::ColorDepth(levels) => {
                self.state.set_depth(ColorDepth::new(levels));
                update.redraw_wheel = true;
                self.schedule_recompute(&mut update, now);
            }

            // Color entry
            Message::RgbEntered { r, g, b } => match Rgb::from_entries(&r, &g, &b) {
                Some(rgb) => self.pick_entered(rgb, &mut update, now),
                None => log::debug!("Ignoring invalid RGB entry ({r:?}, {g:?}, {b:?})"),
            },
            Message::HexEntered(hex) => {
                if self.state.set_color_from_hex(&hex) {
                    update.readout = self.selection_info();
                    update.hover = Hover::Clear;
                    self.schedule_recompute(&mut update, now);
                }
            }

            // Gradient squares
            Message::SquareHovered(idx) => {
                if !self.has_square(idx) {
                    return update;
                }
                if self.state.hover_square(idx) {
                    let info = self.square_info(idx);
                    update.hover = Hover::Show(info.color.to_string());
                    update.readout = Some(info);
                }
            }
            Message::SquareClicked(idx) => {
                if !self.has_square(idx) {
                    return update;
                }
                self.state.click_square(idx);
                let info = self.square_info(idx);
                update.hover = Hover::Show(info.color.to_string());
                update.readout = Some(info);
            }
        }

        update
    }

    /// Run the pending recompute if it is due.
    ///
    /// Returns the refreshed view when a recompute ran.
    pub fn poll(&mut self) -> Option<&GradientView> {
        self.poll_at(Instant::now())
    }

    /// Run the pending recompute if it is due at `now`.
    pub fn poll_at(&mut self, now: Instant) -> Option<&GradientView> {
        self.debouncer.take_due_at(now)?;
        self.recompute_now();
        Some(&self.view)
    }

    /// Rebuild the gradient view immediately, dropping any pending request.
    pub fn recompute_now(&mut self) -> &GradientView {
        self.debouncer.cancel();

        let spec = self.state.gradient_spec();
        let colors = spec.colors();
        let swatches = colors
            .iter()
            .map(|c| Swatch::describe(c.rgb, &self.namer))
            .collect();

        let readout_idx = self.state.readout_index() as usize;
        let readout = colors
            .get(readout_idx)
            .map(|c| ColorInfo::from_gradient(c, &self.namer));

        let (first, last) = spec.endpoints();
        let endpoints = Some((
            Swatch::describe(first.rgb, &self.namer),
            Swatch::describe(last.rgb, &self.namer),
        ));

        self.view = GradientView {
            colors,
            swatches,
            readout,
            endpoints,
        };
        self.recomputes += 1;
        log::debug!(
            "Gradient recomputed: {} colors, readout square {}",
            self.view.len(),
            readout_idx
        );
        &self.view
    }

    /// Render the wheel bitmap for the current hue, shade and depth.
    pub fn render_wheel(&self) -> RgbImage {
        self.wheel
            .render(self.state.hue_shift, self.state.shade, self.state.depth)
    }

    /// Export the gradient as a palette.
    ///
    /// `path` is `None` when the user cancelled the save dialog. Any pending
    /// recompute runs first so the file matches the squares on screen. The
    /// palette is named after the file.
    pub fn export(
        &mut self,
        path: Option<&Path>,
        format_id: &str,
    ) -> Result<Option<ExportResult>, FormatError> {
        let Some(path) = path else {
            log::info!("Export cancelled");
            return Ok(None);
        };

        if self.debouncer.flush().is_some() {
            self.recompute_now();
        }

        let format = self.formats.require(format_id)?;
        let palette = self.view.to_palette(PaletteData::name_from_path(path));
        let options = ExportOptions::new().append_extension(true);
        format.export(&palette, path, &options).map(Some)
    }

    fn schedule_recompute(&mut self, update: &mut Update, now: Instant) {
        self.debouncer.schedule_at(now);
        update.recompute_scheduled = true;
    }

    fn pick_entered(&mut self, rgb: Rgb, update: &mut Update, now: Instant) {
        self.state.set_color_from_rgb(rgb);
        update.readout = self.selection_info();
        update.hover = Hover::Clear;
        self.schedule_recompute(update, now);
    }

    /// Readout for the picked color at the current depth.
    fn selection_info(&self) -> Option<ColorInfo> {
        let picked = self.state.selection.picked()?;
        let depth = self.state.depth;
        Some(ColorInfo::describe(
            picked.display_rgb(depth),
            picked.opposite().to_rgb_at(depth),
            &self.namer,
        ))
    }

    /// Readout for the square the gradient controls follow, from the live
    /// state rather than the possibly stale view.
    fn focused_readout(&self) -> ColorInfo {
        let color = self.state.gradient_spec().color_at(self.state.readout_index());
        ColorInfo::from_gradient(&color, &self.namer)
    }

    /// Readout for square `idx` as drawn. While a recompute is pending this
    /// is the previous gradient, matching the squares on screen.
    fn square_info(&self, idx: u32) -> ColorInfo {
        match self.view.colors.get(idx as usize) {
            Some(color) => ColorInfo::from_gradient(color, &self.namer),
            None => self.focused_readout(),
        }
    }

    fn has_square(&self, idx: u32) -> bool {
        (idx as usize) < self.view.len()
    }

    /// Which panel the readout follows.
    pub fn focus(&self) -> Focus {
        self.state.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::RECOMPUTE_DEBOUNCE;
    use huewheel_color::GradientParams;

    fn rgb_message(r: &str, g: &str, b: &str) -> Message {
        Message::RgbEntered {
            r: r.to_string(),
            g: g.to_string(),
            b: b.to_string(),
        }
    }

    /// Process `message` and let the debounce elapse.
    fn settle(app: &mut PickerApp, message: Message) -> Update {
        let now = Instant::now();
        let update = app.update_at(message, now);
        app.poll_at(now + RECOMPUTE_DEBOUNCE);
        update
    }

    #[test]
    fn test_initial_gradient() {
        let app = PickerApp::new();
        let view = app.view();

        assert_eq!(view.len(), GradientParams::DEFAULT_STEPS as usize);
        assert_eq!(view.colors[0].rgb, Rgb::new(255, 0, 0));
        assert_eq!(view.colors[19].rgb, Rgb::new(0, 255, 255));
        assert_eq!(app.recompute_count(), 1);
    }

    #[test]
    fn test_recompute_waits_for_debounce() {
        let mut app = PickerApp::new();
        let now = Instant::now();

        let update = app.update_at(Message::Steps(5), now);
        assert!(update.recompute_scheduled);
        assert!(app.poll_at(now).is_none());
        assert_eq!(app.view().len(), 20);

        let view = app.poll_at(now + RECOMPUTE_DEBOUNCE).unwrap();
        assert_eq!(view.len(), 5);
        assert!(app.poll_at(now + RECOMPUTE_DEBOUNCE * 2).is_none());
    }

    #[test]
    fn test_slider_burst_recomputes_once() {
        let mut app = PickerApp::new();
        let start = Instant::now();

        for (i, curve) in [10.0, 20.0, 30.0, 40.0].into_iter().enumerate() {
            app.update_at(Message::Curve(curve), start + Duration::from_millis(10 * i as u64));
        }
        assert!(app.poll_at(start + Duration::from_millis(60)).is_none());
        assert!(app.poll_at(start + Duration::from_millis(80)).is_some());
        assert_eq!(app.recompute_count(), 2);
        assert_eq!(app.state().gradient.curve, 40.0);
    }

    #[test]
    fn test_rgb_entry_readout() {
        let mut app = PickerApp::new();
        let update = settle(&mut app, rgb_message("255", "0", "0"));

        assert!(app.state().locked);
        assert_eq!(
            update.readout.unwrap().readout(),
            "Colour: #ff0000 (255, 0, 0) red\nOpposite: #00ffff (0, 255, 255) cyan"
        );
        assert_eq!(app.view().colors[0].rgb, Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_invalid_rgb_entry_ignored() {
        let mut app = PickerApp::new();
        let update = app.update(rgb_message("300", "0", "0"));

        assert_eq!(update, Update::default());
        assert!(app.state().selection.picked().is_none());
        assert!(!app.is_recompute_pending());
    }

    #[test]
    fn test_hex_entry() {
        let mut app = PickerApp::new();
        let update = app.update(Message::HexEntered("#00FF00".to_string()));
        assert_eq!(update.readout.unwrap().color.name, "lime");

        let update = app.update(Message::HexEntered("zzz".to_string()));
        assert_eq!(update, Update::default());
    }

    #[test]
    fn test_wheel_hover_picks_color() {
        let mut app = PickerApp::new();
        let update = app.update(Message::WheelHovered { x: 2.0, y: 150.0 });

        let info = update.readout.unwrap();
        assert_eq!(info.color.rgb, Rgb::new(255, 0, 0));
        assert_eq!(
            update.hover,
            Hover::Show("#ff0000 (255, 0, 0) red\n#00ffff (0, 255, 255) cyan".to_string())
        );
        assert!(update.recompute_scheduled);
    }

    #[test]
    fn test_wheel_hover_outside_clears_tooltip() {
        let mut app = PickerApp::new();
        let update = app.update(Message::WheelHovered { x: 0.0, y: 0.0 });
        assert_eq!(update.hover, Hover::Clear);
        assert!(update.readout.is_none());
    }

    #[test]
    fn test_locked_wheel_ignores_hover() {
        let mut app = PickerApp::new();
        app.update(Message::WheelHovered { x: 2.0, y: 150.0 });
        app.update(Message::WheelClicked);
        assert!(app.state().locked);

        let update = app.update(Message::WheelHovered { x: 298.0, y: 150.0 });
        assert_eq!(update, Update::default());
        let picked = app.state().selection.picked().unwrap();
        assert_eq!(picked.hsv.to_rgb(), Rgb::new(255, 0, 0));
    }

    #[test]
    fn test_square_hover_and_click() {
        let mut app = PickerApp::new();
        let update = app.update(Message::SquareHovered(19));
        let info = update.readout.unwrap();
        assert_eq!(info.color.rgb, Rgb::new(0, 255, 255));
        assert_eq!(
            update.hover,
            Hover::Show("#00ffff (0, 255, 255) cyan".to_string())
        );

        app.update(Message::SquareClicked(19));
        assert!(app.state().locked);
        assert_eq!(app.focus(), Focus::Square(19));

        app.update(Message::SquareClicked(19));
        assert!(!app.state().locked);
    }

    #[test]
    fn test_square_hover_reads_drawn_gradient_while_pending() {
        let mut app = PickerApp::new();
        let now = Instant::now();
        app.update_at(Message::Steps(5), now);
        assert!(app.is_recompute_pending());

        // Square 10 only exists in the 20-square gradient still on screen
        let update = app.update_at(Message::SquareHovered(10), now);
        let expected = ColorInfo::from_gradient(&app.view().colors[10], app.namer());
        assert_eq!(update.readout, Some(expected));

        app.poll_at(now + RECOMPUTE_DEBOUNCE);
        assert_eq!(app.update(Message::SquareHovered(10)), Update::default());
    }

    #[test]
    fn test_square_out_of_range_ignored() {
        let mut app = PickerApp::new();
        assert_eq!(app.update(Message::SquareHovered(20)), Update::default());
        assert_eq!(app.update(Message::SquareClicked(99)), Update::default());
        assert!(!app.state().locked);
    }

    #[test]
    fn test_steps_readout_follows_middle_square() {
        let mut app = PickerApp::new();
        app.update(rgb_message("255", "0", "0"));
        let update = app.update(Message::Steps(3));

        // Middle of red -> cyan takes the short way round through 0.75
        let info = update.readout.unwrap();
        assert_eq!(info.color.rgb, Rgb::new(127, 0, 255));
        assert_eq!(app.focus(), Focus::Square(1));
    }

    #[test]
    fn test_hue_slider_rotates_selection() {
        let mut app = PickerApp::new();
        settle(&mut app, rgb_message("255", "0", "0"));
        let update = settle(
            &mut app,
            Message::HueShade {
                hue_degrees: 180.0,
                shade_percent: 100.0,
            },
        );

        assert!(update.redraw_wheel);
        assert_eq!(app.view().colors[0].rgb, Rgb::new(0, 255, 255));
    }

    #[test]
    fn test_hue_slider_updates_readout() {
        let mut app = PickerApp::new();
        settle(&mut app, Message::HexEntered("#ff0000".to_string()));
        let update = app.update(Message::HueShade {
            hue_degrees: 120.0,
            shade_percent: 100.0,
        });

        let info = update.readout.unwrap();
        assert_eq!(info.color.rgb, Rgb::new(0, 255, 0));
        assert_eq!(info.color.name, "lime");
    }

    #[test]
    fn test_hue_slider_readout_follows_focused_square() {
        let mut app = PickerApp::new();
        settle(&mut app, Message::Steps(2));
        app.update(Message::SquareClicked(1));

        let update = app.update(Message::HueShade {
            hue_degrees: 180.0,
            shade_percent: 100.0,
        });
        // The base hue is now cyan, so the last square is its complement
        assert_eq!(update.readout.unwrap().color.rgb, Rgb::new(255, 0, 0));
        assert_eq!(app.focus(), Focus::Square(1));
    }

    #[test]
    fn test_wheel_hover_readout_survives_recompute() {
        let mut app = PickerApp::new();
        let now = Instant::now();
        let update = app.update_at(Message::WheelHovered { x: 2.0, y: 150.0 }, now);
        let hovered = update.readout.unwrap();
        assert_eq!(hovered.color.rgb, Rgb::new(255, 0, 0));

        let view = app.poll_at(now + RECOMPUTE_DEBOUNCE).unwrap();
        assert_eq!(view.readout.as_ref(), Some(&hovered));
    }

    #[test]
    fn test_fine_tune_units() {
        let mut app = PickerApp::new();
        app.update(Message::FineTune {
            start_shade_percent: 50.0,
            end_shade_percent: 100.0,
            end_hue_degrees: 90.0,
        });

        let gradient = app.state().gradient;
        assert_eq!(gradient.fine_shade1, 0.5);
        assert_eq!(gradient.fine_shade2, 1.0);
        assert_eq!(gradient.fine_hue2, 0.25);
    }

    #[test]
    fn test_color_depth_quantizes_view() {
        let mut app = PickerApp::new();
        let update = settle(&mut app, Message::ColorDepth(2));

        assert!(update.redraw_wheel);
        for rgb in app.view().rgb_sequence() {
            for channel in rgb.to_array() {
                assert!(channel == 0 || channel == 255, "channel {channel}");
            }
        }
    }

    #[test]
    fn test_listing() {
        let mut app = PickerApp::new();
        settle(&mut app, Message::Steps(2));
        assert_eq!(
            app.view().listing(),
            "#ff0000 (255, 0, 0) red\n#00ffff (0, 255, 255) cyan"
        );
        assert_eq!(
            app.view().endpoint_line().as_deref(),
            Some("#ff0000 red -> #00ffff cyan")
        );
    }

    #[test]
    fn test_export_cancelled() {
        let mut app = PickerApp::new();
        assert!(app.export(None, "gpl").unwrap().is_none());
    }

    #[test]
    fn test_export_flushes_pending_recompute() {
        let dir = std::env::temp_dir().join(format!("huewheel-app-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("mypalette.gpl");

        let mut app = PickerApp::new();
        app.update(rgb_message("255", "0", "0"));
        app.update(Message::Steps(2));
        assert!(app.is_recompute_pending());

        let result = app.export(Some(&path), "gpl").unwrap().unwrap();
        assert_eq!(result.colors_exported, 2);
        assert!(!app.is_recompute_pending());

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "GIMP Palette\nName: mypalette\n#\n255   0   0 red\n  0 255 255 cyan"
        );

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_unknown_format() {
        let path = std::env::temp_dir().join("huewheel-never-written.xyz");
        let mut app = PickerApp::new();
        let err = app.export(Some(&path), "aco").unwrap_err();
        assert!(matches!(err, FormatError::UnknownFormat { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_shared_namer() {
        let namer = Arc::new(ColorNamer::new());
        let app = PickerApp::with_namer(Arc::clone(&namer));
        assert!(Arc::ptr_eq(app.namer(), &namer));
        assert!(namer.cached_len() > 0);
    }

    #[test]
    fn test_render_wheel_size() {
        let app = PickerApp::new();
        let image = app.render_wheel();
        assert_eq!(image.dimensions(), (app.wheel().size(), app.wheel().size()));
    }
}
