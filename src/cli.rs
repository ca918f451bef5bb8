//! Command-line front-end.
//!
//! Every command drives [`PickerApp`] through the same [`Message`]s a
//! graphical front-end would send, so the terminal output matches what the
//! picker shows on screen.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use env_logger::{Builder, Target};
use huewheel_color::{ColorDepth, ColorInfo, ColorNamer, Hsv, NameTable, Rgb, Swatch, TonalSpread};

use crate::app::PickerApp;
use crate::config::{AppConfig, ConfigError, LogLevel};
use crate::constants::{HUE_SLIDER_DEGREES, MAX_WHEEL_SIZE, MIN_WHEEL_SIZE, SHADE_SLIDER_PERCENT};
use crate::format::FormatError;
use crate::message::Message;
use crate::wheel::WheelGeometry;

/// Errors reported by the command-line front-end.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Palette export failed
    #[error(transparent)]
    Format(#[from] FormatError),

    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Wheel bitmap could not be written
    #[error("Failed to write image: {0}")]
    Image(#[from] image::ImageError),

    /// Writing command output failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be printed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A color argument did not parse
    #[error("Invalid color '{0}': expected #rrggbb, r,g,b or a color name")]
    InvalidColor(String),
}

/// Interactive HSV color wheel and gradient palette builder.
#[derive(Debug, Parser)]
#[command(name = "huewheel")]
#[command(version, long_about = None)]
pub struct Cli {
    /// Increase output verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file to use instead of the default location
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Describe a color and its complement
    Info {
        /// Color as #rrggbb, r,g,b or a name
        color: String,

        /// Levels per channel
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Print the gradient from a color to its complement
    Gradient(GradientArgs),
    /// Write the gradient as a palette file
    Export {
        /// Output file; bare file names go into the configured export folder
        path: PathBuf,

        /// Palette format ID (gpl, hex, json); guessed from the extension
        #[arg(short, long)]
        format: Option<String>,

        #[command(flatten)]
        gradient: GradientArgs,
    },
    /// Render the color wheel to a PNG
    Wheel {
        /// Output PNG file
        path: PathBuf,

        /// Width and height in pixels
        #[arg(long)]
        size: Option<u32>,

        /// Wheel rotation in degrees
        #[arg(long, default_value_t = 0.0)]
        hue: f64,

        /// Brightness in percent
        #[arg(long, default_value_t = 100.0)]
        shade: f64,

        /// Levels per channel
        #[arg(long)]
        depth: Option<u32>,
    },
    /// Print a tonal spread around one color
    Spread(SpreadArgs),
    /// Print the effective configuration
    Config,
}

/// Gradient controls shared by `gradient` and `export`.
#[derive(Debug, Clone, Default, Args)]
pub struct GradientArgs {
    /// Start color as #rrggbb, r,g,b or a name; defaults to the wheel's base hue
    #[arg(long)]
    pub from: Option<String>,

    /// Wheel rotation in degrees
    #[arg(long)]
    pub hue: Option<f64>,

    /// Brightness in percent
    #[arg(long)]
    pub shade: Option<f64>,

    /// Number of colors
    #[arg(long)]
    pub steps: Option<u32>,

    /// Curve bias (-100..=100)
    #[arg(long, allow_hyphen_values = true)]
    pub curve: Option<f64>,

    /// Start shade in percent
    #[arg(long)]
    pub start_shade: Option<f64>,

    /// End shade in percent
    #[arg(long)]
    pub end_shade: Option<f64>,

    /// End hue offset in degrees (-180..=180)
    #[arg(long, allow_hyphen_values = true)]
    pub end_hue: Option<f64>,

    /// Levels per channel
    #[arg(long)]
    pub depth: Option<u32>,
}

impl GradientArgs {
    /// Send these settings to `app` and rebuild the gradient.
    fn apply(&self, app: &mut PickerApp) -> Result<(), CliError> {
        let state = app.state();
        let hue_degrees = self.hue.unwrap_or(state.hue_shift * HUE_SLIDER_DEGREES);
        let shade_percent = self.shade.unwrap_or(state.shade * SHADE_SLIDER_PERCENT);
        let fine = state.gradient;

        if self.hue.is_some() || self.shade.is_some() {
            app.update(Message::HueShade {
                hue_degrees,
                shade_percent,
            });
        }
        if let Some(color) = &self.from {
            let rgb = parse_color(color, app.namer().table())?;
            app.update(Message::HexEntered(rgb.to_hex()));
        }
        if let Some(steps) = self.steps {
            app.update(Message::Steps(steps));
        }
        if let Some(curve) = self.curve {
            app.update(Message::Curve(curve));
        }
        if self.start_shade.is_some() || self.end_shade.is_some() || self.end_hue.is_some() {
            app.update(Message::FineTune {
                start_shade_percent: self.start_shade.unwrap_or(fine.fine_shade1 * SHADE_SLIDER_PERCENT),
                end_shade_percent: self.end_shade.unwrap_or(fine.fine_shade2 * SHADE_SLIDER_PERCENT),
                end_hue_degrees: self.end_hue.unwrap_or(fine.fine_hue2 * HUE_SLIDER_DEGREES),
            });
        }
        if let Some(depth) = self.depth {
            app.update(Message::ColorDepth(depth));
        }

        app.recompute_now();
        Ok(())
    }
}

/// Tonal spread controls.
#[derive(Debug, Clone, Args)]
pub struct SpreadArgs {
    /// Base color as #rrggbb, r,g,b or a name
    pub color: String,

    /// Number of colors
    #[arg(long, default_value_t = 5)]
    pub count: usize,

    /// Brightness swing (-1..=1)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub shade_adjust: f64,

    /// Constant hue rotation in turns (-1..=1)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub hue_adjust: f64,

    /// Saturation swing (-1..=1)
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    pub sat_adjust: f64,

    /// Hue fan-out factor (0..=2)
    #[arg(long, default_value_t = 1.0)]
    pub hue_spread: f64,
}

/// Parse a color given as `#rrggbb`, `r,g,b` or a name from `table`.
pub fn parse_color(text: &str, table: &NameTable) -> Result<Rgb, CliError> {
    let text = text.trim();
    if let Ok(rgb) = text.parse::<Rgb>() {
        return Ok(rgb);
    }

    let channels: Vec<&str> = text.split(',').collect();
    let entered = match channels.as_slice() {
        [r, g, b] => Rgb::from_entries(r, g, b),
        _ => None,
    };
    if let Some(rgb) = entered {
        return Ok(rgb);
    }

    table
        .rgb_of(text)
        .ok_or_else(|| CliError::InvalidColor(text.to_string()))
}

/// Load the configuration named on the command line, else the default file,
/// else built-in defaults.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, CliError> {
    match path {
        Some(path) => Ok(AppConfig::load_from(path)?),
        None => Ok(AppConfig::load_from_default_path().unwrap_or_default()),
    }
}

/// Initialize `env_logger` at `level`; `RUST_LOG` overrides it.
pub fn init_logger(level: LogLevel) {
    let mut builder = Builder::new();
    builder
        .target(Target::Stderr)
        .filter_level(level.to_level_filter())
        .parse_default_env();

    if builder.try_init().is_err() {
        log::debug!("Logger already initialized");
    }
}

/// Parse arguments, set up logging and run the command.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            // Still report the failure at the requested verbosity
            init_logger(LogLevel::default().raised(cli.verbose));
            return Err(e);
        }
    };
    init_logger(config.preferences.log_level.raised(cli.verbose));

    let stdout = std::io::stdout();
    execute(cli.command, &config, &mut stdout.lock())
}

/// Run `command` with `config`, writing results to `out`.
pub fn execute(command: Command, config: &AppConfig, out: &mut impl Write) -> Result<(), CliError> {
    match command {
        Command::Info { color, depth } => {
            let namer = ColorNamer::new();
            let rgb = parse_color(&color, namer.table())?;
            let depth = depth.map_or(ColorDepth::new(config.preferences.color_depth), ColorDepth::new);
            let rgb = depth.quantize(rgb);
            let opposite = rgb.to_hsv().opposite().to_rgb_at(depth);
            writeln!(out, "{}", ColorInfo::describe(rgb, opposite, &namer))?;
        }
        Command::Gradient(args) => {
            let mut app = PickerApp::from_config(config);
            args.apply(&mut app)?;
            if let Some(line) = app.view().endpoint_line() {
                writeln!(out, "{line}")?;
            }
            writeln!(out, "{}", app.view().listing())?;
        }
        Command::Export {
            path,
            format,
            gradient,
        } => {
            let mut app = PickerApp::from_config(config);
            gradient.apply(&mut app)?;

            let path = resolve_export_path(&path, config);
            let format_id = match format {
                Some(id) => id,
                None => app
                    .formats()
                    .for_path(&path)
                    .map_or_else(|| config.preferences.default_format.clone(), |f| f.id().to_string()),
            };

            if let Some(result) = app.export(Some(&path), &format_id)? {
                for warning in &result.warnings {
                    log::warn!("{}", warning.message);
                }
                for file in &result.files_created {
                    writeln!(out, "Wrote {} colors to {}", result.colors_exported, file.display())?;
                }
            }
        }
        Command::Wheel {
            path,
            size,
            hue,
            shade,
            depth,
        } => {
            let size = size
                .unwrap_or(config.preferences.wheel_size)
                .clamp(MIN_WHEEL_SIZE, MAX_WHEEL_SIZE);
            let depth = ColorDepth::new(depth.unwrap_or(config.preferences.color_depth));
            let image = WheelGeometry::new(size).render(
                hue / HUE_SLIDER_DEGREES,
                (shade / SHADE_SLIDER_PERCENT).clamp(0.0, 1.0),
                depth,
            );
            image.save(&path)?;
            log::info!("Saved {}px wheel to {:?}", size, path);
            writeln!(out, "Wrote {}", path.display())?;
        }
        Command::Spread(args) => {
            let namer = ColorNamer::new();
            let base = parse_color(&args.color, namer.table())?;
            let spread = TonalSpread {
                shade_adjust: args.shade_adjust,
                hue_adjust: args.hue_adjust,
                sat_adjust: args.sat_adjust,
                hue_spread: args.hue_spread,
            }
            .clamped();

            let depth = ColorDepth::new(config.preferences.color_depth);
            for hsv in spread.generate(base.to_hsv(), args.count) {
                writeln!(out, "{}", spread_line(hsv, depth, &namer))?;
            }
        }
        Command::Config => {
            if let Some(path) = AppConfig::default_path() {
                log::info!("Default configuration path: {:?}", path);
            }
            writeln!(out, "{}", config.to_json()?)?;
        }
    }
    Ok(())
}

fn spread_line(hsv: Hsv, depth: ColorDepth, namer: &ColorNamer) -> Swatch {
    Swatch::describe(hsv.to_rgb_at(depth), namer)
}

/// Bare file names go into the configured export folder.
fn resolve_export_path(path: &Path, config: &AppConfig) -> PathBuf {
    let is_bare = path.parent().is_none_or(|parent| parent.as_os_str().is_empty());
    match config.preferences.export_dir() {
        Some(dir) if is_bare && !path.is_absolute() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_string(args: &[&str], config: &AppConfig) -> String {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        execute(cli.command, config, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_color_forms() {
        let table = NameTable::web();
        assert_eq!(parse_color("#ff8000", &table).unwrap(), Rgb::new(255, 128, 0));
        assert_eq!(parse_color("10, 20, 30", &table).unwrap(), Rgb::new(10, 20, 30));
        assert_eq!(parse_color("Teal", &table).unwrap(), Rgb::new(0, 128, 128));
        assert!(matches!(
            parse_color("notacolor", &table),
            Err(CliError::InvalidColor(_))
        ));
        assert!(parse_color("300,0,0", &table).is_err());
    }

    #[test]
    fn test_info_command() {
        let out = run_to_string(&["huewheel", "info", "red"], &AppConfig::default());
        assert_eq!(
            out,
            "Colour: #ff0000 (255, 0, 0) red\nOpposite: #00ffff (0, 255, 255) cyan\n"
        );
    }

    #[test]
    fn test_gradient_command() {
        let out = run_to_string(
            &["huewheel", "gradient", "--from", "#ff0000", "--steps", "3"],
            &AppConfig::default(),
        );
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "#ff0000 red -> #00ffff cyan");
        assert_eq!(lines[1], "#ff0000 (255, 0, 0) red");
        assert!(lines[2].starts_with("#7f00ff (127, 0, 255)"));
        assert_eq!(lines[3], "#00ffff (0, 255, 255) cyan");
    }

    #[test]
    fn test_gradient_negative_curve_parses() {
        let cli = Cli::try_parse_from(["huewheel", "gradient", "--curve", "-50"]).unwrap();
        match cli.command {
            Command::Gradient(args) => assert_eq!(args.curve, Some(-50.0)),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_export_command_guesses_format() {
        let dir = std::env::temp_dir().join(format!("huewheel-cli-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("warm.hex");

        let out = run_to_string(
            &[
                "huewheel",
                "export",
                path.to_str().unwrap(),
                "--from",
                "red",
                "--steps",
                "2",
            ],
            &AppConfig::default(),
        );
        assert!(out.starts_with("Wrote 2 colors to"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "ff0000\n00ffff\n");

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_export_path_uses_export_folder() {
        let mut config = AppConfig::default();
        assert_eq!(
            resolve_export_path(Path::new("p.gpl"), &config),
            PathBuf::from("p.gpl")
        );

        config.preferences.export_folder = "/tmp/palettes".to_string();
        assert_eq!(
            resolve_export_path(Path::new("p.gpl"), &config),
            PathBuf::from("/tmp/palettes/p.gpl")
        );
        assert_eq!(
            resolve_export_path(Path::new("out/p.gpl"), &config),
            PathBuf::from("out/p.gpl")
        );
    }

    #[test]
    fn test_spread_command() {
        let out = run_to_string(
            &["huewheel", "spread", "red", "--count", "3", "--hue-spread", "0"],
            &AppConfig::default(),
        );
        // No swings: every color is the base
        assert_eq!(out, "#ff0000 (255, 0, 0) red\n".repeat(3));
    }

    #[test]
    fn test_wheel_command_writes_png() {
        let path = std::env::temp_dir().join(format!("huewheel-cli-wheel-{}.png", std::process::id()));
        let out = run_to_string(
            &["huewheel", "wheel", path.to_str().unwrap(), "--size", "32"],
            &AppConfig::default(),
        );
        assert!(out.starts_with("Wrote"));

        let image = image::open(&path).unwrap().to_rgb8();
        assert_eq!(image.dimensions(), (32, 32));
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_config_command_prints_json() {
        let out = run_to_string(&["huewheel", "config"], &AppConfig::default());
        let parsed = AppConfig::from_json(&out).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_verbose_flag_counts() {
        let cli = Cli::try_parse_from(["huewheel", "-vv", "config"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(LogLevel::Info.raised(cli.verbose), LogLevel::Trace);
    }

    #[test]
    fn test_missing_config_file() {
        let path = std::env::temp_dir().join("huewheel-definitely-missing-config.json");
        assert!(matches!(
            load_config(Some(&path)),
            Err(CliError::Config(ConfigError::IoError(_)))
        ));
    }
}
