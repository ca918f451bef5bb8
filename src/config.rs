//! Configuration file support for Huewheel.
//!
//! Settings are read from a JSON file at startup. The file is never written
//! back; `huewheel config` prints the effective configuration so users can
//! start from it.

use std::path::{Path, PathBuf};

use huewheel_color::{ColorDepth, GradientParams};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_WHEEL_SIZE, MAX_WHEEL_SIZE, MIN_WHEEL_SIZE, RECOMPUTE_DEBOUNCE};
use crate::format::FormatRegistry;

/// Log level setting for the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Show only errors
    Error,
    /// Show errors and warnings
    Warn,
    /// Show errors, warnings, and info messages
    #[default]
    Info,
    /// Show debug-level logging
    Debug,
    /// Show all log messages including trace
    Trace,
}

impl LogLevel {
    /// Get all log levels in order from least to most verbose.
    pub fn all() -> &'static [LogLevel] {
        &[
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ]
    }

    /// Raise the level by `steps` towards `Trace`.
    pub fn raised(self, steps: u8) -> LogLevel {
        let all = Self::all();
        let current = all.iter().position(|&l| l == self).unwrap_or(0);
        all[(current + usize::from(steps)).min(all.len() - 1)]
    }

    /// Convert to log crate's LevelFilter.
    pub fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Current configuration file format version.
/// Increment this when making breaking changes to the config format.
pub const CONFIG_VERSION: u32 = 1;

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Version of the configuration file format
    pub version: u32,

    /// Application name (for identification)
    #[serde(default = "default_app_name")]
    pub app_name: String,

    /// User preferences
    #[serde(default)]
    pub preferences: UserPreferences,

    /// Gradient controls at startup
    #[serde(default)]
    pub gradient: GradientParams,
}

fn default_app_name() -> String {
    "Huewheel".to_string()
}

/// User preferences section of the config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreferences {
    /// Log verbosity level
    #[serde(default)]
    pub log_level: LogLevel,

    /// Wheel bitmap width and height in pixels
    #[serde(default = "default_wheel_size")]
    pub wheel_size: u32,

    /// Delay before a gradient recompute, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Levels per color channel
    #[serde(default = "default_color_depth")]
    pub color_depth: u32,

    /// Folder palettes are exported to when no directory is given
    #[serde(default)]
    pub export_folder: String,

    /// Palette format used when none is requested
    #[serde(default = "default_format")]
    pub default_format: String,
}

fn default_wheel_size() -> u32 {
    DEFAULT_WHEEL_SIZE
}

fn default_debounce_ms() -> u64 {
    RECOMPUTE_DEBOUNCE.as_millis() as u64
}

fn default_color_depth() -> u32 {
    ColorDepth::FULL.levels()
}

fn default_format() -> String {
    FormatRegistry::DEFAULT_FORMAT.to_string()
}

impl Default for UserPreferences {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            wheel_size: default_wheel_size(),
            debounce_ms: default_debounce_ms(),
            color_depth: default_color_depth(),
            export_folder: String::new(),
            default_format: default_format(),
        }
    }
}

impl UserPreferences {
    /// Directory to export into, if one is configured.
    pub fn export_dir(&self) -> Option<PathBuf> {
        (!self.export_folder.is_empty()).then(|| PathBuf::from(&self.export_folder))
    }
}

impl AppConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self {
            version: CONFIG_VERSION,
            app_name: default_app_name(),
            preferences: UserPreferences::default(),
            gradient: GradientParams::default(),
        }
    }

    /// Serialize the configuration to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize configuration from JSON.
    ///
    /// Out-of-range values are clamped rather than rejected.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;

        // Validate version compatibility
        if config.version > CONFIG_VERSION {
            return Err(ConfigError::VersionTooNew {
                file_version: config.version,
                supported_version: CONFIG_VERSION,
            });
        }

        Ok(config.sanitized())
    }

    /// Clamp every setting into its valid range.
    pub fn sanitized(mut self) -> Self {
        let prefs = &mut self.preferences;
        prefs.wheel_size = prefs.wheel_size.clamp(MIN_WHEEL_SIZE, MAX_WHEEL_SIZE);
        prefs.color_depth = ColorDepth::new(prefs.color_depth).levels();
        self.gradient = self.gradient.clamped();
        self
    }

    /// Get the default config filename.
    pub fn default_filename() -> &'static str {
        "huewheel-config.json"
    }

    /// Get the default config file path.
    pub fn default_path() -> Option<PathBuf> {
        // Try to use XDG config directory, fall back to home directory
        if let Some(config_dir) = dirs::config_dir() {
            Some(config_dir.join("huewheel").join(Self::default_filename()))
        } else {
            dirs::home_dir().map(|home_dir| {
                home_dir
                    .join(".config")
                    .join("huewheel")
                    .join(Self::default_filename())
            })
        }
    }

    /// Load configuration from `path`.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Try to load configuration from the default path.
    /// Returns None if the file doesn't exist or can't be read.
    pub fn load_from_default_path() -> Option<Self> {
        let path = Self::default_path()?;
        if !path.exists() {
            log::debug!("No config file found at {:?}", path);
            return None;
        }

        match Self::load_from(&path) {
            Ok(config) => Some(config),
            Err(e) => {
                log::warn!("Failed to load config file {:?}: {}", path, e);
                None
            }
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// JSON parsing error
    #[error("Failed to parse configuration: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Configuration version is newer than supported
    #[error(
        "Configuration file version {file_version} is newer than supported version {supported_version}"
    )]
    VersionTooNew {
        file_version: u32,
        supported_version: u32,
    },

    /// I/O error when reading config
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}
