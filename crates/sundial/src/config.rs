//! Runtime configuration for `sundial`.
//!
//! The [`Config`] struct is the single source of truth for runtime
//! options, independent of how they were specified. Values resolve in
//! precedence order: defaults, then the optional config file, then CLI
//! flags and environment variables.

use std::path::{Path, PathBuf};

use daycycle::{ThemeMode, TimeOfDay};
use serde::{Deserialize, Serialize};
use tinct::ColorProfile;

use crate::cli::Cli;

/// Resolved runtime configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// How the active segment is chosen.
    pub mode: ThemeMode,

    /// Pinned segment for manual mode.
    ///
    /// `None` in manual mode means "start on the clock's segment".
    pub time_of_day: Option<TimeOfDay>,

    /// Whether animations run.
    pub animations: bool,

    /// How colors are emitted, if at all.
    pub color: ColorMode,

    /// Whether the UI takes over the alternate screen.
    pub alt_screen: bool,

    /// Repeat count of `-v`, mapped to a log level at startup.
    pub verbosity: u8,

    /// Log destination; logging is off when `None`.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mode: ThemeMode::Auto,
            time_of_day: None,
            animations: true,
            color: ColorMode::Auto,
            alt_screen: true,
            verbosity: 0,
            log_file: None,
        }
    }
}

/// Partial configuration as read from a file.
///
/// Every field is optional; absent fields keep their prior value.
#[derive(Debug, Clone, Default, Deserialize)]
struct FileConfig {
    mode: Option<ThemeMode>,
    time_of_day: Option<TimeOfDay>,
    animations: Option<bool>,
    color: Option<ColorMode>,
    alt_screen: Option<bool>,
    log_file: Option<PathBuf>,
}

impl Config {
    /// Defaults, as if no flags or file were given.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve configuration from CLI arguments and the optional file.
    ///
    /// # Errors
    ///
    /// Fails when the config file is missing or malformed, or when
    /// `--time-of-day` names an unknown segment.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => load_file(path)?,
            None => FileConfig::default(),
        };

        let time_of_day = match &cli.time_of_day {
            Some(name) => Some(
                TimeOfDay::parse_name(name)
                    .ok_or_else(|| ConfigError::UnknownTimeOfDay(name.clone()))?,
            ),
            None => file.time_of_day,
        };

        // A pinned segment implies manual mode unless a mode was named
        // explicitly; the explicit-auto clash is caught by validate().
        let explicit_mode = cli.mode.map(ThemeMode::from).or(file.mode);
        let mode = explicit_mode.unwrap_or(if time_of_day.is_some() {
            ThemeMode::Manual
        } else {
            ThemeMode::Auto
        });

        let mut animations = file.animations.unwrap_or(true);
        if !cli.use_animations() {
            animations = false;
        }

        let color = if cli.force_color {
            ColorMode::Always
        } else if cli.no_color {
            ColorMode::Never
        } else {
            file.color.unwrap_or_default()
        };

        let mut alt_screen = file.alt_screen.unwrap_or(true);
        if cli.no_alt_screen {
            alt_screen = false;
        }

        Ok(Self {
            mode,
            time_of_day,
            animations,
            color,
            alt_screen,
            verbosity: cli.verbose,
            log_file: cli.log_file.clone().or(file.log_file),
        })
    }

    /// Reject combinations the resolver cannot catch field by field.
    ///
    /// # Errors
    ///
    /// Returns an error if validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.mode == ThemeMode::Auto && self.time_of_day.is_some() {
            return Err(ConfigError::PinnedSegmentInAutoMode);
        }

        if let Some(path) = &self.log_file
            && let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            return Err(ConfigError::LogDirNotFound(parent.to_path_buf()));
        }

        Ok(())
    }

    /// The color profile every style call renders through.
    #[must_use]
    pub fn color_profile(&self) -> ColorProfile {
        match self.color {
            ColorMode::Always => ColorProfile::TrueColor,
            ColorMode::Never => ColorProfile::Ascii,
            ColorMode::Auto => ColorProfile::detect(),
        }
    }

    /// Human-readable dump for the diagnostics subcommand.
    #[must_use]
    pub fn to_diagnostic_string(&self) -> String {
        let mut lines = Vec::new();

        lines.push(format!("Mode: {}", self.mode));
        lines.push(format!(
            "Time of day: {}",
            self.time_of_day.map_or("from clock", TimeOfDay::name)
        ));
        lines.push(format!(
            "Animations: {}",
            if self.animations { "on" } else { "off" }
        ));
        lines.push(format!("Color: {:?}", self.color));
        lines.push(format!(
            "Alt screen: {}",
            if self.alt_screen { "on" } else { "off" }
        ));
        match &self.log_file {
            Some(path) => lines.push(format!("Log file: {}", path.display())),
            None => lines.push("Log file: off".to_string()),
        }
        lines.push(format!("Verbosity: {}", self.verbosity));

        lines.join("\n")
    }
}

/// Whether and how color escapes are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Detect from the terminal and environment.
    #[default]
    Auto,
    /// Always emit true-color sequences.
    Always,
    /// Never emit color (ASCII mode).
    Never,
}

fn load_file(path: &Path) -> Result<FileConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::ConfigFileNotFound(path.to_path_buf()));
    }
    let raw = std::fs::read_to_string(path)
        .map_err(|_| ConfigError::ConfigFileRead(path.to_path_buf()))?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("toml") => toml::from_str(&raw).map_err(|err| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            detail: err.to_string(),
        }),
        Some("json") => serde_json::from_str(&raw).map_err(|err| ConfigError::ConfigFileParse {
            path: path.to_path_buf(),
            detail: err.to_string(),
        }),
        _ => Err(ConfigError::UnsupportedConfigFormat(path.to_path_buf())),
    }
}

/// Everything that can go wrong while resolving configuration.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Config file not found.
    #[error("config file not found: {0}")]
    ConfigFileNotFound(PathBuf),

    /// Config file could not be read.
    #[error("config file could not be read: {0}")]
    ConfigFileRead(PathBuf),

    /// Config file failed to parse.
    #[error("config file {path} failed to parse: {detail}")]
    ConfigFileParse {
        /// The offending file.
        path: PathBuf,
        /// Parser message.
        detail: String,
    },

    /// Config file extension is not toml or json.
    #[error("unsupported config format (expected .toml or .json): {0}")]
    UnsupportedConfigFormat(PathBuf),

    /// Unknown time-of-day name.
    #[error("unknown time of day: {0} (expected morning, afternoon, evening, or night)")]
    UnknownTimeOfDay(String),

    /// A pinned segment was combined with explicit auto mode.
    #[error("a pinned time of day requires manual mode")]
    PinnedSegmentInAutoMode,

    /// Log file directory does not exist.
    #[error("log directory not found: {0}")]
    LogDirNotFound(PathBuf),
}
