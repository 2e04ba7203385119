//! Command-line interface for `sundial`.
//!
//! Defines the CLI contract using clap derive macros.
//!
//! # Examples
//!
//! ```bash
//! # Follow the local clock
//! sundial
//!
//! # Pin the evening theme
//! sundial --time-of-day evening
//!
//! # Start in manual mode on the clock's current segment
//! sundial --mode manual
//!
//! # Print resolved settings without starting the UI
//! sundial diagnostics
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use daycycle::ThemeMode;

/// Terminal portfolio themed by the time of day.
///
/// The palette follows the local clock in auto mode and a slider
/// selection in manual mode.
#[derive(Parser, Debug, Clone)]
#[expect(
    clippy::struct_excessive_bools,
    reason = "CLI flags are naturally bools"
)]
#[command(
    name = "sundial",
    author,
    version,
    about = "Terminal portfolio themed by the time of day",
    long_about = "A terminal portfolio whose palette tracks the local clock: warm \
                  ambers in the morning, sky blues in the afternoon, dusk purples \
                  in the evening, and deep indigos at night."
)]
pub struct Cli {
    /// Theme mode
    ///
    /// `auto` follows the local clock; `manual` holds a fixed segment
    #[arg(long, short = 'm', env = "SUNDIAL_MODE", value_enum)]
    pub mode: Option<ModeArg>,

    /// Pin the theme to a day segment (implies manual mode)
    ///
    /// One of: morning, afternoon, evening, night
    #[arg(long, short = 't', env = "SUNDIAL_TIME_OF_DAY")]
    pub time_of_day: Option<String>,

    /// Path to a TOML or JSON config file
    #[arg(long, short = 'c', env = "SUNDIAL_CONFIG")]
    pub config: Option<PathBuf>,

    /// Skip the intro typewriter and other animations
    ///
    /// Also honored when `REDUCE_MOTION` is set in the environment
    #[arg(long, env = "SUNDIAL_NO_ANIMATIONS")]
    pub no_animations: bool,

    /// Disable colored output entirely
    ///
    /// Also honored when `NO_COLOR` is set in the environment
    #[arg(long, env = "NO_COLOR")]
    pub no_color: bool,

    /// Force colored output even when `NO_COLOR` is set
    #[arg(long, conflicts_with = "no_color")]
    pub force_color: bool,

    /// Stay in the main screen buffer
    ///
    /// Output lands in the scrollback, which helps when debugging
    #[arg(long, env = "SUNDIAL_NO_ALT_SCREEN")]
    pub no_alt_screen: bool,

    /// Write logs to this file
    ///
    /// Logging is off entirely when no path is given; the UI owns the
    /// terminal, so logs never go to stderr
    #[arg(long, env = "SUNDIAL_LOG_FILE")]
    pub log_file: Option<PathBuf>,

    /// Enable verbose logging (repeat for more detail)
    #[arg(long, short = 'v', action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run instead of the UI
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the resolved configuration and exit
    Diagnostics,
}

/// Theme mode as a CLI value.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeArg {
    /// Follow the local clock
    Auto,
    /// Hold a fixed segment
    Manual,
}

impl From<ModeArg> for ThemeMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::Auto => ThemeMode::Auto,
            ModeArg::Manual => ThemeMode::Manual,
        }
    }
}

impl Cli {
    /// Parse arguments from the process environment.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parse from an explicit argument list, as tests do.
    ///
    /// # Errors
    ///
    /// Returns an error if argument parsing fails.
    pub fn try_parse_from<I, T>(iter: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        <Self as Parser>::try_parse_from(iter)
    }

    /// Check if animations should run.
    #[must_use]
    pub fn use_animations(&self) -> bool {
        if self.no_animations {
            return false;
        }
        if std::env::var("REDUCE_MOTION").is_ok() {
            return false;
        }
        true
    }

    /// Log level derived from the `-v` count.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        LogLevel::from_verbosity(self.verbose)
    }
}

/// Verbosity tiers for file logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Warnings and errors only
    Warn,
    /// Plus informational messages
    Info,
    /// Plus debug detail
    Debug,
    /// Everything, including trace
    Trace,
}

impl LogLevel {
    /// Level for a `-v` repeat count.
    #[must_use]
    pub const fn from_verbosity(verbosity: u8) -> Self {
        match verbosity {
            0 => Self::Warn,
            1 => Self::Info,
            2 => Self::Debug,
            _ => Self::Trace,
        }
    }

    /// Directive string for the tracing env filter.
    #[must_use]
    pub const fn as_filter(self) -> &'static str {
        match self {
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_parses_defaults() {
        let cli = Cli::try_parse_from(["sundial"]).unwrap();

        assert!(cli.mode.is_none());
        assert!(cli.time_of_day.is_none());
        assert!(cli.config.is_none());
        assert!(!cli.no_animations);
        assert!(!cli.no_color);
        assert!(!cli.no_alt_screen);
        assert!(cli.log_file.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn cli_parses_mode() {
        let cli = Cli::try_parse_from(["sundial", "--mode", "manual"]).unwrap();
        assert_eq!(cli.mode, Some(ModeArg::Manual));

        let cli = Cli::try_parse_from(["sundial", "-m", "auto"]).unwrap();
        assert_eq!(cli.mode, Some(ModeArg::Auto));
    }

    #[test]
    fn cli_rejects_unknown_mode() {
        let result = Cli::try_parse_from(["sundial", "--mode", "twilight"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_time_of_day() {
        let cli = Cli::try_parse_from(["sundial", "--time-of-day", "evening"]).unwrap();
        assert_eq!(cli.time_of_day.as_deref(), Some("evening"));

        let cli = Cli::try_parse_from(["sundial", "-t", "night"]).unwrap();
        assert_eq!(cli.time_of_day.as_deref(), Some("night"));
    }

    #[test]
    fn cli_parses_flags() {
        let cli = Cli::try_parse_from(["sundial", "--no-animations", "--no-color", "--no-alt-screen"])
            .unwrap();

        assert!(cli.no_animations);
        assert!(cli.no_color);
        assert!(cli.no_alt_screen);
    }

    #[test]
    fn cli_force_color_conflicts_with_no_color() {
        let result = Cli::try_parse_from(["sundial", "--no-color", "--force-color"]);
        assert!(result.is_err());
    }

    #[test]
    fn cli_parses_verbose() {
        let cli = Cli::try_parse_from(["sundial"]).unwrap();
        assert_eq!(cli.log_level(), LogLevel::Warn);

        let cli = Cli::try_parse_from(["sundial", "-v"]).unwrap();
        assert_eq!(cli.log_level(), LogLevel::Info);

        let cli = Cli::try_parse_from(["sundial", "-vv"]).unwrap();
        assert_eq!(cli.log_level(), LogLevel::Debug);

        let cli = Cli::try_parse_from(["sundial", "-vvv"]).unwrap();
        assert_eq!(cli.log_level(), LogLevel::Trace);
    }

    #[test]
    fn cli_parses_log_file() {
        let cli = Cli::try_parse_from(["sundial", "--log-file", "/tmp/sundial.log"]).unwrap();
        assert_eq!(cli.log_file, Some(PathBuf::from("/tmp/sundial.log")));
    }

    #[test]
    fn cli_parses_diagnostics_subcommand() {
        let cli = Cli::try_parse_from(["sundial", "diagnostics"]).unwrap();
        assert!(matches!(cli.command, Some(Command::Diagnostics)));
    }

    #[test]
    fn cli_help_works() {
        let result = Cli::try_parse_from(["sundial", "--help"]);
        // clap surfaces --help as an Err of the DisplayHelp kind
        assert!(result.is_err());
    }

    #[test]
    fn log_level_filters() {
        assert_eq!(LogLevel::Warn.as_filter(), "warn");
        assert_eq!(LogLevel::Trace.as_filter(), "trace");
    }
}
