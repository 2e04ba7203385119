#![forbid(unsafe_code)]

//! `sundial` entry point: resolve configuration, set up logging, run the
//! program.

use std::fs::File;
use std::sync::Mutex;

use mainspring::Program;
use tracing::info;
use tracing_subscriber::EnvFilter;

use sundial::app::App;
use sundial::cli::{Cli, Command, LogLevel};
use sundial::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse_args();
    let config = Config::from_cli(&cli)?;
    config.validate()?;

    if let Some(Command::Diagnostics) = cli.command {
        println!("{}", config.to_diagnostic_string());
        return Ok(());
    }

    init_logging(&config)?;
    info!(mode = %config.mode, "starting sundial");

    let alt_screen = config.alt_screen;
    let app = App::new(config)?;

    let mut program = Program::new(app);
    if alt_screen {
        program = program.with_alt_screen();
    }
    program.run()?;

    Ok(())
}

/// Install the tracing subscriber, writing to the configured file.
///
/// The UI owns the terminal, so without a log file logging stays off
/// entirely. `RUST_LOG` overrides the verbosity flags when set.
fn init_logging(config: &Config) -> anyhow::Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(LogLevel::from_verbosity(config.verbosity).as_filter())
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}
