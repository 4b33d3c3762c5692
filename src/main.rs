use std::thread;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use startup_report::cli::{Args, Commands};
use startup_report::config::{load_config, ReportConfig};
use startup_report::platform::{Capabilities, Platform};
use startup_report::report::{Reporters, StartupReport};
use startup_report::speech::{detect_engine, ConsoleSink};

fn main() -> Result<()> {
    // Parse arguments
    let args = Args::parse();

    // Initialize logging
    initialize_logging(args.verbose)?;

    // Handle subcommands
    if let Some(cmd) = &args.command {
        return handle_subcommand(cmd);
    }

    let config = load_and_apply_overrides(&args)?;

    // Probe optional capabilities once, before anything is spoken
    let engine = detect_engine(&config.speech);
    let platform = Platform::current(&config)?;
    let capabilities = Capabilities::detect(&platform, engine.is_some());
    if !capabilities.speech_synthesis {
        info!("No speech engine available, the report will only be printed");
    }

    let reporters = Reporters::from_platform(&config, platform, &capabilities);
    let mut report = StartupReport::new(ConsoleSink::new(engine), reporters);
    report.run();

    if !args.no_pause {
        thread::sleep(config.farewell_pause());
    }

    Ok(())
}

/// Initialize logging with the specified verbosity level
fn initialize_logging(verbose: bool) -> Result<()> {
    // Quiet by default so log lines do not interleave with the report
    let log_level = if verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    TermLogger::init(
        log_level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .context("Failed to initialize logger")?;
    Ok(())
}

/// Handle subcommands
fn handle_subcommand(cmd: &Commands) -> Result<()> {
    match cmd {
        Commands::InitConfig { path } => {
            info!("Creating default configuration file at {}", path.display());
            ReportConfig::create_default_config_file(path)?;
            println!("Configuration written to {}", path.display());
            Ok(())
        }
    }
}

/// Load configuration and apply command-line overrides
fn load_and_apply_overrides(args: &Args) -> Result<ReportConfig> {
    let mut config = load_config(args.config.as_deref())?;
    if args.mute {
        config.speech.enabled = false;
    }
    Ok(config)
}
