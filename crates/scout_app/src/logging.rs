//! Logging initialization for scout_app.
//!
//! The scout is a run-and-exit tool, so logs default to the terminal;
//! `LogDestination::File` keeps a `./scout.log` alongside the run instead.

use std::fs::File;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_FILE: &str = "./scout.log";
const LEVEL: LevelFilter = LevelFilter::Info;

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    /// Write to ./scout.log in current directory.
    File,
    /// Write to terminal (stdout).
    Terminal,
    /// Write to both file and terminal.
    Both,
}

/// Initialize the global logger for the selected destination. Failing to
/// create the log file falls back to whatever remains (possibly nothing).
pub fn initialize(destination: LogDestination) {
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();
    if matches!(destination, LogDestination::Terminal | LogDestination::Both) {
        loggers.push(TermLogger::new(
            LEVEL,
            config.clone(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ));
    }
    if matches!(destination, LogDestination::File | LogDestination::Both) {
        match File::create(LOG_FILE) {
            Ok(file) => loggers.push(WriteLogger::new(LEVEL, config, file)),
            Err(err) => eprintln!("Warning: Could not create {}: {}", LOG_FILE, err),
        }
    }

    let _ = CombinedLogger::init(loggers);
}
