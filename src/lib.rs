//! # startup-report
//!
//! A cross-platform desktop utility that greets you with a spoken status
//! report: time and date, battery, machine name, network, screen
//! brightness, volume, and CPU/RAM load.
//!
//! ## Overview
//!
//! The report is a fixed sequence of independent reporters. Each one
//! queries a single facet of the machine through a platform data source
//! and turns the outcome into one or more lines. Lines go to an
//! [`speech::OutputSink`], which prints them and, when a synthesizer is
//! installed, speaks them aloud. A reporter whose source is missing or
//! failing produces a fallback line; it never stops the rest of the report.
//!
//! ## Usage
//!
//! ```no_run
//! use startup_report::config::ReportConfig;
//! use startup_report::platform::{Capabilities, Platform};
//! use startup_report::report::{Reporters, StartupReport};
//! use startup_report::speech::{detect_engine, ConsoleSink};
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = ReportConfig::default();
//! let engine = detect_engine(&config.speech);
//! let platform = Platform::current(&config)?;
//! let capabilities = Capabilities::detect(&platform, engine.is_some());
//!
//! let reporters = Reporters::from_platform(&config, platform, &capabilities);
//! let mut report = StartupReport::new(ConsoleSink::new(engine), reporters);
//! report.run();
//! # Ok(())
//! # }
//! ```
//!
//! ## Module Organization
//!
//! - [`cli`]: Command-line interface definitions
//! - [`config`]: YAML configuration with defaults for every value
//! - [`constants`]: Spoken phrases and default tuning values
//! - [`models`]: Readings and the reporter error type
//! - [`platform`]: Data source traits and per-OS implementations
//! - [`reporters`]: One reporter per system facet
//! - [`report`]: The ordered report sequence
//! - [`speech`]: Speech synthesis and output sinks

/// Command-line interface definitions and argument parsing
pub mod cli;

/// Configuration loading and defaults
pub mod config;

/// Application constants and spoken phrases
pub mod constants;

/// Readings produced by reporters
pub mod models;

/// Platform data sources
pub mod platform;

/// The ordered startup report
pub mod report;

/// Individual reporters
pub mod reporters;

/// Speech synthesis and output sinks
pub mod speech;

/// Test utilities and helpers
#[cfg(test)]
pub mod test_utils;
