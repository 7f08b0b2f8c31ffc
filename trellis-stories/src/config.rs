//! Command-line and environment configuration.

use std::str::FromStr;

use clap::Parser;
use log::LevelFilter;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid log level '{0}', expected off, error, warn, info, debug or trace")]
    InvalidLogLevel(String),
}

fn parse_level(s: &str) -> Result<LevelFilter, ConfigError> {
    LevelFilter::from_str(s.trim()).map_err(|_| ConfigError::InvalidLogLevel(s.to_string()))
}

/// Render the trellis component catalog as text
#[derive(Debug, Clone, Parser)]
#[command(name = "trellis-stories")]
#[command(about = "Render the trellis component catalog as text", long_about = None)]
pub struct Options {
    /// Only list story paths instead of rendering them
    #[arg(short, long)]
    pub list: bool,

    /// Log level for the log file
    #[arg(long, env = "TRELLIS_LOG", default_value = "debug", value_parser = parse_level)]
    pub log_level: LevelFilter,

    /// Render only stories whose path contains one of these (case-insensitive)
    pub filters: Vec<String>,
}
