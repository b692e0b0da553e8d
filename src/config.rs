//! Runtime configuration.
//!
//! Values come from the environment (a `.env` file is loaded by `main`),
//! command line flags override them.

use crate::cli::Cli;
use clap::ValueEnum;
use std::error::Error;
use std::path::PathBuf;
use std::str::FromStr;

pub const ENV_OUTPUT_FORMAT: &str = "IPV4_OUTPUT_FORMAT";
pub const ENV_LOG_CONFIG: &str = "IPV4_LOG_CONFIG";
pub const DEFAULT_LOG_CONFIG: &str = "log4rs.yml";

/// How results are written to stdout.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Labelled blocks, colored when stdout is a terminal.
    #[default]
    Text,
    /// Header plus one quoted row per input.
    Csv,
    /// Pretty printed JSON array.
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{other}' (expected text, csv or json)"
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    /// log4rs YAML file, a console fallback is used when it is missing.
    pub log_config: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            format: OutputFormat::default(),
            log_config: PathBuf::from(DEFAULT_LOG_CONFIG),
        }
    }
}

impl Config {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Config, Box<dyn Error>> {
        Config::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read configuration through `lookup`, unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Config, Box<dyn Error>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();
        if let Some(format) = lookup(ENV_OUTPUT_FORMAT) {
            config.format = format
                .parse()
                .map_err(|e| format!("{ENV_OUTPUT_FORMAT}: {e}"))?;
        }
        if let Some(path) = lookup(ENV_LOG_CONFIG).filter(|p| !p.trim().is_empty()) {
            config.log_config = PathBuf::from(path);
        }
        Ok(config)
    }

    /// Apply command line overrides.
    pub fn with_cli(mut self, cli: &Cli) -> Config {
        if let Some(format) = cli.format {
            self.format = format;
        }
        if let Some(path) = &cli.log_config {
            self.log_config = path.clone();
        }
        self
    }
}
