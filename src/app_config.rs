use anyhow::{anyhow, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use crate::duration::DurationSpec;

/// Application configuration module
/// This module handles loading and validating the converter settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Duration used when none is given on the command line (M:S)
    #[serde(default = "default_duration")]
    pub default_duration: String,

    /// File name of the subtitle written when no output path is given
    #[serde(default = "default_output_file_name")]
    pub output_file_name: String,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// Log verbosity level
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    // @returns: Matching log crate filter
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

fn default_duration() -> String {
    "5:30".to_string()
}

fn default_output_file_name() -> String {
    "subtitle.srt".to_string()
}

impl Config {
    /// Load configuration from a JSON file, or the defaults if it does not exist
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        debug!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<()> {
        self.duration()
            .map_err(|e| anyhow!("Invalid default_duration in config: {}", e))?;

        if self.output_file_name.trim().is_empty() {
            return Err(anyhow!("output_file_name must not be empty"));
        }

        Ok(())
    }

    /// The configured default duration, parsed
    pub fn duration(&self) -> Result<DurationSpec, crate::errors::ConversionError> {
        self.default_duration.parse()
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            default_duration: default_duration(),
            output_file_name: default_output_file_name(),
            log_level: LogLevel::default(),
        }
    }
}
