use anyhow::{Context, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::default::Default;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::cues::DEFAULT_TTL_SECS;
use crate::errors::AppError;
use crate::export::{ExportFormat, ExportOptions};

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// SubRip cue settings
    #[serde(default)]
    pub srt: SrtConfig,

    /// WebVTT cue settings
    #[serde(default)]
    pub vtt: VttConfig,

    /// Files to produce for each input
    #[serde(default = "default_formats")]
    pub formats: Vec<ExportFormat>,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// SubRip output configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SrtConfig {
    /// Seconds a group of fragments stays on screen; also the grouping window
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: f64,
}

impl Default for SrtConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
        }
    }
}

/// WebVTT output configuration
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct VttConfig {
    /// Seconds each fragment stays on screen
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: f64,

    /// Emit numeric cue identifiers
    #[serde(default = "default_true")]
    pub numbered: bool,
}

impl Default for VttConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            numbered: true,
        }
    }
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
    // @returns: Matching filter for the log facade
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

fn default_ttl_secs() -> f64 {
    DEFAULT_TTL_SECS
}

fn default_true() -> bool {
    true
}

fn default_formats() -> Vec<ExportFormat> {
    ExportFormat::ALL.to_vec()
}

impl Config {
    /// Load configuration from a JSON file, falling back to defaults when it is absent
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            warn!("Config file not found at '{}', using defaults.", path.display());
            return Ok(Config::default());
        }

        let file = File::open(path)
            .with_context(|| format!("Failed to open config file: {}", path.display()))?;
        let reader = BufReader::new(file);
        let config: Config = serde_json::from_reader(reader)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Validate the configuration for consistency and required values
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, ttl) in [("srt.ttl_secs", self.srt.ttl_secs), ("vtt.ttl_secs", self.vtt.ttl_secs)] {
            if !ttl.is_finite() || ttl <= 0.0 {
                return Err(AppError::Config(format!("{} must be a positive number of seconds, got {}", name, ttl)));
            }
        }

        if self.formats.is_empty() {
            return Err(AppError::Config("at least one export format is required".to_string()));
        }

        Ok(())
    }

    /// Cue settings handed to the exporters
    pub fn export_options(&self) -> ExportOptions {
        ExportOptions {
            srt_ttl: self.srt.ttl_secs,
            vtt_ttl: self.vtt.ttl_secs,
            vtt_numbered: self.vtt.numbered,
        }
    }
}

/// Default implementation for Config
impl Default for Config {
    fn default() -> Self {
        Config {
            srt: SrtConfig::default(),
            vtt: VttConfig::default(),
            formats: default_formats(),
            log_level: LogLevel::default(),
        }
    }
}
