//! Configuration management for grib-nearest.
//!
//! This module handles the layered configuration system with the following precedence:
//! 1. Command-line arguments (highest priority)
//! 2. Environment variables
//! 3. JSON config file
//! 4. Default values (lowest priority)

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{NearestError, Result};
use crate::nearest::NearestRegistry;

/// Command-line arguments for grib-nearest
#[derive(Parser, Debug)]
#[command(name = "grib-nearest")]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the JSON message to inspect
    #[arg(required_unless_present = "list")]
    pub message: Option<PathBuf>,

    /// Nearest type to use instead of the one the message declares
    #[arg(short, long = "type", env = "GRIB_NEAREST_TYPE")]
    pub type_override: Option<String>,

    /// Earth radius used when the message declares none
    #[arg(short, long, env = "GRIB_NEAREST_RADIUS")]
    pub radius: Option<f64>,

    /// Path to JSON configuration file
    #[arg(short, long, env = "GRIB_NEAREST_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "GRIB_NEAREST_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// List the registered nearest types and exit
    #[arg(short, long)]
    pub list: bool,
}

/// Nearest selection configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NearestConfig {
    /// Type replacing argument 0 of the message's nearest declaration
    #[serde(default)]
    pub type_override: Option<String>,

    /// Earth radius in metres, set on messages without a `radius` key
    #[serde(default = "default_radius")]
    pub radius: f64,
}

/// Complete configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Nearest configuration
    #[serde(default)]
    pub nearest: NearestConfig,

    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Config {
    /// Load configuration from all sources with proper precedence
    pub fn load() -> Result<(Self, Args)> {
        let args = Args::parse();
        let config = Self::from_args(&args)?;
        Ok((config, args))
    }

    /// Build configuration from parsed arguments and the file they name
    pub fn from_args(args: &Args) -> Result<Self> {
        let mut config = Config::default();

        if let Some(config_path) = &args.config {
            let json_config = Self::load_from_file(config_path)?;
            config.merge(json_config);
        }

        if args.type_override.is_some() {
            config.nearest.type_override = args.type_override.clone();
        }
        if let Some(radius) = args.radius {
            config.nearest.radius = radius;
        }
        if let Some(log_level) = &args.log_level {
            config.log_level = log_level.clone();
        }

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Merge another config into this one (other takes precedence)
    fn merge(&mut self, other: Config) {
        if other.nearest.type_override.is_some() {
            self.nearest.type_override = other.nearest.type_override;
        }
        self.nearest.radius = other.nearest.radius;
        self.log_level = other.log_level;
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(NearestError::Config {
                    message: format!(
                        "Invalid log level: {}. Must be one of: trace, debug, info, warn, error",
                        self.log_level
                    ),
                });
            }
        }

        if let Some(type_name) = &self.nearest.type_override {
            let registry = NearestRegistry::builtin();
            if registry.lookup(type_name).is_none() {
                return Err(NearestError::Config {
                    message: format!(
                        "Invalid nearest type: {}. Must be one of: {}",
                        type_name,
                        registry.types().collect::<Vec<_>>().join(", ")
                    ),
                });
            }
        }

        if !(self.nearest.radius.is_finite() && self.nearest.radius > 0.0) {
            return Err(NearestError::Config {
                message: format!("Radius must be positive, got {}", self.nearest.radius),
            });
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            nearest: NearestConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for NearestConfig {
    fn default() -> Self {
        Self {
            type_override: None,
            radius: default_radius(),
        }
    }
}

// Default value functions for serde
fn default_radius() -> f64 {
    6371229.0
}

fn default_log_level() -> String {
    "info".to_string()
}
