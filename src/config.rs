//! TOML configuration for the demo driver.

use std::fs;

use serde::Deserialize;

use crate::error::ConfigError;

/// Struct holding the config info.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// The `[general]` table.
    #[serde(default)]
    pub general: General,
    /// The `[[sensors]]` entries, in order.
    #[serde(default)]
    pub sensors: Vec<SensorConfig>,
}

/// Session-wide settings.
#[derive(Debug, Default, Deserialize)]
pub struct General {
    /// How stages are printed.
    #[serde(default)]
    pub output: OutputFormat,
    /// Sensor to look up and describe once processing is done.
    pub lookup: Option<String>,
}

/// Output format of the driver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable blocks.
    #[default]
    Text,
    /// Pretty-printed JSON snapshots.
    Json,
}

/// One `[[sensors]]` entry.
#[derive(Debug, Deserialize)]
pub struct SensorConfig {
    /// Sensor identity.
    pub name: String,
    /// `temperature` or `pressure`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Readings registered before the first processing pass.
    #[serde(default)]
    pub readings: Vec<toml::Value>,
    /// Readings registered between the first and the second pass.
    #[serde(default)]
    pub extra_readings: Vec<toml::Value>,
}

/// Load the configuration.
pub fn load_config(filename: &str) -> Result<Config, ConfigError> {
    let contents: String = read_config(filename)?;
    get_config(&contents)
}

/// Reads a string from a given filename.
fn read_config(filename: &str) -> Result<String, ConfigError> {
    fs::read_to_string(filename).map_err(|source| ConfigError::Read {
        path: filename.to_string(),
        source,
    })
}

/// Parses the configuration from a string.
fn get_config(contents: &str) -> Result<Config, ConfigError> {
    Ok(toml::from_str(contents)?)
}
