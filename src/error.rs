//! Error types used by the registry, the sensors and the config loader.
//!
//! None of these are fatal: every failure leaves the affected structure
//! unchanged. Each enum offers `as_label` for a stable snake_case label in logs.

use thiserror::Error;

use crate::common::ReadingType;

/// Errors produced by [`SensorRegistry`](crate::SensorRegistry).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// An absent sensor handle was offered to the registry.
    #[error("cannot add an absent sensor; registry left unchanged")]
    MissingSensor,
}

impl RegistryError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            RegistryError::MissingSensor => "registry_missing_sensor",
        }
    }
}

/// Errors produced by a [`Sensor`](crate::Sensor).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SensorError {
    /// The value handed to `register` is not of the sensor's reading type.
    #[error("sensor '{identity}' takes {expected} readings, got {found}")]
    ReadingTypeMismatch {
        /// Identity of the sensor that refused the reading.
        identity: String,
        /// The sensor's declared reading type.
        expected: ReadingType,
        /// The type of the refused value.
        found: ReadingType,
    },
}

impl SensorError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            SensorError::ReadingTypeMismatch { .. } => "sensor_reading_type_mismatch",
        }
    }
}

/// Errors produced while loading the driver configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The config file could not be read.
    #[error("could not read config file {path}: {source}")]
    Read {
        /// Path that was tried.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid TOML for [`Config`](crate::config::Config).
    #[error("could not parse the config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// A sensor entry names a type other than `temperature` or `pressure`.
    #[error("sensor '{name}' has unknown type '{kind}'")]
    UnknownSensorType {
        /// Sensor name from the entry.
        name: String,
        /// The unknown type string.
        kind: String,
    },

    /// A configured value is not a number the sensor can hold.
    #[error("sensor '{name}' has an unusable reading: {value}")]
    InvalidReading {
        /// Sensor name from the entry.
        name: String,
        /// The offending value, as written.
        value: String,
    },

    /// The sensor refused a converted reading.
    #[error("sensor '{name}' refused a reading: {source}")]
    Sensor {
        /// Sensor name from the entry.
        name: String,
        /// Why it was refused.
        #[source]
        source: SensorError,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::Read { .. } => "config_read",
            ConfigError::Parse(_) => "config_parse",
            ConfigError::UnknownSensorType { .. } => "config_unknown_sensor_type",
            ConfigError::InvalidReading { .. } => "config_invalid_reading",
            ConfigError::Sensor { .. } => "config_sensor",
        }
    }
}
