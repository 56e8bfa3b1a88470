//! Sensor capability and the value types that flow through it.

use std::fmt;

use serde::Serialize;

use crate::error::SensorError;

/// Bounded sensor identity.
///
/// Names longer than [`SensorName::MAX_LEN`] characters are silently cut at
/// that length. Truncation counts `char`s, so the stored name is always valid.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct SensorName(String);

impl SensorName {
    /// Longest identity kept, in characters.
    pub const MAX_LEN: usize = 49;

    /// Keeps at most [`SensorName::MAX_LEN`] characters of `name`.
    pub fn new(name: &str) -> SensorName {
        SensorName(name.chars().take(Self::MAX_LEN).collect())
    }

    /// The stored, possibly truncated, name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SensorName {
    fn from(name: &str) -> Self {
        SensorName::new(name)
    }
}

impl fmt::Display for SensorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The closed set of sensor variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKind {
    /// Integer readings in kPa.
    Pressure,
    /// Floating point readings in °C.
    Temperature,
}

impl SensorKind {
    /// The reading type every sensor of this kind stores.
    pub const fn reading_type(&self) -> ReadingType {
        match self {
            SensorKind::Pressure => ReadingType::Integer,
            SensorKind::Temperature => ReadingType::Float,
        }
    }

    /// Display unit of the readings.
    pub const fn unit(&self) -> &'static str {
        match self {
            SensorKind::Pressure => "kPa",
            SensorKind::Temperature => "°C",
        }
    }
}

impl fmt::Display for SensorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorKind::Pressure => f.write_str("pressure"),
            SensorKind::Temperature => f.write_str("temperature"),
        }
    }
}

/// Declared scalar type of a sensor's readings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ReadingType {
    /// `i32` readings.
    #[serde(rename = "int")]
    Integer,
    /// `f32` readings.
    #[serde(rename = "float")]
    Float,
}

impl fmt::Display for ReadingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingType::Integer => f.write_str("int"),
            ReadingType::Float => f.write_str("float"),
        }
    }
}

/// A single reading with its type erased, as passed through [`Sensor`].
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ReadingValue {
    /// A pressure reading.
    Integer(i32),
    /// A temperature reading.
    Float(f32),
}

impl ReadingValue {
    /// The type tag of the wrapped value.
    pub const fn reading_type(&self) -> ReadingType {
        match self {
            ReadingValue::Integer(_) => ReadingType::Integer,
            ReadingValue::Float(_) => ReadingType::Float,
        }
    }
}

impl From<i32> for ReadingValue {
    fn from(value: i32) -> Self {
        ReadingValue::Integer(value)
    }
}

impl From<f32> for ReadingValue {
    fn from(value: f32) -> Self {
        ReadingValue::Float(value)
    }
}

impl fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingValue::Integer(value) => write!(f, "{}", value),
            ReadingValue::Float(value) => write!(f, "{}", value),
        }
    }
}

/// What a call to [`Sensor::process`] did.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ProcessOutcome {
    /// The sensor holds no readings; nothing changed.
    NothingToProcess,
    /// The average over `count` readings; nothing was removed.
    Averaged {
        /// Readings averaged.
        count: usize,
        /// Their average.
        average: ReadingValue,
    },
    /// The minimum was dropped before averaging what is left.
    MinimumRemoved {
        /// The dropped minimum.
        removed: ReadingValue,
        /// Readings left afterwards.
        remaining: usize,
        /// Average of the remaining readings.
        average: ReadingValue,
    },
}

/// Display record produced by [`Sensor::describe`].
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SensorRecord {
    /// Sensor identity.
    pub identity: String,
    /// Sensor variant.
    pub kind: SensorKind,
    /// Declared reading type.
    pub reading_type: ReadingType,
    /// Readings currently stored.
    pub count: usize,
    /// Absent when the sensor holds no readings.
    pub average: Option<ReadingValue>,
    /// Display unit of the readings.
    pub unit: &'static str,
}

/// Defines a sensor owning a history of readings of one scalar type.
pub trait Sensor {
    /// The sensor's bounded name.
    fn identity(&self) -> &str;

    /// Which variant this sensor is.
    fn kind(&self) -> SensorKind;

    /// Declared reading type, fixed by the kind.
    fn reading_type(&self) -> ReadingType {
        self.kind().reading_type()
    }

    /// Number of readings currently stored.
    fn len(&self) -> usize;

    /// True when no readings are stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Stores `value` if it matches the sensor's reading type.
    fn register(&mut self, value: ReadingValue) -> Result<(), SensorError>;

    /// Runs the variant's processing over the stored readings.
    fn process(&mut self) -> ProcessOutcome;

    /// Snapshot of identity, type tag, count and current average.
    fn describe(&self) -> SensorRecord;
}
