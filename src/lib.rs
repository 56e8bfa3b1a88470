#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod chain;
mod common;
pub mod config;
mod error;
mod observer;
mod pressure;
mod reading_list;
mod registry;
mod temperature;

pub use common::{
    ProcessOutcome, ReadingType, ReadingValue, Sensor, SensorKind, SensorName, SensorRecord,
};
pub use error::{ConfigError, RegistryError, SensorError};
pub use observer::{Event, LogObserver, Observer, SilentObserver};
pub use pressure::PressureSensor;
pub use reading_list::{Reading, ReadingList};
pub use registry::{ProcessReport, SensorRegistry};
pub use temperature::TemperatureSensor;
