//! Owning registry of heterogeneous sensors.
//!
//! Sensors are kept in insertion order in a singly-linked chain of
//! `Box<dyn Sensor>` handles. Broadcast operations walk the chain front to
//! back and dispatch through the [`Sensor`] trait. Dropping the registry
//! tears it down: each sensor (and with it its readings) is released before
//! the node that held it.

use crate::chain::Chain;
use crate::common::{ProcessOutcome, Sensor, SensorRecord};
use crate::error::RegistryError;
use crate::observer::{Event, LogObserver, Observer};

/// Outcome of processing one sensor during [`SensorRegistry::process_all`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ProcessReport {
    /// Identity of the processed sensor.
    pub identity: String,
    /// What processing did.
    #[serde(flatten)]
    pub outcome: ProcessOutcome,
}

/// Owns every registered sensor, in insertion order.
pub struct SensorRegistry {
    sensors: Chain<Box<dyn Sensor>>,
    observer: Box<dyn Observer>,
}

impl SensorRegistry {
    /// Creates an empty registry reporting through [`LogObserver`].
    pub fn new() -> SensorRegistry {
        SensorRegistry::with_observer(Box::new(LogObserver))
    }

    /// Creates an empty registry reporting through `observer`.
    pub fn with_observer(observer: Box<dyn Observer>) -> SensorRegistry {
        SensorRegistry {
            sensors: Chain::new(),
            observer,
        }
    }

    /// Appends `sensor` at the tail.
    ///
    /// An absent handle is refused with [`RegistryError::MissingSensor`] and
    /// the registry is left as it was.
    pub fn add(&mut self, sensor: Option<Box<dyn Sensor>>) -> Result<(), RegistryError> {
        let Some(sensor) = sensor else {
            self.observer.on_event(&Event::SensorRejected);
            return Err(RegistryError::MissingSensor);
        };
        self.push(sensor);
        Ok(())
    }

    /// Takes ownership of a concrete sensor; this cannot fail.
    pub fn add_sensor<S: Sensor + 'static>(&mut self, sensor: S) {
        self.push(Box::new(sensor));
    }

    fn push(&mut self, sensor: Box<dyn Sensor>) {
        self.observer.on_event(&Event::SensorAdded {
            identity: sensor.identity(),
            kind: sensor.kind(),
        });
        self.sensors.push_back(sensor);
    }

    /// First sensor whose identity equals `name` exactly.
    pub fn find_by_name(&self, name: &str) -> Option<&dyn Sensor> {
        self.sensors
            .iter()
            .find(|sensor| sensor.identity() == name)
            .map(|sensor| &**sensor)
    }

    /// Mutable variant of [`SensorRegistry::find_by_name`].
    pub fn find_by_name_mut(&mut self, name: &str) -> Option<&mut dyn Sensor> {
        for sensor in self.sensors.iter_mut() {
            if sensor.identity() == name {
                return Some(&mut **sensor);
            }
        }
        None
    }

    /// Runs `process` on every sensor in insertion order.
    pub fn process_all(&mut self) -> Vec<ProcessReport> {
        if self.sensors.is_empty() {
            self.observer.on_event(&Event::NoSensors);
            return Vec::new();
        }
        let mut reports = Vec::with_capacity(self.sensors.len());
        for sensor in self.sensors.iter_mut() {
            let outcome = sensor.process();
            self.observer.on_event(&Event::Processed {
                identity: sensor.identity(),
                outcome,
            });
            reports.push(ProcessReport {
                identity: sensor.identity().to_string(),
                outcome,
            });
        }
        reports
    }

    /// Describes every sensor in insertion order.
    pub fn describe_all(&self) -> Vec<SensorRecord> {
        self.sensors.iter().map(|sensor| sensor.describe()).collect()
    }

    /// Number of registered sensors.
    pub fn len(&self) -> usize {
        self.sensors.len()
    }

    /// True when no sensor is registered.
    pub fn is_empty(&self) -> bool {
        self.sensors.is_empty()
    }

    /// Releases every sensor front to back, leaving the registry empty.
    ///
    /// Calling it on an empty registry does nothing.
    pub fn teardown(&mut self) {
        if self.sensors.is_empty() {
            return;
        }
        let mut released = 0;
        while let Some(sensor) = self.sensors.pop_front() {
            self.observer.on_event(&Event::SensorReleased {
                identity: sensor.identity(),
                readings: sensor.len(),
            });
            drop(sensor);
            released += 1;
        }
        self.observer
            .on_event(&Event::TeardownComplete { released });
    }
}

impl Default for SensorRegistry {
    fn default() -> Self {
        SensorRegistry::new()
    }
}

impl Drop for SensorRegistry {
    fn drop(&mut self) {
        self.teardown();
    }
}
