//! # Observer: injected reporting for the registry
//!
//! The registry never prints. Everything worth reporting is turned into an
//! [`Event`] and handed to the [`Observer`] it was built with:
//!
//! ```text
//!   SensorRegistry::add / process_all / teardown
//!        └─► Observer::on_event(&Event)
//!                 ├─► LogObserver     (log facade)
//!                 ├─► SilentObserver  (discard)
//!                 └─► custom observer (user logic)
//! ```
//!
//! # Example: custom observer
//! ```
//! use sensor_registry::{Event, Observer, SensorRegistry, TemperatureSensor};
//!
//! struct Counter(std::cell::Cell<usize>);
//!
//! impl Observer for Counter {
//!     fn on_event(&self, event: &Event<'_>) {
//!         if let Event::SensorAdded { .. } = event {
//!             self.0.set(self.0.get() + 1);
//!         }
//!     }
//! }
//!
//! let mut registry = SensorRegistry::with_observer(Box::new(Counter(Default::default())));
//! registry.add_sensor(TemperatureSensor::new("T-001"));
//! ```

use crate::common::{ProcessOutcome, SensorKind};

/// Something the registry did.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Event<'a> {
    /// A sensor was appended to the registry.
    SensorAdded {
        /// Identity of the new sensor.
        identity: &'a str,
        /// Its variant.
        kind: SensorKind,
    },
    /// An absent sensor handle was refused.
    SensorRejected,
    /// A sensor ran its processing step.
    Processed {
        /// Identity of the processed sensor.
        identity: &'a str,
        /// What processing did.
        outcome: ProcessOutcome,
    },
    /// A broadcast found no sensors to work on.
    NoSensors,
    /// A sensor and its readings are about to be released.
    SensorReleased {
        /// Identity of the released sensor.
        identity: &'a str,
        /// Readings released with it.
        readings: usize,
    },
    /// Teardown finished; `released` sensors were dropped.
    TeardownComplete {
        /// Number of sensors dropped.
        released: usize,
    },
}

/// Receives every [`Event`] emitted by a registry.
pub trait Observer {
    /// Called once per event, synchronously.
    fn on_event(&self, event: &Event<'_>);
}

/// Forwards events to the `log` facade.
pub struct LogObserver;

impl Observer for LogObserver {
    fn on_event(&self, event: &Event<'_>) {
        match event {
            Event::SensorAdded { identity, kind } => {
                log::info!("[added] sensor={identity} kind={kind}");
            }
            Event::SensorRejected => {
                log::warn!("[rejected] cannot add an absent sensor");
            }
            Event::Processed { identity, outcome } => match outcome {
                ProcessOutcome::NothingToProcess => {
                    log::info!("[processed] sensor={identity} nothing to process");
                }
                ProcessOutcome::Averaged { count, average } => {
                    log::info!("[processed] sensor={identity} average={average} over={count}");
                }
                ProcessOutcome::MinimumRemoved {
                    removed,
                    remaining,
                    average,
                } => {
                    log::info!(
                        "[processed] sensor={identity} removed_min={removed} average={average} over={remaining}"
                    );
                }
            },
            Event::NoSensors => {
                log::warn!("[no-sensors] nothing registered");
            }
            Event::SensorReleased { identity, readings } => {
                log::debug!("[released] sensor={identity} readings={readings}");
            }
            Event::TeardownComplete { released } => {
                log::info!("[teardown] released={released}");
            }
        }
    }
}

/// Discards every event.
pub struct SilentObserver;

impl Observer for SilentObserver {
    fn on_event(&self, _event: &Event<'_>) {}
}
