use crate::common::{ProcessOutcome, ReadingValue, Sensor, SensorKind, SensorName, SensorRecord};
use crate::error::SensorError;
use crate::reading_list::ReadingList;

/// Temperature sensor holding floating point readings (°C).
///
/// While more than one reading is stored, every `process` call permanently
/// drops the current minimum and reports the average of what remains. With a
/// single reading left it only reports.
pub struct TemperatureSensor {
    name: SensorName,
    readings: ReadingList<f32>,
}

impl TemperatureSensor {
    /// Creates a sensor with no readings; `name` is cut to [`SensorName::MAX_LEN`].
    pub fn new(name: &str) -> TemperatureSensor {
        TemperatureSensor {
            name: SensorName::new(name),
            readings: ReadingList::new(),
        }
    }

    /// Appends a reading in °C.
    pub fn register_reading(&mut self, value: f32) {
        self.readings.insert(value);
    }

    /// The stored readings, oldest first.
    pub fn readings(&self) -> &ReadingList<f32> {
        &self.readings
    }
}

impl Sensor for TemperatureSensor {
    fn identity(&self) -> &str {
        self.name.as_str()
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Temperature
    }

    fn len(&self) -> usize {
        self.readings.len()
    }

    fn register(&mut self, value: ReadingValue) -> Result<(), SensorError> {
        match value {
            ReadingValue::Float(value) => {
                self.register_reading(value);
                Ok(())
            }
            other => Err(SensorError::ReadingTypeMismatch {
                identity: self.name.to_string(),
                expected: self.reading_type(),
                found: other.reading_type(),
            }),
        }
    }

    fn process(&mut self) -> ProcessOutcome {
        match self.readings.len() {
            0 => ProcessOutcome::NothingToProcess,
            1 => ProcessOutcome::Averaged {
                count: 1,
                average: self.readings.average().into(),
            },
            _ => {
                let removed = self.readings.remove_minimum();
                ProcessOutcome::MinimumRemoved {
                    removed: removed.into(),
                    remaining: self.readings.len(),
                    average: self.readings.average().into(),
                }
            }
        }
    }

    fn describe(&self) -> SensorRecord {
        SensorRecord {
            identity: self.name.to_string(),
            kind: self.kind(),
            reading_type: self.reading_type(),
            count: self.readings.len(),
            average: (!self.readings.is_empty()).then(|| self.readings.average().into()),
            unit: self.kind().unit(),
        }
    }
}
