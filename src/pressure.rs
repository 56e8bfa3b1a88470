use crate::common::{ProcessOutcome, ReadingValue, Sensor, SensorKind, SensorName, SensorRecord};
use crate::error::SensorError;
use crate::reading_list::ReadingList;

/// Pressure sensor holding integer readings (kPa).
///
/// Processing only reports the truncated integer average; no reading is ever
/// removed.
pub struct PressureSensor {
    name: SensorName,
    readings: ReadingList<i32>,
}

impl PressureSensor {
    /// Creates a sensor with no readings; `name` is cut to [`SensorName::MAX_LEN`].
    pub fn new(name: &str) -> PressureSensor {
        PressureSensor {
            name: SensorName::new(name),
            readings: ReadingList::new(),
        }
    }

    /// Appends a reading in kPa.
    pub fn register_reading(&mut self, value: i32) {
        self.readings.insert(value);
    }

    /// Stored readings in insertion order.
    pub fn readings(&self) -> &ReadingList<i32> {
        &self.readings
    }
}

impl Sensor for PressureSensor {
    fn identity(&self) -> &str {
        self.name.as_str()
    }

    fn kind(&self) -> SensorKind {
        SensorKind::Pressure
    }

    fn len(&self) -> usize {
        self.readings.len()
    }

    fn register(&mut self, value: ReadingValue) -> Result<(), SensorError> {
        match value {
            ReadingValue::Integer(value) => {
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
        if self.readings.is_empty() {
            return ProcessOutcome::NothingToProcess;
        }
        ProcessOutcome::Averaged {
            count: self.readings.len(),
            average: self.readings.average().into(),
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::ReadingType;

    fn sensor_with(readings: &[i32]) -> PressureSensor {
        let mut sensor = PressureSensor::new("P-105");
        for value in readings {
            sensor.register_reading(*value);
        }
        sensor
    }

    // Tests for success.

    #[test]
    fn test_register_for_success() {
        let mut sensor = PressureSensor::new("P-105");
        assert!(sensor.register(ReadingValue::Integer(80)).is_ok());
        assert_eq!(sensor.len(), 1);
    }

    // Tests for failure.

    #[test]
    fn test_register_for_failure() {
        let mut sensor = PressureSensor::new("P-105");
        let res = sensor.register(ReadingValue::Float(80.5));
        assert_eq!(
            res,
            Err(SensorError::ReadingTypeMismatch {
                identity: "P-105".to_string(),
                expected: ReadingType::Integer,
                found: ReadingType::Float,
            })
        );
        assert!(sensor.is_empty());
    }

    #[test]
    fn test_process_empty_for_failure() {
        let mut sensor = PressureSensor::new("P-105");
        assert_eq!(sensor.process(), ProcessOutcome::NothingToProcess);
        assert_eq!(sensor.len(), 0);
    }

    // Tests for sanity.

    #[test]
    fn test_process_for_sanity() {
        let mut sensor = sensor_with(&[80, 85, 82, 88]);
        let expected = ProcessOutcome::Averaged {
            count: 4,
            average: ReadingValue::Integer(83),
        };
        assert_eq!(sensor.process(), expected);
        // processing never removes pressure readings.
        assert_eq!(sensor.process(), expected);
        assert_eq!(sensor.readings().to_vec(), vec![80, 85, 82, 88]);
    }

    #[test]
    fn test_large_readings_for_sanity() {
        let mut sensor = sensor_with(&[i32::MAX, i32::MAX]);
        assert_eq!(
            sensor.describe().average,
            Some(ReadingValue::Integer(i32::MAX))
        );
        assert_eq!(
            sensor.process(),
            ProcessOutcome::Averaged {
                count: 2,
                average: ReadingValue::Integer(i32::MAX),
            }
        );
        let sensor = sensor_with(&[i32::MIN, i32::MIN]);
        assert_eq!(
            sensor.describe().average,
            Some(ReadingValue::Integer(i32::MIN))
        );
    }

    #[test]
    fn test_describe_for_sanity() {
        let sensor = sensor_with(&[80, 85, 82]);
        let record = sensor.describe();
        assert_eq!(record.identity, "P-105");
        assert_eq!(record.kind, SensorKind::Pressure);
        assert_eq!(record.reading_type, ReadingType::Integer);
        assert_eq!(record.count, 3);
        assert_eq!(record.average, Some(ReadingValue::Integer(82)));
        assert_eq!(record.unit, "kPa");

        let empty = PressureSensor::new("P-000");
        assert_eq!(empty.describe().average, None);
        assert_eq!(empty.describe().count, 0);
    }
}
