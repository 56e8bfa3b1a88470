use std::env;

use anyhow::Context;
use serde::Serialize;

use sensor_registry::config::{self, OutputFormat, SensorConfig};
use sensor_registry::{
    ConfigError, PressureSensor, ProcessOutcome, ProcessReport, ReadingValue, Sensor, SensorKind,
    SensorRecord, SensorRegistry, TemperatureSensor,
};

/// Turns a configured value into a reading for a sensor of the given kind.
///
/// Integers are accepted by temperature sensors as well; floats are passed
/// through and refused later by pressure sensors. A value that does not fit
/// the sensor's type (including NaN and infinities) is rejected.
fn to_reading(
    name: &str,
    kind: SensorKind,
    value: &toml::Value,
) -> Result<ReadingValue, ConfigError> {
    let invalid = || ConfigError::InvalidReading {
        name: name.to_string(),
        value: value.to_string(),
    };
    match (kind, value) {
        (SensorKind::Pressure, toml::Value::Integer(v)) => {
            i32::try_from(*v).map(ReadingValue::Integer).map_err(|_| invalid())
        }
        (SensorKind::Temperature, toml::Value::Integer(v)) => {
            finite(*v as f32).ok_or_else(invalid)
        }
        (_, toml::Value::Float(v)) => finite(*v as f32).ok_or_else(invalid),
        _ => Err(invalid()),
    }
}

fn finite(value: f32) -> Option<ReadingValue> {
    value.is_finite().then_some(ReadingValue::Float(value))
}

/// Registers every configured value with the sensor.
fn feed_readings(sensor: &mut dyn Sensor, values: &[toml::Value]) -> Result<(), ConfigError> {
    for value in values {
        let reading = to_reading(sensor.identity(), sensor.kind(), value)?;
        log::info!(
            "[{}] registering {} reading: {} {}",
            sensor.identity(),
            sensor.kind(),
            reading,
            sensor.kind().unit()
        );
        sensor
            .register(reading)
            .map_err(|source| ConfigError::Sensor {
                name: sensor.identity().to_string(),
                source,
            })?;
    }
    Ok(())
}

/// Instantiates the right sensor type based on the config.
fn create_sensor(sensor_cfg: &SensorConfig) -> Result<Box<dyn Sensor>, ConfigError> {
    let mut sensor: Box<dyn Sensor> = match sensor_cfg.kind.as_str() {
        "temperature" => Box::new(TemperatureSensor::new(&sensor_cfg.name)),
        "pressure" => Box::new(PressureSensor::new(&sensor_cfg.name)),
        other => {
            return Err(ConfigError::UnknownSensorType {
                name: sensor_cfg.name.clone(),
                kind: other.to_string(),
            })
        }
    };
    feed_readings(&mut *sensor, &sensor_cfg.readings)?;
    Ok(sensor)
}

fn render_record(record: &SensorRecord) -> String {
    let mut out = format!(
        "=== {} sensor ===\nID: {}\nType: {} ({})\nStored readings: {}",
        record.kind, record.identity, record.kind, record.reading_type, record.count
    );
    if let Some(average) = record.average {
        out.push_str(&format!("\nCurrent average: {} {}", average, record.unit));
    }
    out
}

fn render_report(report: &ProcessReport) -> String {
    match report.outcome {
        ProcessOutcome::NothingToProcess => format!("{}: no readings to process", report.identity),
        ProcessOutcome::Averaged { count, average } => format!(
            "{}: average over {} reading(s): {}",
            report.identity, count, average
        ),
        ProcessOutcome::MinimumRemoved {
            removed,
            remaining,
            average,
        } => format!(
            "{}: lowest reading ({}) removed, average of remaining {}: {}",
            report.identity, removed, remaining, average
        ),
    }
}

#[derive(Serialize)]
struct Snapshot<'a, T: Serialize> {
    generated_at: String,
    stage: &'a str,
    entries: &'a [T],
}

/// Writes one stage of the session to stdout.
fn emit<T: Serialize>(
    output: OutputFormat,
    stage: &str,
    entries: &[T],
    render: fn(&T) -> String,
) -> anyhow::Result<()> {
    match output {
        OutputFormat::Text => {
            println!("\n========== {} ==========", stage);
            if entries.is_empty() {
                println!("no sensors registered.");
            }
            for (i, entry) in entries.iter().enumerate() {
                println!("[{}] {}", i + 1, render(entry));
            }
        }
        OutputFormat::Json => {
            let snapshot = Snapshot {
                generated_at: chrono::Utc::now().to_rfc3339(),
                stage,
                entries,
            };
            println!("{}", serde_json::to_string_pretty(&snapshot)?);
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // Load the configuration.
    let cfg_file: String =
        env::var("SENSOR_CONFIG").unwrap_or_else(|_| String::from("defaults.toml"));
    let cfg = config::load_config(&cfg_file)
        .with_context(|| format!("could not load configuration from {}", cfg_file))?;
    let output = cfg.general.output;

    // create the sensors with their initial readings.
    let mut registry = SensorRegistry::new();
    let mut identities: Vec<String> = Vec::new();
    for sensor_cfg in &cfg.sensors {
        let sensor = create_sensor(sensor_cfg)?;
        identities.push(sensor.identity().to_string());
        registry.add(Some(sensor))?;
    }
    emit(output, "Registered sensors", &registry.describe_all(), render_record)?;
    emit(output, "Processing", &registry.process_all(), render_report)?;

    // second round of readings; duplicate names all go to the first match.
    for (identity, sensor_cfg) in identities.iter().zip(&cfg.sensors) {
        if let Some(sensor) = registry.find_by_name_mut(identity) {
            feed_readings(sensor, &sensor_cfg.extra_readings)?;
        }
    }
    emit(output, "Processing", &registry.process_all(), render_report)?;

    if let Some(name) = &cfg.general.lookup {
        match registry.find_by_name(name) {
            Some(sensor) => emit(output, "Lookup", &[sensor.describe()], render_record)?,
            None => log::warn!("[lookup] sensor={} not found", name),
        }
    }

    registry.teardown();
    Ok(())
}
