use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Instant of a sensor reading as it arrives in evaluation files.
///
/// Text is ISO-8601 (with or without offset; naive values are read as UTC).
/// Integers are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    EpochMillis(i64),
    Text(String),
}

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

impl Timestamp {
    /// Milliseconds since the epoch, or None when the text is not a timestamp.
    pub fn to_millis(&self) -> Option<i64> {
        match self {
            Timestamp::EpochMillis(ms) => Some(*ms),
            Timestamp::Text(text) => parse_text(text).map(|dt| dt.and_utc().timestamp_millis()),
        }
    }

    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Timestamp::EpochMillis(ms) => DateTime::from_timestamp_millis(*ms).map(|dt| dt.date_naive()),
            Timestamp::Text(text) => parse_text(text).map(|dt| dt.date()),
        }
    }
}

fn parse_text(text: &str) -> Option<NaiveDateTime> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.naive_utc());
    }
    NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
}

impl From<&str> for Timestamp {
    fn from(value: &str) -> Self {
        Timestamp::Text(value.to_string())
    }
}

impl From<String> for Timestamp {
    fn from(value: String) -> Self {
        Timestamp::Text(value)
    }
}

impl From<i64> for Timestamp {
    fn from(value: i64) -> Self {
        Timestamp::EpochMillis(value)
    }
}

/// One inertial reading: three-axis accelerometer (m/s²) and gyroscope.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorSample {
    #[serde(alias = "time")]
    pub timestamp: Timestamp,
    #[serde(alias = "accelX")]
    pub accel_x: f64,
    #[serde(alias = "accelY")]
    pub accel_y: f64,
    #[serde(alias = "accelZ")]
    pub accel_z: f64,
    #[serde(alias = "gyroX")]
    pub gyro_x: f64,
    #[serde(alias = "gyroY")]
    pub gyro_y: f64,
    #[serde(alias = "gyroZ")]
    pub gyro_z: f64,
}

impl SensorSample {
    pub fn new(timestamp: impl Into<Timestamp>, accel: [f64; 3], gyro: [f64; 3]) -> Self {
        Self {
            timestamp: timestamp.into(),
            accel_x: accel[0],
            accel_y: accel[1],
            accel_z: accel[2],
            gyro_x: gyro[0],
            gyro_y: gyro[1],
            gyro_z: gyro[2],
        }
    }

    pub fn accel_magnitude(&self) -> f64 {
        (self.accel_x * self.accel_x + self.accel_y * self.accel_y + self.accel_z * self.accel_z)
            .sqrt()
    }
}
