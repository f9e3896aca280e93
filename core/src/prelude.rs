use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// One row of a recorded trajectory log.
///
/// Units are fixed: seconds since the Unix epoch, WGS84 degrees and
/// kilometers of ellipsoidal height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeodeticSample {
    pub time: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Earth-centered Earth-fixed position in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EcefPosition {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// What the undefined velocity of the first sample becomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstSamplePolicy {
    /// Report zero, matching the historical logs.
    #[default]
    Zero,
    /// Report NaN.
    #[serde(alias = "NaN")]
    Nan,
    /// Omit the first sample from the series.
    Drop,
}

impl FromStr for FirstSamplePolicy {
    type Err = TrajectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "nan" => Ok(Self::Nan),
            "drop" => Ok(Self::Drop),
            other => Err(TrajectoryError::Schema(format!(
                "unknown first-sample policy '{other}' (expected zero, nan or drop)"
            ))),
        }
    }
}

/// Classification of a single velocity value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleStatus {
    Finite,
    Infinite,
    NotANumber,
}

impl SampleStatus {
    pub fn classify(value: f64) -> Self {
        if value.is_nan() {
            Self::NotANumber
        } else if value.is_infinite() {
            Self::Infinite
        } else {
            Self::Finite
        }
    }

    pub fn is_finite(self) -> bool {
        self == Self::Finite
    }
}

/// A requested query time, kept in the form the caller wrote it so reports
/// render it the same way.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TimeRequest {
    Integer(i64),
    Float(f64),
}

impl TimeRequest {
    pub fn seconds(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Float(value) => value,
        }
    }
}

impl From<i64> for TimeRequest {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for TimeRequest {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl FromStr for TimeRequest {
    type Err = TrajectoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(value) = trimmed.parse::<i64>() {
            return Ok(Self::Integer(value));
        }
        trimmed
            .parse::<f64>()
            .map(Self::Float)
            .map_err(|err| TrajectoryError::Parse {
                record: 0,
                message: format!("invalid query time '{trimmed}': {err}"),
            })
    }
}

impl fmt::Display for TimeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Float(value) => f.write_str(&crate::report::format_decimal(*value)),
        }
    }
}

/// Common error type for the trajectory pipeline.
///
/// Non-finite velocities are not errors; they stay in the numeric output and
/// are reported through [`SampleStatus`].
#[derive(thiserror::Error, Debug)]
pub enum TrajectoryError {
    #[error("input not found or unreadable: {path}")]
    InputNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("schema error: {0}")]
    Schema(String),
    #[error("parse error at record {record}: {message}")]
    Parse { record: usize, message: String },
    #[error("query time {requested} outside sampled range [{min}, {max}]")]
    Domain { requested: f64, min: f64, max: f64 },
    #[error("length mismatch: {0}")]
    LengthMismatch(String),
    #[error("insufficient samples: {0}")]
    InsufficientSamples(String),
    #[error("time breakpoints out of order: {0}")]
    UnorderedTime(String),
    #[error("report sink {target} failed")]
    Sink {
        target: String,
        #[source]
        source: std::io::Error,
    },
}

pub type TrajectoryResult<T> = Result<T, TrajectoryError>;

pub(crate) fn ensure_same_length(
    label: &str,
    expected: usize,
    actual: usize,
) -> TrajectoryResult<()> {
    if expected != actual {
        return Err(TrajectoryError::LengthMismatch(format!(
            "{label} has {actual} values, expected {expected}"
        )));
    }
    Ok(())
}
