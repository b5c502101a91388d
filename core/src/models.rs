//! Records, biometrics and computed summaries.

use std::fmt;

use chrono::Duration;
use serde::{Deserialize, Serialize};

use crate::error::{TrainingError, TrainingResult};

/// Activity category, resolved once when the record is parsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityKind {
    Walking,
    Running,
    /// Syntactically valid label that maps to no calorie model.
    Unsupported(String),
}

impl ActivityKind {
    pub fn is_supported(&self) -> bool {
        !matches!(self, ActivityKind::Unsupported(_))
    }

    /// Walking divides by height, running does not.
    pub fn needs_height(&self) -> bool {
        matches!(self, ActivityKind::Walking)
    }
}

impl fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActivityKind::Walking => f.write_str("Walking"),
            ActivityKind::Running => f.write_str("Running"),
            ActivityKind::Unsupported(label) => write!(f, "Unsupported({label})"),
        }
    }
}

/// Which textual form the record came in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RecordForm {
    /// `<steps>,<duration>`
    DailySteps,
    /// `<steps>,<label>,<duration>`
    Training,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityRecord {
    pub steps: u32,
    pub kind: ActivityKind,
    pub duration: Duration,
    pub form: RecordForm,
}

impl ActivityRecord {
    /// Duration in fractional hours.
    pub fn duration_hours(&self) -> f64 {
        self.duration.num_milliseconds() as f64 / 3_600_000.0
    }
}

/// Per-call user data. Never part of the record, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Biometrics {
    pub weight_kg: f64,
    pub height_m: Option<f64>,
}

impl Biometrics {
    pub fn new(weight_kg: f64, height_m: Option<f64>) -> Self {
        Self { weight_kg, height_m }
    }

    /// Plain-number form used by callers that pass `0.0` for "height unknown".
    pub fn from_raw(weight_kg: f64, height_m: f64) -> Self {
        let height_m = if height_m == 0.0 { None } else { Some(height_m) };
        Self { weight_kg, height_m }
    }

    /// Checks the values needed by `kind`.
    pub fn validate_for(&self, kind: &ActivityKind) -> TrainingResult<()> {
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(TrainingError::InvalidBiometrics(format!(
                "weight must be > 0 kg, got {}",
                self.weight_kg
            )));
        }
        match self.height_m {
            Some(h) if !h.is_finite() || h <= 0.0 => Err(TrainingError::InvalidBiometrics(
                format!("height must be > 0 m, got {h}"),
            )),
            None if kind.needs_height() => Err(TrainingError::InvalidBiometrics(format!(
                "height is required for {kind}"
            ))),
            _ => Ok(()),
        }
    }
}

/// Result of one computation. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComputedSummary {
    pub kind: ActivityKind,
    pub steps: u32,
    pub duration_hours: f64,
    pub step_length_m: f64,
    pub distance_km: f64,
    pub speed_kmh: f64,
    pub calories: f64,
}
