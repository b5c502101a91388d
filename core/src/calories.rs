//! Calorie models per activity kind.

use crate::config::{CalcConfig, MIN_IN_H};
use crate::error::{TrainingError, TrainingResult};
use crate::models::ActivityKind;

/// Everything a calorie model may look at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieInput {
    pub steps: u32,
    pub weight_kg: f64,
    pub height_m: Option<f64>,
    pub duration_hours: f64,
    pub mean_speed_kmh: f64,
}

impl CalorieInput {
    /// Preconditions shared by all models. Failing them is an error, not 0 kcal.
    fn check_common(&self) -> TrainingResult<()> {
        if self.steps == 0 {
            return Err(TrainingError::InvalidBiometrics("step count must be > 0".into()));
        }
        if !self.weight_kg.is_finite() || self.weight_kg <= 0.0 {
            return Err(TrainingError::InvalidBiometrics(format!(
                "weight must be > 0 kg, got {}",
                self.weight_kg
            )));
        }
        if !self.duration_hours.is_finite() || self.duration_hours <= 0.0 {
            return Err(TrainingError::InvalidBiometrics(format!(
                "duration must be > 0 h, got {}",
                self.duration_hours
            )));
        }
        if !self.mean_speed_kmh.is_finite() || self.mean_speed_kmh < 0.0 {
            return Err(TrainingError::InvalidBiometrics(format!(
                "mean speed must be >= 0 km/h, got {}",
                self.mean_speed_kmh
            )));
        }
        Ok(())
    }
}

pub trait CalorieEstimator {
    fn estimate(&self, input: &CalorieInput) -> TrainingResult<f64>;
}

/// `(18 * v - 20) * weight`, floored at 0 unless clamping is disabled.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunningCalories {
    pub speed_multiplier: f64,
    pub speed_shift: f64,
    pub clamp_negative: bool,
}

impl RunningCalories {
    pub fn from_config(cfg: &CalcConfig) -> Self {
        Self {
            speed_multiplier: cfg.running_speed_multiplier,
            speed_shift: cfg.running_speed_shift,
            clamp_negative: cfg.clamp_negative_calories,
        }
    }
}

impl Default for RunningCalories {
    fn default() -> Self {
        Self::from_config(&CalcConfig::default())
    }
}

impl CalorieEstimator for RunningCalories {
    fn estimate(&self, input: &CalorieInput) -> TrainingResult<f64> {
        input.check_common()?;
        let raw = (self.speed_multiplier * input.mean_speed_kmh - self.speed_shift) * input.weight_kg;
        Ok(if self.clamp_negative { raw.max(0.0) } else { raw })
    }
}

/// `(0.035 * weight + v² / height * 0.029) * hours * 60`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WalkingCalories {
    pub weight_multiplier: f64,
    pub speed_height_multiplier: f64,
}

impl WalkingCalories {
    pub fn from_config(cfg: &CalcConfig) -> Self {
        Self {
            weight_multiplier: cfg.walking_weight_multiplier,
            speed_height_multiplier: cfg.walking_speed_height_multiplier,
        }
    }
}

impl Default for WalkingCalories {
    fn default() -> Self {
        Self::from_config(&CalcConfig::default())
    }
}

impl CalorieEstimator for WalkingCalories {
    fn estimate(&self, input: &CalorieInput) -> TrainingResult<f64> {
        input.check_common()?;
        let height = match input.height_m {
            Some(h) if h.is_finite() && h > 0.0 => h,
            Some(h) => {
                return Err(TrainingError::InvalidBiometrics(format!(
                    "height must be > 0 m, got {h}"
                )))
            }
            None => {
                return Err(TrainingError::InvalidBiometrics(
                    "height is required for walking calories".into(),
                ))
            }
        };
        let v = input.mean_speed_kmh;
        let kcal = (self.weight_multiplier * input.weight_kg
            + (v * v / height) * self.speed_height_multiplier)
            * input.duration_hours
            * MIN_IN_H;
        Ok(kcal.max(0.0))
    }
}

/// Dispatches to the model for `kind`.
pub fn estimate_calories(
    kind: &ActivityKind,
    input: &CalorieInput,
    cfg: &CalcConfig,
) -> TrainingResult<f64> {
    match kind {
        ActivityKind::Running => RunningCalories::from_config(cfg).estimate(input),
        ActivityKind::Walking => WalkingCalories::from_config(cfg).estimate(input),
        ActivityKind::Unsupported(label) => Err(TrainingError::UnsupportedActivity(label.clone())),
    }
}
