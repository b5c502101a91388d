//! Step length, distance and mean speed.

use log::warn;

use crate::config::{CalcConfig, StepLengthPolicy, M_IN_KM};
use crate::error::{TrainingError, TrainingResult};

/// Rounds to a fixed number of decimals.
pub trait RoundTo {
    fn round_to(self, dp: u32) -> f64;
}

impl RoundTo for f64 {
    #[inline]
    fn round_to(self, dp: u32) -> f64 {
        if dp == 0 { return self.round(); }
        let factor = 10_f64.powi(dp as i32);
        (self * factor).round() / factor
    }
}

/// Step length (m) for the given policy.
///
/// `Auto` prefers the height-derived length and falls back to the fixed one
/// when height is unknown.
pub fn step_length_m(
    policy: StepLengthPolicy,
    height_m: Option<f64>,
    cfg: &CalcConfig,
) -> TrainingResult<f64> {
    match (policy, height_m) {
        (StepLengthPolicy::Fixed, _) => Ok(cfg.fixed_step_length_m),
        (StepLengthPolicy::Auto, None) => Ok(cfg.fixed_step_length_m),
        (_, Some(h)) if h.is_finite() && h > 0.0 => Ok(h * cfg.height_step_factor),
        (_, Some(h)) => Err(TrainingError::InvalidBiometrics(format!(
            "height must be > 0 m, got {h}"
        ))),
        (StepLengthPolicy::HeightDerived, None) => Err(TrainingError::InvalidBiometrics(
            "height is required for height-derived step length".to_string(),
        )),
    }
}

/// Distance (km) = steps * step length / 1000.
#[inline]
pub fn distance_km(steps: u32, step_length_m: f64) -> f64 {
    let d = f64::from(steps) * step_length_m / M_IN_KM;
    if d.is_finite() { d.max(0.0) } else { 0.0 }
}

/// Mean speed (km/h). A non-positive duration returns 0; the parser should
/// already have rejected it, so reaching this guard means validation was skipped.
#[inline]
pub fn mean_speed_kmh(distance_km: f64, duration_hours: f64) -> f64 {
    if !duration_hours.is_finite() || duration_hours <= 0.0 {
        warn!("mean speed requested for non-positive duration {duration_hours} h, returning 0");
        return 0.0;
    }
    let v = distance_km / duration_hours;
    if v.is_finite() { v.max(0.0) } else { 0.0 }
}
