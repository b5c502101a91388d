//! Orchestration: raw record to summary.

use log::debug;

use crate::calories::{estimate_calories, CalorieInput};
use crate::config::{CalcConfig, StepLengthPolicy};
use crate::error::{TrainingError, TrainingResult};
use crate::models::{ActivityKind, ActivityRecord, Biometrics, ComputedSummary};
use crate::parser::parse_record;
use crate::physics::{distance_km, mean_speed_kmh, step_length_m};

/// Raw record + biometrics → [`ComputedSummary`].
///
/// Holds only its config; every call is independent, so one instance can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct TrainingInfoService {
    config: CalcConfig,
}

impl TrainingInfoService {
    pub fn new(config: CalcConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalcConfig {
        &self.config
    }

    /// `height_m == 0.0` means "not supplied"; running then falls back to the
    /// fixed step length, walking fails.
    pub fn compute(&self, raw: &str, weight_kg: f64, height_m: f64) -> TrainingResult<ComputedSummary> {
        self.compute_with(raw, &Biometrics::from_raw(weight_kg, height_m))
    }

    pub fn compute_with(&self, raw: &str, bio: &Biometrics) -> TrainingResult<ComputedSummary> {
        let record = parse_record(raw)?;
        self.summarize(&record, bio)
    }

    /// Daily-steps semantics: always the fixed step length, whatever the policy.
    pub fn compute_day_steps(&self, raw: &str, weight_kg: f64, height_m: f64) -> TrainingResult<ComputedSummary> {
        let record = parse_record(raw)?;
        self.summarize_with_policy(
            &record,
            &Biometrics::from_raw(weight_kg, height_m),
            StepLengthPolicy::Fixed,
        )
    }

    pub fn summarize(&self, record: &ActivityRecord, bio: &Biometrics) -> TrainingResult<ComputedSummary> {
        self.summarize_with_policy(record, bio, self.config.step_length_policy)
    }

    fn summarize_with_policy(
        &self,
        record: &ActivityRecord,
        bio: &Biometrics,
        policy: StepLengthPolicy,
    ) -> TrainingResult<ComputedSummary> {
        bio.validate_for(&record.kind)?;
        if let ActivityKind::Unsupported(label) = &record.kind {
            return Err(TrainingError::UnsupportedActivity(label.clone()));
        }

        let cfg = &self.config;
        let duration_hours = record.duration_hours();
        let step_length = step_length_m(policy, bio.height_m, cfg)?;
        let distance = distance_km(record.steps, step_length);
        let speed = mean_speed_kmh(distance, duration_hours);

        let input = CalorieInput {
            steps: record.steps,
            weight_kg: bio.weight_kg,
            height_m: bio.height_m,
            duration_hours,
            mean_speed_kmh: speed,
        };
        let calories = estimate_calories(&record.kind, &input, cfg)?;

        let summary = ComputedSummary {
            kind: record.kind.clone(),
            steps: record.steps,
            duration_hours,
            step_length_m: step_length,
            distance_km: distance,
            speed_kmh: speed,
            calories,
        };
        debug!("computed summary: {summary:?}");
        Ok(summary)
    }
}
