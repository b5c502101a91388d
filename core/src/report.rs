//! Text and JSON rendering of a summary.

use crate::models::ComputedSummary;
use crate::physics::RoundTo;

/// Output style for [`render_output`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Training,
    DaySteps,
    /// Pretty JSON, floats rounded to 2 decimals.
    Json,
}

/// Renders `s` in the requested format.
pub fn render_output(s: &ComputedSummary, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Training => Ok(render_training_info(s)),
        OutputFormat::DaySteps => Ok(render_day_steps(s)),
        OutputFormat::Json => serde_json::to_string_pretty(&rounded(s, 2)).map(|j| j + "\n"),
    }
}

/// Training report: type, duration, distance, speed and calories.
pub fn render_training_info(s: &ComputedSummary) -> String {
    format!(
        "Training type: {}\nDuration: {:.2} h.\nDistance: {:.2} km.\nSpeed: {:.2} km/h\nCalories burned: {:.2}\n",
        s.kind, s.duration_hours, s.distance_km, s.speed_kmh, s.calories
    )
}

/// Short daily-steps report.
pub fn render_day_steps(s: &ComputedSummary) -> String {
    format!(
        "Steps: {}.\nDistance: {:.2} km.\nCalories burned: {:.2} kcal.\n",
        s.steps, s.distance_km, s.calories
    )
}

/// Copy of `s` with every float rounded to `dp` decimals, for JSON output.
pub fn rounded(s: &ComputedSummary, dp: u32) -> ComputedSummary {
    ComputedSummary {
        duration_hours: s.duration_hours.round_to(dp),
        step_length_m: s.step_length_m.round_to(dp),
        distance_km: s.distance_km.round_to(dp),
        speed_kmh: s.speed_kmh.round_to(dp),
        calories: s.calories.round_to(dp),
        ..s.clone()
    }
}
