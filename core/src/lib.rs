//! Distance, mean speed and calories from compact step records such as
//! `"1000,Running,0h30m"`.

pub mod calories;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod physics;
pub mod report;
pub mod service;

#[cfg(feature = "python")]
mod py;

pub use calories::{estimate_calories, CalorieEstimator, CalorieInput, RunningCalories, WalkingCalories};
pub use config::{load_config, parse_config, save_config, CalcConfig, StepLengthPolicy};
pub use error::{ConfigError, TrainingError, TrainingResult};
pub use models::{ActivityKind, ActivityRecord, Biometrics, ComputedSummary, RecordForm};
pub use parser::{parse_duration, parse_record, parse_steps, resolve_activity};
pub use physics::{distance_km, mean_speed_kmh, step_length_m, RoundTo};
pub use report::{render_day_steps, render_output, render_training_info, OutputFormat};
pub use service::TrainingInfoService;
