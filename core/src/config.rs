//! Calculation coefficients and their JSON file.

use std::path::Path;

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// How a step count is turned into a distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepLengthPolicy {
    /// Height-derived when height is known, fixed otherwise.
    #[default]
    Auto,
    /// Always height-derived; missing height is an error.
    HeightDerived,
    /// Always the fixed step length (legacy daily-steps behaviour).
    Fixed,
}

/// Coefficients and policies for the calculators. Injected, never global.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub step_length_policy: StepLengthPolicy,
    /// m per step
    pub fixed_step_length_m: f64,
    /// step length = height * factor
    pub height_step_factor: f64,
    pub running_speed_multiplier: f64,
    pub running_speed_shift: f64,
    pub walking_weight_multiplier: f64,
    pub walking_speed_height_multiplier: f64,
    /// Floor running calories at 0 instead of returning the raw negative value.
    pub clamp_negative_calories: bool,
}

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_H: f64 = 60.0;

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            step_length_policy: StepLengthPolicy::Auto,
            fixed_step_length_m: 0.65,
            height_step_factor: 0.45,
            running_speed_multiplier: 18.0,
            running_speed_shift: 20.0,
            walking_weight_multiplier: 0.035,
            walking_speed_height_multiplier: 0.029,
            clamp_negative_calories: true,
        }
    }
}

impl CalcConfig {
    /// Rejects coefficients that would make the formulas meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            ("fixed_step_length_m", self.fixed_step_length_m),
            ("height_step_factor", self.height_step_factor),
            ("running_speed_multiplier", self.running_speed_multiplier),
            ("walking_weight_multiplier", self.walking_weight_multiplier),
            ("walking_speed_height_multiplier", self.walking_speed_height_multiplier),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("must be a finite value > 0, got {value}"),
                });
            }
        }
        if !self.running_speed_shift.is_finite() {
            return Err(ConfigError::Invalid {
                field: "running_speed_shift",
                reason: format!("must be finite, got {}", self.running_speed_shift),
            });
        }
        Ok(())
    }
}

/// Reads a config from disk (JSON).
/// A missing file yields the default config.
pub fn load_config(path: impl AsRef<Path>) -> Result<CalcConfig, ConfigError> {
    let path = path.as_ref();
    let shown = path.display().to_string();

    if !path.exists() {
        warn!("config not found at {shown}, using defaults");
        return Ok(CalcConfig::default());
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: shown.clone(),
        source,
    })?;
    let config = parse_config(&contents).map_err(|e| match e {
        ConfigError::Parse { field, message, .. } => ConfigError::Parse {
            path: shown.clone(),
            field,
            message,
        },
        other => other,
    })?;

    info!(
        "config loaded from {shown} (step_length_policy={:?})",
        config.step_length_policy
    );
    Ok(config)
}

/// Parses and validates a JSON config string.
pub fn parse_config(json: &str) -> Result<CalcConfig, ConfigError> {
    let mut de = serde_json::Deserializer::from_str(json);
    let config: CalcConfig =
        serde_path_to_error::deserialize(&mut de).map_err(|e| ConfigError::Parse {
            path: "<inline>".to_string(),
            field: e.path().to_string(),
            message: e.inner().to_string(),
        })?;
    de.end().map_err(|e| ConfigError::Parse {
        path: "<inline>".to_string(),
        field: ".".to_string(),
        message: e.to_string(),
    })?;
    config.validate()?;
    Ok(config)
}

/// Writes a config to disk as pretty-printed JSON.
pub fn save_config(config: &CalcConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(config)?;
    std::fs::write(path, json).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    info!("config saved to {}", path.display());
    Ok(())
}
