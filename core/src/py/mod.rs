//! Python bindings (feature `python`).

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::report::{render_training_info, rounded};
use crate::service::TrainingInfoService;
use crate::{parse_config, ComputedSummary};

// ──────────────────────────────────────────────────────────────────────────────
// Helpers
// ──────────────────────────────────────────────────────────────────────────────

fn service_from(config_json: Option<&str>) -> PyResult<TrainingInfoService> {
    match config_json {
        Some(json) => parse_config(json)
            .map(TrainingInfoService::new)
            .map_err(|e| PyValueError::new_err(e.to_string())),
        None => Ok(TrainingInfoService::default()),
    }
}

fn compute(record: &str, weight: f64, height: f64, config_json: Option<&str>) -> PyResult<ComputedSummary> {
    service_from(config_json)?
        .compute(record, weight, height)
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

// ──────────────────────────────────────────────────────────────────────────────
// Exported functions
// ──────────────────────────────────────────────────────────────────────────────

/// Text report for one record. Raises ValueError on invalid input.
#[pyfunction]
#[pyo3(signature = (record, weight, height, config_json = None))]
fn training_info(record: &str, weight: f64, height: f64, config_json: Option<&str>) -> PyResult<String> {
    compute(record, weight, height, config_json).map(|s| render_training_info(&s))
}

/// Summary as a JSON object string (floats rounded to 4 decimals).
#[pyfunction]
#[pyo3(signature = (record, weight, height, config_json = None))]
fn training_summary_json(record: &str, weight: f64, height: f64, config_json: Option<&str>) -> PyResult<String> {
    let summary = compute(record, weight, height, config_json)?;
    serde_json::to_string(&rounded(&summary, 4)).map_err(|e| PyValueError::new_err(e.to_string()))
}

#[pymodule]
fn stridecalc_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(training_info, m)?)?;
    m.add_function(wrap_pyfunction!(training_summary_json, m)?)?;
    Ok(())
}
