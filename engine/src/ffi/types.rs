//! FFI type conversions
//!
//! Converts between Python dictionaries and the Rust configuration /
//! snapshot / report types. All conversion failures surface as Python
//! `ValueError` with the offending field named.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::models::matrix::TransitionMatrix;
use crate::models::penalty::PenaltyTable;
use crate::models::snapshot::DailySnapshot;
use crate::models::state::STATE_COUNT;
use crate::orchestrator::{RunReport, RunnerConfig};

fn get_required<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<T> {
    match dict.get_item(key)? {
        Some(value) => value
            .extract()
            .map_err(|_| PyValueError::new_err(format!("invalid value for '{}'", key))),
        None => Err(PyValueError::new_err(format!(
            "missing required field '{}'",
            key
        ))),
    }
}

fn get_optional<'py, T: FromPyObject<'py>>(
    dict: &Bound<'py, PyDict>,
    key: &str,
) -> PyResult<Option<T>> {
    match dict.get_item(key)? {
        Some(value) if !value.is_none() => value
            .extract()
            .map(Some)
            .map_err(|_| PyValueError::new_err(format!("invalid value for '{}'", key))),
        _ => Ok(None),
    }
}

/// Parse a runner configuration from a Python dict
///
/// Required keys: `days`, `num_products`, `total_price`.
/// Optional keys: `rng_seed`, `matrix` (5x5 nested list), `penalties`
/// (list of 5 factors). Omitted matrix/penalties use the reference values.
pub fn parse_runner_config(config: &Bound<'_, PyDict>) -> PyResult<RunnerConfig> {
    let days: usize = get_required(config, "days")?;
    let num_products: usize = get_required(config, "num_products")?;
    let total_price: f64 = get_required(config, "total_price")?;

    let mut runner_config = RunnerConfig::new(days, num_products, total_price);

    if let Some(seed) = get_optional::<u64>(config, "rng_seed")? {
        runner_config = runner_config.with_seed(seed);
    }
    if let Some(rows) = get_optional::<[[f64; STATE_COUNT]; STATE_COUNT]>(config, "matrix")? {
        let matrix =
            TransitionMatrix::new(rows).map_err(|e| PyValueError::new_err(e.to_string()))?;
        runner_config = runner_config.with_matrix(matrix);
    }
    if let Some(factors) = get_optional::<[f64; STATE_COUNT]>(config, "penalties")? {
        let penalties =
            PenaltyTable::new(factors).map_err(|e| PyValueError::new_err(e.to_string()))?;
        runner_config = runner_config.with_penalties(penalties);
    }

    Ok(runner_config)
}

/// Convert a daily snapshot into a Python dict
pub fn snapshot_to_py(py: Python, snapshot: &DailySnapshot) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("day", snapshot.day)?;
    dict.set_item("counts", snapshot.counts.to_vec())?;
    dict.set_item("daily_penalty", snapshot.daily_penalty)?;
    dict.set_item("cumulative_cost", snapshot.cumulative_cost)?;
    dict.set_item(
        "cumulative_discounts",
        snapshot.cumulative_discounts.to_vec(),
    )?;
    Ok(dict.unbind())
}

/// Convert a run report into a Python dict
pub fn report_to_py(py: Python, report: &RunReport) -> PyResult<Py<PyDict>> {
    let dict = PyDict::new_bound(py);
    dict.set_item("run_id", report.run_id.to_string())?;
    dict.set_item("seed", report.seed)?;
    dict.set_item("horizon_days", report.horizon_days)?;
    dict.set_item("days_completed", report.days_completed)?;
    dict.set_item("num_products", report.num_products)?;
    dict.set_item("final_counts", report.final_counts.to_vec())?;
    dict.set_item("final_shares", report.final_shares.to_vec())?;
    dict.set_item(
        "cumulative_discounts",
        report.cumulative_discounts.to_vec(),
    )?;
    dict.set_item("total_cost", report.total_cost)?;
    dict.set_item("history_digest", report.history_digest.clone())?;
    Ok(dict.unbind())
}
