//! PyO3 wrapper for SimulationRunner
//!
//! Entry point for a Python rendering frontend: the frontend constructs a
//! runner from a plain dict, pulls one snapshot per UI tick (or drains the
//! run eagerly), and reads the final report for its summary view.
//!
//! # Example (from Python)
//!
//! ```python
//! from quality_simulator import SimulationRunner
//!
//! runner = SimulationRunner.new({
//!     "days": 30,
//!     "num_products": 100,
//!     "total_price": 1_000_000.0,
//!     "rng_seed": 12345,
//! })
//!
//! while (snapshot := runner.step()) is not None:
//!     render(snapshot["day"], snapshot["counts"], snapshot["cumulative_cost"])
//!
//! print(runner.report()["total_cost"])
//! ```

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::{PyDict, PyList};

use super::types::{parse_runner_config, report_to_py, snapshot_to_py};
use crate::orchestrator::{Phase, SimulationRunner as RustRunner};

/// Python wrapper for the Rust simulation runner
#[pyclass(name = "SimulationRunner")]
pub struct PyRunner {
    inner: RustRunner,
}

#[pymethods]
impl PyRunner {
    /// Create a runner from a configuration dict
    ///
    /// # Errors
    ///
    /// Raises `ValueError` if required fields are missing, values are out
    /// of range, or the supplied matrix/penalties fail validation.
    #[staticmethod]
    fn new(config: &Bound<'_, PyDict>) -> PyResult<Self> {
        let runner_config = parse_runner_config(config)?;
        let inner =
            RustRunner::new(runner_config).map_err(|e| PyValueError::new_err(e.to_string()))?;
        Ok(PyRunner { inner })
    }

    /// Process the next day; `None` once the horizon is reached
    fn step(&mut self, py: Python) -> PyResult<Option<Py<PyDict>>> {
        match self.inner.step() {
            Some(snapshot) => Ok(Some(snapshot_to_py(py, &snapshot)?)),
            None => Ok(None),
        }
    }

    /// Drain the remaining days, returning a list of snapshot dicts
    fn run_all(&mut self, py: Python) -> PyResult<Py<PyList>> {
        let list = PyList::empty_bound(py);
        while let Some(snapshot) = self.inner.step() {
            list.append(snapshot_to_py(py, &snapshot)?)?;
        }
        Ok(list.unbind())
    }

    /// Summary of the run so far
    fn report(&self, py: Python) -> PyResult<Py<PyDict>> {
        report_to_py(py, &self.inner.report())
    }

    /// Occupancy counts for `k` evenly spaced completed days
    fn sampled_days(&self, py: Python, k: usize) -> PyResult<Py<PyList>> {
        let list = PyList::empty_bound(py);
        for (day, counts) in self.inner.sampled_days(k) {
            let entry = PyDict::new_bound(py);
            entry.set_item("day", day)?;
            entry.set_item("counts", counts.to_vec())?;
            list.append(entry)?;
        }
        Ok(list.unbind())
    }

    /// Days emitted so far
    fn days_completed(&self) -> usize {
        self.inner.days_completed()
    }

    /// Configured horizon in days
    fn horizon_days(&self) -> usize {
        self.inner.horizon_days()
    }

    /// Effective RNG seed (pass back in to replay this run)
    fn seed(&self) -> u64 {
        self.inner.seed()
    }

    /// Whether all days have been emitted
    fn is_complete(&self) -> bool {
        self.inner.phase() == Phase::Completed
    }
}
