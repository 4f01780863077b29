//! FFI boundary (Python)
//!
//! Minimal and safe: one pyclass wrapping the runner plus dict
//! conversions. The rendering frontend lives entirely on the Python side.

pub mod runner;
pub mod types;
