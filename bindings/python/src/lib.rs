//! Python bindings for the delivery planning codec
//!
//! Thin wrapper around `planning-core` — ZERO logic here.
//! All behavior comes from the canonical Rust implementation.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

/// Render an encoded schedule as French text.
///
/// Args:
///     encoded: concatenated 7-character entries, e.g. "1LuMdFr3LuMdSe"
///
/// Returns:
///     One sentence per (week, day, time) slot, or "" for empty input
#[pyfunction]
fn decode(encoded: &str) -> String {
    planning_core::decode(encoded)
}

/// Collapse weeks 1-4 of the same slot into a single "every week" entry.
#[pyfunction]
fn compress(encoded: &str) -> String {
    planning_core::compress(encoded)
}

/// Canonicalize an encoded schedule.
///
/// Guarantees:
///   - Deterministic: same input → same output
///   - Idempotent: canonicalize(canonicalize(x)) == canonicalize(x)
///   - Order independent: entry order in the input does not matter
///
/// Args:
///     encoded: encoded schedule
///     strict: raise instead of dropping malformed entries
///
/// Raises:
///     ValueError: if strict is set and the schedule has malformed entries
#[pyfunction]
#[pyo3(signature = (encoded, strict = false))]
fn canonicalize(encoded: &str, strict: bool) -> PyResult<String> {
    if strict {
        planning_core::canonicalize_strict(encoded).map_err(|e| PyValueError::new_err(e.to_string()))
    } else {
        Ok(planning_core::canonicalize(encoded))
    }
}

/// Build a canonical schedule from a JSON array of records.
///
/// Args:
///     records: JSON string, e.g. '[{"week": "0", "day": "Je", "time": "Mf", "product": "Su"}]'
///
/// Returns:
///     Canonical encoded schedule ("" if the input is not a JSON array)
#[pyfunction]
fn encode(records: &str) -> String {
    planning_core::encode_json(records)
}

/// Parse French schedule text back into a canonical encoded schedule.
#[pyfunction]
fn parse_human_readable(text: &str) -> String {
    planning_core::parse_human_readable(text)
}

/// Validate an encoded schedule.
///
/// Returns:
///     JSON string with verification result:
///     {
///         "valid": bool,
///         "diagnostics": [{"severity": "...", "kind": ..., "index": n, "block": "...", "message": "..."}]
///     }
#[pyfunction]
fn validate(encoded: &str) -> PyResult<String> {
    let result = planning_core::validate(encoded);
    let output = serde_json::json!({
        "valid": result.is_valid(),
        "diagnostics": result.diagnostics,
    });
    serde_json::to_string_pretty(&output)
        .map_err(|e| PyValueError::new_err(format!("Serialization error: {}", e)))
}

/// Compute the SHA-256 semantic hash of a schedule.
///
/// The hash is computed from the canonical form, so equivalent
/// schedules produce the same hash.
#[pyfunction]
fn semantic_hash(encoded: &str) -> String {
    planning_core::semantic_hash(encoded)
}

/// Planning Python module — delivery schedule codec
#[pymodule]
fn planning(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("__version__", planning_core::VERSION)?;
    m.add_function(wrap_pyfunction!(decode, m)?)?;
    m.add_function(wrap_pyfunction!(compress, m)?)?;
    m.add_function(wrap_pyfunction!(canonicalize, m)?)?;
    m.add_function(wrap_pyfunction!(encode, m)?)?;
    m.add_function(wrap_pyfunction!(parse_human_readable, m)?)?;
    m.add_function(wrap_pyfunction!(validate, m)?)?;
    m.add_function(wrap_pyfunction!(semantic_hash, m)?)?;
    Ok(())
}
