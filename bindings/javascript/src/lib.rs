//! JavaScript bindings for the delivery planning codec
//!
//! Thin wrapper around `planning-core` compiled to WebAssembly, for
//! script hosts that read schedules out of spreadsheet cells.
//! ZERO logic here — all behavior from the canonical Rust implementation.

use wasm_bindgen::prelude::*;

/// Render an encoded schedule as French text.
///
/// @param schedule - concatenated 7-character entries, e.g. "1LuMdFr3LuMdSe"
/// @returns one sentence per slot, or "" for empty input
#[wasm_bindgen(js_name = "decodePlanning")]
pub fn decode_planning(schedule: &str) -> String {
    planning_core::decode(schedule)
}

/// Collapse weeks 1-4 of the same slot into a single "every week" entry.
///
/// @param schedule - encoded schedule
/// @returns compressed schedule, not sorted
#[wasm_bindgen(js_name = "compressPlanning")]
pub fn compress_planning(schedule: &str) -> String {
    planning_core::compress(schedule)
}

/// Canonicalize an encoded schedule.
///
/// Guarantees:
///   - Deterministic: same input → same output
///   - Idempotent: canonicalizeSchedule(canonicalizeSchedule(x)) === canonicalizeSchedule(x)
///
/// @param schedule - encoded schedule
/// @returns canonical schedule
#[wasm_bindgen(js_name = "canonicalizeSchedule")]
pub fn canonicalize_schedule(schedule: &str) -> String {
    planning_core::canonicalize(schedule)
}

/// Canonicalize, rejecting malformed entries instead of dropping them.
///
/// @param schedule - encoded schedule
/// @returns canonical schedule
/// @throws Error if any entry is truncated or uses an unknown code
#[wasm_bindgen(js_name = "canonicalizeScheduleStrict")]
pub fn canonicalize_schedule_strict(schedule: &str) -> Result<String, JsError> {
    planning_core::canonicalize_strict(schedule).map_err(|e| JsError::new(&e.to_string()))
}

/// Build a canonical schedule from records.
///
/// @param records - JSON.stringify'd array of {week, day, time, product | products}
/// @returns canonical schedule ("" if the input is not an array)
#[wasm_bindgen(js_name = "encodePlanning")]
pub fn encode_planning(records: &str) -> String {
    planning_core::encode_json(records)
}

/// Parse French schedule text back into a canonical schedule.
///
/// @param text - e.g. "Tous les jeudis 8h30: Sec."
/// @returns canonical schedule
#[wasm_bindgen(js_name = "parseHumanReadable")]
pub fn parse_human_readable(text: &str) -> String {
    planning_core::parse_human_readable(text)
}

/// Validate an encoded schedule.
///
/// @param schedule - encoded schedule
/// @returns JSON string: { valid: boolean, diagnostics: [...] }
#[wasm_bindgen(js_name = "validateSchedule")]
pub fn validate_schedule(schedule: &str) -> Result<String, JsError> {
    let result = planning_core::validate(schedule);

    let output = serde_json::json!({
        "valid": result.is_valid(),
        "diagnostics": result.diagnostics,
    });

    serde_json::to_string_pretty(&output)
        .map_err(|e| JsError::new(&format!("Serialization error: {}", e)))
}

/// Compute the SHA-256 semantic hash of a schedule.
///
/// @param schedule - encoded schedule
/// @returns hex-encoded SHA-256 of the canonical form
#[wasm_bindgen(js_name = "semanticHash")]
pub fn semantic_hash(schedule: &str) -> String {
    planning_core::semantic_hash(schedule)
}
