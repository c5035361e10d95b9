//! Schedule parser — block splitter, typed entries, lenient and strict parsing
//!
//! Converts an encoded schedule into entries. `parse` is the raw lazy
//! view used by the compressor; `parse_entries` interprets it, dropping
//! anything the code tables do not recognize; `parse_strict` refuses
//! the whole schedule instead.

pub mod blocks;
pub mod entry;

pub use blocks::{Blocks, RawEntry};
pub use entry::ScheduleEntry;

use crate::{Error, Result};

/// Split an encoded schedule into raw 7-character windows
///
/// Empty input yields an empty sequence. Codes are not checked.
pub fn parse(encoded: &str) -> Blocks<'_> {
    Blocks::new(encoded)
}

/// Parse an encoded schedule, silently dropping unrecognized entries
///
/// Input order and duplicates are preserved.
pub fn parse_entries(encoded: &str) -> Vec<ScheduleEntry> {
    parse(encoded)
        .filter_map(|raw| ScheduleEntry::from_raw(&raw))
        .collect()
}

/// Parse an encoded schedule, failing if any entry is malformed
///
/// # Errors
/// Returns `InvalidSchedule` carrying the number of validation errors
/// and the first one. Warnings (duplicates, overlapping weeks) are
/// accepted.
pub fn parse_strict(encoded: &str) -> Result<Vec<ScheduleEntry>> {
    let result = crate::verifier::validate(encoded);
    let errors = result.errors();
    if let Some(first) = errors.first() {
        return Err(Error::InvalidSchedule {
            count: errors.len(),
            first: first.to_string(),
        });
    }
    Ok(parse_entries(encoded))
}
