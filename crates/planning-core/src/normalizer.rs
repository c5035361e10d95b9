//! Canonical normalizer — converts a schedule to its deterministic normal form
//!
//! The canonical form is the single spelling used for storage, comparison
//! and deduplication of schedules.
//!
//! # Pipeline
//!
//! `encoded → parse (drop unknown) → compress → sort → dedup → serialize`
//!
//! # Guarantees
//!
//! - **Idempotent**: `canonicalize(canonicalize(x)) == canonicalize(x)`
//! - **Order independent**: any permutation of the same entries gives the same string
//! - **Compact**: a slot held every week is spelled once, with week "0"

use sha2::{Digest, Sha256};

use crate::compressor::compress_entries;
use crate::parser::{self, ScheduleEntry};
use crate::Result;

// ── Public API ─────────────────────────────────────────────

/// Canonicalize an encoded schedule
///
/// Entries with unrecognized codes are dropped.
pub fn canonicalize(encoded: &str) -> String {
    serialize_canonical(&canonical_entries(encoded))
}

/// Canonicalize, refusing schedules that contain malformed entries
///
/// # Errors
/// Returns `InvalidSchedule` if any entry is truncated or uses an
/// unknown code.
pub fn canonicalize_strict(encoded: &str) -> Result<String> {
    parser::parse_strict(encoded)?;
    Ok(canonicalize(encoded))
}

/// Canonical entries of an encoded schedule, in canonical order
pub fn canonical_entries(encoded: &str) -> Vec<ScheduleEntry> {
    if encoded.is_empty() {
        return Vec::new();
    }
    let mut entries = compress_entries(parser::parse_entries(encoded));
    entries.sort();
    entries.dedup();
    log::trace!("canonicalized {} chars to {} entries", encoded.len(), entries.len());
    entries
}

/// Serialize entries back to the fixed-width encoding, in the given order
pub fn serialize_canonical(entries: &[ScheduleEntry]) -> String {
    entries.iter().map(ScheduleEntry::to_string).collect()
}

// ── SHA-256 Hash Computation ──────────────────────────────

/// Compute the SHA-256 semantic hash of a schedule
///
/// The hash is taken over the canonical form, so two schedules describing
/// the same slots hash identically.
pub fn semantic_hash(encoded: &str) -> String {
    let canonical = canonicalize(encoded);
    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let result = hasher.finalize();
    format!("{:x}", result)
}
