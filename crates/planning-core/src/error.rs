//! Error types for the planning codec
//!
//! The five public codec operations never fail: unrecognized codes are
//! dropped from their output. Only the strict layer (`parse_strict`,
//! `canonicalize_strict`) and typed conversions such as
//! `ScheduleEntry::from_str` return `Result<T, Error>`.

use thiserror::Error;

use crate::codes::CodeKind;

/// Planning codec error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A 7-character block could not be read as a schedule entry
    #[error("Invalid entry '{block}': {reason}")]
    InvalidEntry { block: String, reason: String },

    /// A code is not part of its table
    #[error("Unknown {kind} code '{code}'")]
    UnknownCode { kind: CodeKind, code: String },

    /// Strict validation rejected the schedule
    #[error("Invalid schedule: {count} error(s), first: {first}")]
    InvalidSchedule { count: usize, first: String },
}

/// Result type alias for planning operations
pub type Result<T> = std::result::Result<T, Error>;
