//! Schedule verifier — strict checks the lenient codec skips
//!
//! The codec drops malformed entries without a trace. The verifier
//! reports them instead, so callers that care about information loss can
//! refuse the input. It accumulates every diagnostic rather than
//! stopping at the first.
//!
//! # Checks
//!
//! 1. **Shape** — every block is 7 characters (errors)
//! 2. **Codes** — week, day, time and product exist in their tables (errors)
//! 3. **Redundancy** — repeated entries, or a specific week alongside
//!    "every week" for the same slot (warnings)

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;

use crate::codes::{CodeKind, Day, Product, TimeSlot, Week, ENTRY_WIDTH};
use crate::parser::{self, RawEntry};

// ── Verification Result Types ─────────────────────────────

/// Result of schedule verification — accumulates all diagnostics
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValidationResult {
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if no errors were found (warnings are OK)
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.iter().any(|d| d.severity == Severity::Error)
    }

    /// Returns only error-level diagnostics
    pub fn errors(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .collect()
    }

    /// Returns only warning-level diagnostics
    pub fn warnings(&self) -> Vec<&Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .collect()
    }

    fn add(&mut self, severity: Severity, kind: DiagnosticKind, raw: &RawEntry<'_>, message: String) {
        self.diagnostics.push(Diagnostic {
            severity,
            kind,
            index: raw.index,
            block: raw.block.to_string(),
            message,
        });
    }
}

/// A single verification diagnostic, tied to one entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    /// Position of the entry in the schedule
    pub index: usize,
    pub block: String,
    pub message: String,
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(
            f,
            "{} [{}] entry {} '{}': {}",
            prefix, self.kind, self.index, self.block, self.message
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
}

/// Category of verification issue
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticKind {
    TruncatedBlock,
    UnknownCode(CodeKind),
    DuplicateEntry,
    OverlappingWeeks,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            DiagnosticKind::TruncatedBlock => write!(f, "truncated"),
            DiagnosticKind::UnknownCode(kind) => write!(f, "unknown-{}", kind),
            DiagnosticKind::DuplicateEntry => write!(f, "duplicate"),
            DiagnosticKind::OverlappingWeeks => write!(f, "overlap"),
        }
    }
}

// ── Public API ────────────────────────────────────────────

/// Verify an encoded schedule.
///
/// Runs every check and returns the accumulated diagnostics, in entry
/// order.
pub fn validate(encoded: &str) -> ValidationResult {
    let mut result = ValidationResult::new();
    let mut seen: HashSet<&str> = HashSet::new();
    let mut every_week: BTreeSet<&str> = BTreeSet::new();
    let mut specific: Vec<RawEntry<'_>> = Vec::new();

    for raw in parser::parse(encoded) {
        if !verify_entry(&raw, &mut result) {
            continue;
        }

        if !seen.insert(raw.block) {
            result.add(
                Severity::Warning,
                DiagnosticKind::DuplicateEntry,
                &raw,
                "entry already present".into(),
            );
            continue;
        }

        if raw.week == Week::Every.code() {
            every_week.insert(raw.suffix);
        } else {
            specific.push(raw);
        }
    }

    // "0" may come after the specific weeks it covers, so overlaps are
    // checked once every entry is known.
    for raw in specific.iter().filter(|r| every_week.contains(r.suffix)) {
        result.add(
            Severity::Warning,
            DiagnosticKind::OverlappingWeeks,
            raw,
            format!("already covered by '{}{}'", Week::Every.code(), raw.suffix),
        );
    }

    result
        .diagnostics
        .sort_by_key(|d| (d.index, d.severity == Severity::Warning));
    log::trace!("validated schedule: {} diagnostics", result.diagnostics.len());
    result
}

// ── Per-entry checks ──────────────────────────────────────

/// Check shape and codes. Returns true when the entry is well-formed.
fn verify_entry(raw: &RawEntry<'_>, result: &mut ValidationResult) -> bool {
    if !raw.is_complete() {
        result.add(
            Severity::Error,
            DiagnosticKind::TruncatedBlock,
            raw,
            format!(
                "expected {} characters, found {}",
                ENTRY_WIDTH,
                raw.block.chars().count()
            ),
        );
        return false;
    }

    let checks = [
        (CodeKind::Week, raw.week, Week::from_code(raw.week).is_some()),
        (CodeKind::Day, raw.day, Day::from_code(raw.day).is_some()),
        (CodeKind::Time, raw.time, TimeSlot::from_code(raw.time).is_some()),
        (CodeKind::Product, raw.product, Product::from_code(raw.product).is_some()),
    ];

    let mut valid = true;
    for (kind, code, known) in checks {
        if !known {
            result.add(
                Severity::Error,
                DiagnosticKind::UnknownCode(kind),
                raw,
                format!("unknown {} code '{}'", kind, code),
            );
            valid = false;
        }
    }
    valid
}
