//! Week compressor — collapses "every week" patterns
//!
//! Entries are grouped by suffix (day + time + product). A suffix whose
//! set of week codes is exactly {1, 2, 3, 4} becomes one "0" entry.
//! Any other set is emitted one entry per distinct week, ascending.
//!
//! Groups keep first-encounter order. The output is not sorted; that is
//! the normalizer's job.
//!
//! Two entry points: [`compress`] works on raw text and passes unknown
//! codes through untouched; [`compress_entries`] works on typed entries,
//! which the normalizer and renderer use so that an unrecognized week
//! code cannot block the collapse of an otherwise complete slot.

use std::collections::{BTreeSet, HashMap};

use crate::codes::Week;
use crate::parser::{self, ScheduleEntry};

/// Compress an encoded schedule
pub fn compress(encoded: &str) -> String {
    let mut out = String::with_capacity(encoded.len());
    for (suffix, weeks) in group_by_suffix(encoded) {
        if covers_every_week(&weeks) {
            out.push_str(Week::Every.code());
            out.push_str(suffix);
        } else {
            for week in weeks {
                out.push_str(week);
                out.push_str(suffix);
            }
        }
    }
    log::trace!("compressed {} chars to {}", encoded.len(), out.len());
    out
}

/// Compress typed entries
pub fn compress_entries(entries: impl IntoIterator<Item = ScheduleEntry>) -> Vec<ScheduleEntry> {
    let mut groups: Vec<(ScheduleEntry, BTreeSet<Week>)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for entry in entries {
        let slot = *index.entry(entry.suffix()).or_insert_with(|| {
            groups.push((entry, BTreeSet::new()));
            groups.len() - 1
        });
        groups[slot].1.insert(entry.week);
    }

    let mut out = Vec::new();
    for (entry, weeks) in groups {
        if weeks.iter().copied().eq(Week::SPECIFIC) {
            out.push(entry.with_week(Week::Every));
        } else {
            out.extend(weeks.into_iter().map(|w| entry.with_week(w)));
        }
    }
    out
}

fn group_by_suffix(encoded: &str) -> Vec<(&str, BTreeSet<&str>)> {
    let mut groups: Vec<(&str, BTreeSet<&str>)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for raw in parser::parse(encoded) {
        let slot = *index.entry(raw.suffix).or_insert_with(|| {
            groups.push((raw.suffix, BTreeSet::new()));
            groups.len() - 1
        });
        groups[slot].1.insert(raw.week);
    }

    groups
}

fn covers_every_week(weeks: &BTreeSet<&str>) -> bool {
    weeks.len() == Week::SPECIFIC.len() && Week::SPECIFIC.iter().all(|w| weeks.contains(w.code()))
}
