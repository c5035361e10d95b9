//! Semantic diff between two schedules
//!
//! Schedules are compared slot by slot, with "every week" entries expanded
//! into weeks 1–4 first. `0LuMdFr` against `1LuMdFr` therefore reports
//! weeks 2, 3 and 4 as removed, not one entry removed and one added.
//! Each side of the result is returned in canonical (compressed) form.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::codes::Week;
use crate::normalizer;
use crate::parser::ScheduleEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ScheduleDiff {
    /// Slots in the first schedule only
    pub removed: Vec<ScheduleEntry>,
    /// Slots in the second schedule only
    pub added: Vec<ScheduleEntry>,
}

impl ScheduleDiff {
    /// True when both schedules describe the same slots
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Compare two encoded schedules
pub fn diff(before: &str, after: &str) -> ScheduleDiff {
    let before = expand(&normalizer::canonical_entries(before));
    let after = expand(&normalizer::canonical_entries(after));

    let result = ScheduleDiff {
        removed: recompress(before.difference(&after)),
        added: recompress(after.difference(&before)),
    };
    log::trace!(
        "diff: {} removed, {} added",
        result.removed.len(),
        result.added.len()
    );
    result
}

/// Replace every "every week" entry by its four specific weeks
fn expand(entries: &[ScheduleEntry]) -> BTreeSet<ScheduleEntry> {
    entries
        .iter()
        .flat_map(|entry| {
            if entry.week.is_recurring() {
                Week::SPECIFIC
                    .iter()
                    .map(|&w| entry.with_week(w))
                    .collect::<Vec<_>>()
            } else {
                vec![*entry]
            }
        })
        .collect()
}

fn recompress<'a>(entries: impl Iterator<Item = &'a ScheduleEntry>) -> Vec<ScheduleEntry> {
    let encoded: String = entries.map(ScheduleEntry::to_string).collect();
    normalizer::canonical_entries(&encoded)
}
