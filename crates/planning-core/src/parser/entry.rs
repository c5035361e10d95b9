//! Typed schedule entry — one (week, day, time, product) slot
//!
//! Entries order by the four keys of the normal form: week code, day
//! ordinal, time ordinal, product label under French collation.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::blocks::{Blocks, RawEntry};
use crate::codes::{CodeKind, Day, Product, TimeSlot, Week};
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ScheduleEntry {
    pub week: Week,
    pub day: Day,
    pub time: TimeSlot,
    pub product: Product,
}

impl ScheduleEntry {
    pub fn new(week: Week, day: Day, time: TimeSlot, product: Product) -> Self {
        ScheduleEntry {
            week,
            day,
            time,
            product,
        }
    }

    /// Day + time + product codes, the part shared across weeks
    pub fn suffix(&self) -> String {
        format!("{}{}{}", self.day.code(), self.time.code(), self.product.code())
    }

    /// Canonical sort key. Week "0" sorts before the specific weeks.
    pub fn sort_key(&self) -> (Week, u8, u8, Product) {
        (self.week, self.day.ordinal(), self.time.ordinal(), self.product)
    }

    /// Same slot in another week
    pub fn with_week(self, week: Week) -> Self {
        ScheduleEntry { week, ..self }
    }

    /// Interpret a raw window, reporting the first field that fails
    pub fn try_from_raw(raw: &RawEntry<'_>) -> Result<Self> {
        if !raw.is_complete() {
            return Err(Error::InvalidEntry {
                block: raw.block.to_string(),
                reason: format!("expected 7 characters, found {}", raw.block.chars().count()),
            });
        }
        let week = Week::from_code(raw.week).ok_or_else(|| unknown(CodeKind::Week, raw.week))?;
        let day = Day::from_code(raw.day).ok_or_else(|| unknown(CodeKind::Day, raw.day))?;
        let time =
            TimeSlot::from_code(raw.time).ok_or_else(|| unknown(CodeKind::Time, raw.time))?;
        let product = Product::from_code(raw.product)
            .ok_or_else(|| unknown(CodeKind::Product, raw.product))?;
        Ok(ScheduleEntry::new(week, day, time, product))
    }

    /// Lenient conversion: any failure drops the entry
    pub fn from_raw(raw: &RawEntry<'_>) -> Option<Self> {
        match Self::try_from_raw(raw) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("dropping entry {} '{}': {}", raw.index, raw.block, e);
                None
            }
        }
    }
}

fn unknown(kind: CodeKind, code: &str) -> Error {
    Error::UnknownCode {
        kind,
        code: code.to_string(),
    }
}

impl Ord for ScheduleEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key().cmp(&other.sort_key())
    }
}

impl PartialOrd for ScheduleEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ScheduleEntry {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.week.code(),
            self.day.code(),
            self.time.code(),
            self.product.code()
        )
    }
}

impl FromStr for ScheduleEntry {
    type Err = Error;

    /// Parse exactly one 7-character block
    fn from_str(s: &str) -> Result<Self> {
        let mut blocks = Blocks::new(s);
        let raw = blocks.next().ok_or_else(|| Error::InvalidEntry {
            block: String::new(),
            reason: "empty input".into(),
        })?;
        if blocks.next().is_some() {
            return Err(Error::InvalidEntry {
                block: s.to_string(),
                reason: "more than one entry".into(),
            });
        }
        Self::try_from_raw(&raw)
    }
}
