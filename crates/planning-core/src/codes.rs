//! Code tables — the fixed vocabulary of the planning encoding
//!
//! Each entry of an encoded schedule is 7 characters:
//!
//! ```text
//! 1LuMdFr
//! │ │ │ └─ product  (2 chars)  Fr Se Su
//! │ │ └─── time     (2 chars)  Md Mf Ap
//! │ └───── day      (2 chars)  Lu Ma Me Je Ve
//! └─────── week     (1 char)   0 1 2 3 4   ("0" = every week)
//! ```
//!
//! The tables are closed enums. Lookups that miss return `None`, which
//! the codec stages treat as "this entry is absent".

use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::collation;

/// Width of the week field in an encoded entry
pub const WEEK_WIDTH: usize = 1;
/// Width of the day, time and product fields
pub const FIELD_WIDTH: usize = 2;
/// Width of a whole encoded entry
pub const ENTRY_WIDTH: usize = WEEK_WIDTH + 3 * FIELD_WIDTH;

/// Which table a code belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodeKind {
    Week,
    Day,
    Time,
    Product,
}

impl fmt::Display for CodeKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CodeKind::Week => write!(f, "week"),
            CodeKind::Day => write!(f, "day"),
            CodeKind::Time => write!(f, "time"),
            CodeKind::Product => write!(f, "product"),
        }
    }
}

// ── Week ───────────────────────────────────────────────────

/// Week of the month. Variant order is the canonical order ("0" first).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Week {
    Every,
    First,
    Second,
    Third,
    Fourth,
}

impl Week {
    pub const ALL: [Week; 5] = [
        Week::Every,
        Week::First,
        Week::Second,
        Week::Third,
        Week::Fourth,
    ];

    /// The specific weeks that together mean "every week"
    pub const SPECIFIC: [Week; 4] = [Week::First, Week::Second, Week::Third, Week::Fourth];

    pub fn from_code(code: &str) -> Option<Week> {
        match code {
            "0" => Some(Week::Every),
            "1" => Some(Week::First),
            "2" => Some(Week::Second),
            "3" => Some(Week::Third),
            "4" => Some(Week::Fourth),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Week::Every => "0",
            Week::First => "1",
            Week::Second => "2",
            Week::Third => "3",
            Week::Fourth => "4",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Week::Every => "Tous les",
            Week::First => "1er",
            Week::Second => "2e",
            Week::Third => "3e",
            Week::Fourth => "4e",
        }
    }

    pub fn from_label(label: &str) -> Option<Week> {
        Week::ALL.into_iter().find(|w| w.label() == label)
    }

    /// True for the "every week" code, which pluralizes the day label
    pub fn is_recurring(self) -> bool {
        self == Week::Every
    }
}

// ── Day ────────────────────────────────────────────────────

/// Weekday, Monday through Friday
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
}

impl Day {
    pub const ALL: [Day; 5] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
    ];

    pub fn from_code(code: &str) -> Option<Day> {
        match code {
            "Lu" => Some(Day::Monday),
            "Ma" => Some(Day::Tuesday),
            "Me" => Some(Day::Wednesday),
            "Je" => Some(Day::Thursday),
            "Ve" => Some(Day::Friday),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Day::Monday => "Lu",
            Day::Tuesday => "Ma",
            Day::Wednesday => "Me",
            Day::Thursday => "Je",
            Day::Friday => "Ve",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "lundi",
            Day::Tuesday => "mardi",
            Day::Wednesday => "mercredi",
            Day::Thursday => "jeudi",
            Day::Friday => "vendredi",
        }
    }

    /// Label used after "Tous les"
    pub fn plural_label(self) -> String {
        format!("{}s", self.label())
    }

    pub fn from_label(label: &str) -> Option<Day> {
        Day::ALL.into_iter().find(|d| d.label() == label)
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

// ── Time slot ──────────────────────────────────────────────

/// Time of day, in chronological order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimeSlot {
    /// Start of morning, 8h30
    MorningStart,
    /// End of morning, 10h00
    MorningEnd,
    /// Afternoon, 14h00
    Afternoon,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 3] = [
        TimeSlot::MorningStart,
        TimeSlot::MorningEnd,
        TimeSlot::Afternoon,
    ];

    pub fn from_code(code: &str) -> Option<TimeSlot> {
        match code {
            "Md" => Some(TimeSlot::MorningStart),
            "Mf" => Some(TimeSlot::MorningEnd),
            "Ap" => Some(TimeSlot::Afternoon),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            TimeSlot::MorningStart => "Md",
            TimeSlot::MorningEnd => "Mf",
            TimeSlot::Afternoon => "Ap",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TimeSlot::MorningStart => "8h30",
            TimeSlot::MorningEnd => "10h00",
            TimeSlot::Afternoon => "14h00",
        }
    }

    pub fn from_label(label: &str) -> Option<TimeSlot> {
        TimeSlot::ALL.into_iter().find(|t| t.label() == label)
    }

    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

// ── Product ────────────────────────────────────────────────

/// Product category. Ordered by French collation of its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Product {
    Fresh,
    Dry,
    Frozen,
}

impl Product {
    pub const ALL: [Product; 3] = [Product::Fresh, Product::Dry, Product::Frozen];

    pub fn from_code(code: &str) -> Option<Product> {
        match code {
            "Fr" => Some(Product::Fresh),
            "Se" => Some(Product::Dry),
            "Su" => Some(Product::Frozen),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Product::Fresh => "Fr",
            Product::Dry => "Se",
            Product::Frozen => "Su",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Product::Fresh => "Frais",
            Product::Dry => "Sec",
            Product::Frozen => "Surgelé",
        }
    }

    pub fn from_label(label: &str) -> Option<Product> {
        Product::ALL.into_iter().find(|p| p.label() == label)
    }
}

impl Ord for Product {
    fn cmp(&self, other: &Self) -> Ordering {
        collation::compare(self.label(), other.label())
    }
}

impl PartialOrd for Product {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_tables() {
        for w in Week::ALL {
            assert_eq!(Week::from_code(w.code()), Some(w));
            assert_eq!(Week::from_label(w.label()), Some(w));
        }
        for d in Day::ALL {
            assert_eq!(Day::from_code(d.code()), Some(d));
            assert_eq!(Day::from_label(d.label()), Some(d));
        }
        for t in TimeSlot::ALL {
            assert_eq!(TimeSlot::from_code(t.code()), Some(t));
            assert_eq!(TimeSlot::from_label(t.label()), Some(t));
        }
        for p in Product::ALL {
            assert_eq!(Product::from_code(p.code()), Some(p));
            assert_eq!(Product::from_label(p.label()), Some(p));
        }
    }

    #[test]
    fn test_field_widths() {
        assert!(Week::ALL.iter().all(|w| w.code().len() == WEEK_WIDTH));
        assert!(Day::ALL.iter().all(|d| d.code().len() == FIELD_WIDTH));
        assert!(TimeSlot::ALL.iter().all(|t| t.code().len() == FIELD_WIDTH));
        assert!(Product::ALL.iter().all(|p| p.code().len() == FIELD_WIDTH));
        assert_eq!(ENTRY_WIDTH, 7);
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(Week::from_code("5"), None);
        assert_eq!(Day::from_code("Sa"), None);
        assert_eq!(TimeSlot::from_code("Soir"), None);
        assert_eq!(Product::from_code(""), None);
        assert_eq!(Day::from_label("Lundi"), None);
    }

    #[test]
    fn test_ordinals() {
        assert_eq!(Day::Monday.ordinal(), 0);
        assert_eq!(Day::Friday.ordinal(), 4);
        assert_eq!(TimeSlot::MorningStart.ordinal(), 0);
        assert_eq!(TimeSlot::Afternoon.ordinal(), 2);
    }

    #[test]
    fn test_week_order_follows_codes() {
        let mut weeks = Week::ALL.to_vec();
        weeks.reverse();
        weeks.sort();
        let codes: Vec<_> = weeks.iter().map(|w| w.code()).collect();
        assert_eq!(codes, vec!["0", "1", "2", "3", "4"]);
    }

    #[test]
    fn test_product_order_follows_labels() {
        let mut products = vec![Product::Frozen, Product::Dry, Product::Fresh];
        products.sort();
        assert_eq!(products, vec![Product::Fresh, Product::Dry, Product::Frozen]);
    }

    #[test]
    fn test_frozen_label_is_accented() {
        assert_eq!(Product::Frozen.label(), "Surgel\u{e9}");
    }

    #[test]
    fn test_plural_label() {
        assert_eq!(Day::Thursday.plural_label(), "jeudis");
        assert!(Week::Every.is_recurring());
        assert!(!Week::Third.is_recurring());
    }
}
