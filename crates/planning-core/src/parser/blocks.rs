//! Block splitter — slices an encoded schedule into 7-character windows
//!
//! No code is checked here. Every window is handed out as opaque text,
//! including a short trailing window when the input length is not a
//! multiple of 7. Windows are counted in characters, never bytes, so
//! non-ASCII garbage cannot split a code point.
//!
//! Guarantees:
//! - Lazy: windows are produced on demand from the remaining input
//! - Restartable: `Blocks` is `Clone` and holds no shared state

use crate::codes::{ENTRY_WIDTH, FIELD_WIDTH, WEEK_WIDTH};

/// One uninterpreted window of an encoded schedule
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEntry<'a> {
    /// Position of the window in the schedule (0, 1, 2, ...)
    pub index: usize,
    /// The whole window, 7 characters unless truncated
    pub block: &'a str,
    pub week: &'a str,
    pub day: &'a str,
    pub time: &'a str,
    pub product: &'a str,
    /// Day + time + product
    pub suffix: &'a str,
}

impl<'a> RawEntry<'a> {
    fn new(index: usize, block: &'a str) -> Self {
        let (week, suffix) = split_chars(block, WEEK_WIDTH);
        let (day, rest) = split_chars(suffix, FIELD_WIDTH);
        let (time, product) = split_chars(rest, FIELD_WIDTH);
        RawEntry {
            index,
            block,
            week,
            day,
            time,
            product,
            suffix,
        }
    }

    /// True when the window holds a full 7 characters
    pub fn is_complete(&self) -> bool {
        self.block.chars().count() == ENTRY_WIDTH
    }
}

/// Iterator over the windows of an encoded schedule
#[derive(Debug, Clone)]
pub struct Blocks<'a> {
    rest: &'a str,
    index: usize,
}

impl<'a> Blocks<'a> {
    pub fn new(input: &'a str) -> Self {
        Blocks {
            rest: input,
            index: 0,
        }
    }
}

impl<'a> Iterator for Blocks<'a> {
    type Item = RawEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }
        let (block, rest) = split_chars(self.rest, ENTRY_WIDTH);
        self.rest = rest;
        let entry = RawEntry::new(self.index, block);
        self.index += 1;
        Some(entry)
    }
}

/// Split after the first `n` characters (or at the end if shorter)
fn split_chars(s: &str, n: usize) -> (&str, &str) {
    let at = s.char_indices().nth(n).map_or(s.len(), |(i, _)| i);
    s.split_at(at)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blocks(input: &str) -> Vec<&str> {
        Blocks::new(input).map(|e| e.block).collect()
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(Blocks::new("").count(), 0);
    }

    #[test]
    fn test_splits_into_windows() {
        assert_eq!(
            blocks("1LuMdFr2MaApSe0VeMfSu"),
            vec!["1LuMdFr", "2MaApSe", "0VeMfSu"]
        );
    }

    #[test]
    fn test_fields() {
        let entry = Blocks::new("3JeMfSu").next().unwrap();
        assert_eq!(entry.index, 0);
        assert_eq!(entry.week, "3");
        assert_eq!(entry.day, "Je");
        assert_eq!(entry.time, "Mf");
        assert_eq!(entry.product, "Su");
        assert_eq!(entry.suffix, "JeMfSu");
        assert!(entry.is_complete());
    }

    #[test]
    fn test_unknown_codes_pass_through() {
        let entry = Blocks::new("9XxYyZz").next().unwrap();
        assert_eq!(entry.week, "9");
        assert_eq!(entry.day, "Xx");
        assert_eq!(entry.product, "Zz");
    }

    #[test]
    fn test_truncated_trailing_block() {
        let entries: Vec<_> = Blocks::new("1LuMdFr2MaA").collect();
        assert_eq!(entries.len(), 2);
        let last = entries[1];
        assert_eq!(last.index, 1);
        assert_eq!(last.block, "2MaA");
        assert_eq!(last.day, "Ma");
        assert_eq!(last.time, "A");
        assert_eq!(last.product, "");
        assert!(!last.is_complete());
    }

    #[test]
    fn test_counts_characters_not_bytes() {
        assert_eq!(blocks("1LuMdéé2MaApSe"), vec!["1LuMdéé", "2MaApSe"]);
    }

    #[test]
    fn test_restartable() {
        let iter = Blocks::new("1LuMdFr2MaApSe");
        let first: Vec<_> = iter.clone().collect();
        let second: Vec<_> = iter.collect();
        assert_eq!(first, second);
    }
}
