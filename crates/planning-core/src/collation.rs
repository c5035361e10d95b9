//! French collation for product labels
//!
//! Byte-wise comparison puts "é" after every ASCII letter, so "Surgelé"
//! would compare differently from "Surgele". French ordering compares
//! strings in levels:
//!
//! 1. **Primary** — base letters, accents and case ignored
//!    (`é` = `e`, `å` = `a`, `œ` = `oe`)
//! 2. **Secondary** — unaccented before accented (`cote` < `coté`)
//! 3. **Tertiary** — lowercase before uppercase (`sec` < `Sec`)
//!
//! Strings are decomposed (NFD) first, so a base letter and its accents
//! are separate characters whatever the input spelling. A final
//! comparison of the composed (NFC) forms keeps the order total over
//! canonically distinct strings.

use std::cmp::Ordering;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Compare two strings under French collation rules
pub fn compare(a: &str, b: &str) -> Ordering {
    SortKey::new(a)
        .cmp(&SortKey::new(b))
        .then_with(|| Iterator::cmp(a.nfc(), b.nfc()))
}

/// Collation key. Field order is comparison order.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
struct SortKey {
    /// Lowercased base letters
    primary: String,
    /// Marks attached to each base letter, empty when unaccented
    secondary: Vec<Vec<char>>,
    /// Uppercase flag of each base letter
    tertiary: Vec<bool>,
}

impl SortKey {
    fn new(s: &str) -> Self {
        let mut key = SortKey {
            primary: String::with_capacity(s.len()),
            secondary: Vec::new(),
            tertiary: Vec::new(),
        };
        for c in s.nfd() {
            if is_combining_mark(c) {
                match key.secondary.last_mut() {
                    Some(marks) => marks.push(c),
                    // Leading mark with no base letter
                    None => key.push_base(c, Vec::new(), false),
                }
                continue;
            }
            match ligature(c) {
                Some(letters) => {
                    for base in letters.chars() {
                        key.push_base(base, vec![c], c.is_uppercase());
                    }
                }
                None => key.push_base(c, Vec::new(), c.is_uppercase()),
            }
        }
        key
    }

    fn push_base(&mut self, c: char, marks: Vec<char>, upper: bool) {
        self.primary.extend(c.to_lowercase());
        self.secondary.push(marks);
        self.tertiary.push(upper);
    }
}

/// Ligatures sort as their letters, after the spelled-out form.
/// NFD leaves them whole.
fn ligature(c: char) -> Option<&'static str> {
    match c {
        'œ' | 'Œ' => Some("oe"),
        'æ' | 'Æ' => Some("ae"),
        _ => None,
    }
}
