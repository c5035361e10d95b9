//! Sentence reader — parses French schedule text back into codes
//!
//! Each sentence has the shape `<week> <day> <time>: <product>, <product>.`
//! The header is read from the right: the last token is the time, the
//! one before it the day (a plural "s" is stripped), and whatever is
//! left is the week label. "Tous les" spans two tokens, which is why
//! the week is taken as the remainder rather than the first token.
//!
//! A sentence whose header does not map back to codes contributes
//! nothing. Unknown products are skipped one by one.

use crate::codes::{Day, Product, TimeSlot, Week};
use crate::normalizer;
use crate::parser::ScheduleEntry;

/// Parse French text into a canonical encoded schedule
pub fn parse_human_readable(text: &str) -> String {
    let entries = read_entries(text);
    log::trace!("read {} entries from {} chars of text", entries.len(), text.len());
    let raw: String = entries.iter().map(ScheduleEntry::to_string).collect();
    normalizer::canonicalize(&raw)
}

/// Read every entry described by the text, in text order
pub fn read_entries(text: &str) -> Vec<ScheduleEntry> {
    text.split('.')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .flat_map(read_sentence)
        .collect()
}

fn read_sentence(sentence: &str) -> Vec<ScheduleEntry> {
    let Some((header, products)) = sentence.split_once(':') else {
        log::debug!("dropping sentence without ':': '{}'", sentence);
        return Vec::new();
    };
    let (header, products) = (header.trim(), products.trim());
    if header.is_empty() || products.is_empty() {
        log::debug!("dropping sentence with empty part: '{}'", sentence);
        return Vec::new();
    }

    let Some((week, day, time)) = read_header(header) else {
        log::debug!("dropping sentence with unknown header: '{}'", header);
        return Vec::new();
    };

    products
        .split(',')
        .map(str::trim)
        .filter_map(|label| {
            let product = Product::from_label(label);
            if product.is_none() {
                log::debug!("dropping unknown product '{}'", label);
            }
            product
        })
        .map(|product| ScheduleEntry::new(week, day, time, product))
        .collect()
}

fn read_header(header: &str) -> Option<(Week, Day, TimeSlot)> {
    let mut tokens: Vec<&str> = header.split_whitespace().collect();

    let time = TimeSlot::from_label(tokens.pop()?)?;

    let day_token = tokens.pop()?;
    let day = Day::from_label(day_token.strip_suffix('s').unwrap_or(day_token))?;

    let week = Week::from_label(&tokens.join(" "))?;

    Some((week, day, time))
}
