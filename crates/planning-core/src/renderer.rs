//! Grouped renderer — turns a schedule into French sentences
//!
//! Entries sharing (week, day, time) are merged into one sentence listing
//! their products:
//!
//! ```text
//! 1LuMdFr1LuMdSe3LuMdSe  →  "1er lundi 8h30: Frais, Sec. 3e lundi 8h30: Sec."
//! 0JeMdSe                →  "Tous les jeudis 8h30: Sec."
//! ```
//!
//! Groups follow the canonical order (week, day, time). Products inside a
//! group follow French collation of their labels.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::codes::{Day, Product, TimeSlot, Week};
use crate::compressor::compress_entries;
use crate::parser;

/// One sentence: a (week, day, time) slot and its products
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Group {
    pub week: Week,
    pub day: Day,
    pub time: TimeSlot,
    pub products: Vec<Product>,
}

impl Group {
    fn day_label(&self) -> String {
        if self.week.is_recurring() {
            self.day.plural_label()
        } else {
            self.day.label().to_string()
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "{} {} {}: ",
            self.week.label(),
            self.day_label(),
            self.time.label()
        )?;
        for (i, product) in self.products.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str(product.label())?;
        }
        f.write_str(".")
    }
}

/// Render an encoded schedule as French text
///
/// Empty input, or input with no recognizable entry, yields `""`.
pub fn decode(encoded: &str) -> String {
    group_entries(encoded)
        .iter()
        .map(Group::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Compress, then group entries by (week, day, time) in canonical order
pub fn group_entries(encoded: &str) -> Vec<Group> {
    if encoded.is_empty() {
        return Vec::new();
    }

    let mut grouped: BTreeMap<(Week, Day, TimeSlot), Vec<Product>> = BTreeMap::new();
    for entry in compress_entries(parser::parse_entries(encoded)) {
        grouped
            .entry((entry.week, entry.day, entry.time))
            .or_default()
            .push(entry.product);
    }

    log::trace!("grouped {} chars into {} sentences", encoded.len(), grouped.len());
    grouped
        .into_iter()
        .map(|((week, day, time), mut products)| {
            products.sort();
            products.dedup();
            Group {
                week,
                day,
                time,
                products,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_empty() {
        assert_eq!(decode(""), "");
    }

    #[test]
    fn test_decode_groups_products() {
        assert_eq!(
            decode("1LuMdFr1LuMdSe1LuMdSu3LuMdSe"),
            "1er lundi 8h30: Frais, Sec, Surgelé. 3e lundi 8h30: Sec."
        );
    }

    #[test]
    fn test_decode_orders_groups() {
        assert_eq!(
            decode("1LuMdSe1LuMdFr3LuMdSe2MaMfFr"),
            "1er lundi 8h30: Frais, Sec. 2e mardi 10h00: Frais. 3e lundi 8h30: Sec."
        );
        assert_eq!(
            decode("1JeMdSe1MaMdFr"),
            "1er mardi 8h30: Frais. 1er jeudi 8h30: Sec."
        );
        assert_eq!(
            decode("2MaMdSe1MaMdFr"),
            "1er mardi 8h30: Frais. 2e mardi 8h30: Sec."
        );
    }

    #[test]
    fn test_decode_orders_times() {
        assert_eq!(decode("1MaMdSe1MaMfFr"), "1er mardi 8h30: Sec. 1er mardi 10h00: Frais.");
        assert_eq!(decode("1MaApSe1MaMdFr"), "1er mardi 8h30: Frais. 1er mardi 14h00: Sec.");
        assert_eq!(decode("1MaMdFr1MaApSe"), "1er mardi 8h30: Frais. 1er mardi 14h00: Sec.");
    }

    #[test]
    fn test_decode_product_order_independent_of_input() {
        assert_eq!(decode("1MaMdSe1MaMdFr"), "1er mardi 8h30: Frais, Sec.");
        assert_eq!(decode("1MaMdSu1MaMdSe1MaMdFr"), "1er mardi 8h30: Frais, Sec, Surgelé.");
    }

    #[test]
    fn test_decode_every_week_pluralizes() {
        assert_eq!(decode("1JeMdSe2JeMdSe3JeMdSe4JeMdSe"), "Tous les jeudis 8h30: Sec.");
        assert_eq!(decode("0VeApFr"), "Tous les vendredis 14h00: Frais.");
    }

    #[test]
    fn test_specific_week_is_singular() {
        assert_eq!(decode("4VeApFr"), "4e vendredi 14h00: Frais.");
    }

    #[test]
    fn test_decode_drops_unknown_product_only() {
        assert_eq!(decode("1LuMdFr1LuMdZz"), "1er lundi 8h30: Frais.");
    }

    #[test]
    fn test_decode_group_without_known_product_vanishes() {
        assert_eq!(decode("1LuMdZz2MaMdSe"), "2e mardi 8h30: Sec.");
        assert_eq!(decode("1LuMdZz"), "");
    }

    #[test]
    fn test_decode_drops_unknown_header_codes() {
        assert_eq!(decode("9LuMdFr1SaMdFr1LuXxFr1LuMdSe"), "1er lundi 8h30: Sec.");
    }

    #[test]
    fn test_group_entries_structure() {
        let groups = group_entries("1LuMdSe1LuMdFr0JeApSu");
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].week, Week::Every);
        assert_eq!(groups[0].products, vec![Product::Frozen]);
        assert_eq!(groups[1].products, vec![Product::Fresh, Product::Dry]);
    }

    #[test]
    fn test_decode_determinism_100_iterations() {
        let input = "1LuMdSe1LuMdFr3LuMdSe2MaMfFr";
        let first = decode(input);
        for i in 0..100 {
            assert_eq!(first, decode(input), "Determinism failure at iteration {}", i);
        }
    }
}
