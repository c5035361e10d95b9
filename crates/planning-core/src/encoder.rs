//! Structured encoder — builds a canonical schedule from records
//!
//! A record names one slot and either a single `product` code or a
//! `products` list (both may be given). Records come from code, or as a
//! JSON array via [`encode_json`]:
//!
//! ```text
//! [{"week": "0", "day": "Je", "time": "Mf", "product": "Su"}]  →  "0JeMfSu"
//! ```
//!
//! Each code is checked against its table before it is written, so a
//! wrong-width code cannot shift the alignment of the entries after it.

use serde::{Deserialize, Serialize};

use crate::codes::{Day, Product, TimeSlot, Week};
use crate::normalizer;
use crate::parser::ScheduleEntry;

/// One structured schedule record. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    #[serde(default)]
    pub week: Option<String>,
    #[serde(default)]
    pub day: Option<String>,
    #[serde(default)]
    pub time: Option<String>,
    #[serde(default)]
    pub product: Option<String>,
    #[serde(default)]
    pub products: Option<Vec<String>>,
}

impl EntryRecord {
    /// Record for a single product
    pub fn single(week: &str, day: &str, time: &str, product: &str) -> Self {
        EntryRecord {
            week: Some(week.into()),
            day: Some(day.into()),
            time: Some(time.into()),
            product: Some(product.into()),
            products: None,
        }
    }

    /// Record for several products in the same slot
    pub fn multi(week: &str, day: &str, time: &str, products: &[&str]) -> Self {
        EntryRecord {
            week: Some(week.into()),
            day: Some(day.into()),
            time: Some(time.into()),
            product: None,
            products: Some(products.iter().map(|p| p.to_string()).collect()),
        }
    }

    /// Entries described by this record, skipping unknown codes
    pub fn entries(&self) -> Vec<ScheduleEntry> {
        let Some((week, day, time)) = self.slot() else {
            log::debug!("dropping record with missing or unknown slot: {:?}", self);
            return Vec::new();
        };

        self.product
            .iter()
            .chain(self.products.iter().flatten())
            .filter_map(|code| {
                let product = Product::from_code(code);
                if product.is_none() {
                    log::debug!("dropping unknown product code '{}'", code);
                }
                product
            })
            .map(|product| ScheduleEntry::new(week, day, time, product))
            .collect()
    }

    fn slot(&self) -> Option<(Week, Day, TimeSlot)> {
        let week = Week::from_code(self.week.as_deref()?)?;
        let day = Day::from_code(self.day.as_deref()?)?;
        let time = TimeSlot::from_code(self.time.as_deref()?)?;
        Some((week, day, time))
    }
}

/// Encode records into a canonical schedule
pub fn encode(records: &[EntryRecord]) -> String {
    let raw: String = records
        .iter()
        .flat_map(EntryRecord::entries)
        .map(|e| e.to_string())
        .collect();
    log::trace!("encoded {} records into {} chars", records.len(), raw.len());
    normalizer::canonicalize(&raw)
}

/// Encode a JSON array of records into a canonical schedule
///
/// Anything that is not a JSON array yields `""`. Array elements that
/// are not record objects are skipped.
pub fn encode_json(json: &str) -> String {
    let value: serde_json::Value = match serde_json::from_str(json) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("encode input is not JSON: {}", e);
            return String::new();
        }
    };
    let serde_json::Value::Array(items) = value else {
        log::debug!("encode input is not an array");
        return String::new();
    };

    let records: Vec<EntryRecord> = items
        .into_iter()
        .filter_map(|item| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                log::debug!("skipping malformed record: {}", e);
                None
            }
        })
        .collect();
    encode(&records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_entry() {
        assert_eq!(encode(&[EntryRecord::single("1", "Lu", "Md", "Fr")]), "1LuMdFr");
    }

    #[test]
    fn test_multiple_products_in_one_record() {
        assert_eq!(
            encode(&[EntryRecord::multi("1", "Lu", "Md", &["Fr", "Se"])]),
            "1LuMdFr1LuMdSe"
        );
    }

    #[test]
    fn test_multiple_records() {
        assert_eq!(
            encode(&[
                EntryRecord::multi("1", "Lu", "Md", &["Fr"]),
                EntryRecord::multi("2", "Ma", "Ap", &["Se"]),
            ]),
            "1LuMdFr2MaApSe"
        );
    }

    #[test]
    fn test_every_week() {
        assert_eq!(encode(&[EntryRecord::single("0", "Je", "Mf", "Su")]), "0JeMfSu");
    }

    #[test]
    fn test_canonicalizes() {
        assert_eq!(
            encode(&[
                EntryRecord::single("1", "Je", "Md", "Se"),
                EntryRecord::single("2", "Je", "Md", "Se"),
                EntryRecord::single("3", "Je", "Md", "Se"),
                EntryRecord::single("4", "Je", "Md", "Se"),
                EntryRecord::single("1", "Ma", "Md", "Fr"),
            ]),
            "0JeMdSe1MaMdFr"
        );
    }

    #[test]
    fn test_sorts_out_of_order_input() {
        assert_eq!(
            encode(&[
                EntryRecord::single("1", "Je", "Md", "Se"),
                EntryRecord::single("1", "Ma", "Md", "Fr"),
            ]),
            "1MaMdFr1JeMdSe"
        );
        assert_eq!(
            encode(&[
                EntryRecord::single("2", "Ma", "Md", "Fr"),
                EntryRecord::single("1", "Ma", "Md", "Fr"),
            ]),
            "1MaMdFr2MaMdFr"
        );
        assert_eq!(
            encode(&[EntryRecord::multi("1", "Ma", "Md", &["Se", "Fr"])]),
            "1MaMdFr1MaMdSe"
        );
    }

    #[test]
    fn test_incomplete_records_contribute_nothing() {
        let missing_day = EntryRecord {
            day: None,
            ..EntryRecord::single("1", "Lu", "Md", "Fr")
        };
        let no_products = EntryRecord::multi("1", "Lu", "Md", &[]);
        assert_eq!(encode(&[missing_day, no_products]), "");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_wrong_width_code_does_not_shift_alignment() {
        assert_eq!(
            encode(&[
                EntryRecord::single("10", "Lu", "Md", "Fr"),
                EntryRecord::single("2", "Ma", "Md", "Fr"),
            ]),
            "2MaMdFr"
        );
    }

    #[test]
    fn test_product_and_products_both_count() {
        let record = EntryRecord {
            products: Some(vec!["Su".into(), "Xx".into()]),
            ..EntryRecord::single("1", "Lu", "Md", "Fr")
        };
        assert_eq!(encode(&[record]), "1LuMdFr1LuMdSu");
    }

    // ── JSON input ─────────────────────────────────────

    #[test]
    fn test_encode_json() {
        let json = r#"[{"week": "0", "day": "Je", "time": "Mf", "product": "Su"},
                       {"week": "1", "day": "Ma", "time": "Md", "products": ["Se", "Fr"]}]"#;
        assert_eq!(encode_json(json), "0JeMfSu1MaMdFr1MaMdSe");
    }

    #[test]
    fn test_encode_json_wrong_shape() {
        assert_eq!(encode_json(r#"{"week": "0", "day": "Je", "time": "Mf", "product": "Su"}"#), "");
        assert_eq!(encode_json("\"0JeMfSu\""), "");
        assert_eq!(encode_json("not json"), "");
        assert_eq!(encode_json(""), "");
    }

    #[test]
    fn test_encode_json_skips_malformed_elements() {
        let json = r#"[42, {"week": 1}, {"week": "1", "day": "Lu", "time": "Md", "product": "Fr"}]"#;
        assert_eq!(encode_json(json), "1LuMdFr");
    }
}
