//! Property tests for the planning codec
//!
//! Schedules are generated from the code tables (for round trips) or as
//! arbitrary text over the code alphabet (for properties that must hold
//! on malformed input too).

use planning_core::{
    canonicalize, compress, decode, diff, parse_human_readable, semantic_hash, Day, Product,
    ScheduleEntry, TimeSlot, Week,
};
use proptest::prelude::*;

fn entry() -> impl Strategy<Value = ScheduleEntry> {
    (
        prop::sample::select(Week::ALL.to_vec()),
        prop::sample::select(Day::ALL.to_vec()),
        prop::sample::select(TimeSlot::ALL.to_vec()),
        prop::sample::select(Product::ALL.to_vec()),
    )
        .prop_map(|(w, d, t, p)| ScheduleEntry::new(w, d, t, p))
}

fn entries() -> impl Strategy<Value = Vec<ScheduleEntry>> {
    prop::collection::vec(entry(), 0..24)
}

fn encode(entries: &[ScheduleEntry]) -> String {
    entries.iter().map(ScheduleEntry::to_string).collect()
}

proptest! {
    #[test]
    fn prop_canonicalize_idempotent(entries in entries()) {
        let once = canonicalize(&encode(&entries));
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn prop_canonicalize_idempotent_on_garbage(s in "[0-9LuMaeJVdfApFrSu ]{0,40}") {
        let once = canonicalize(&s);
        prop_assert_eq!(canonicalize(&once), once);
    }

    #[test]
    fn prop_order_independent(
        (entries, shuffled) in entries().prop_flat_map(|v| (Just(v.clone()), Just(v).prop_shuffle()))
    ) {
        prop_assert_eq!(canonicalize(&encode(&entries)), canonicalize(&encode(&shuffled)));
    }

    #[test]
    fn prop_round_trip_through_text(entries in entries()) {
        let canonical = canonicalize(&encode(&entries));
        prop_assert_eq!(parse_human_readable(&decode(&canonical)), canonical);
    }

    #[test]
    fn prop_proper_subset_never_collapses(
        slot in entry(),
        mask in 1u8..15,
    ) {
        let weeks: Vec<Week> = Week::SPECIFIC
            .iter()
            .enumerate()
            .filter(|(i, _)| mask & (1 << i) != 0)
            .map(|(_, &w)| w)
            .collect();
        let input: String = weeks.iter().map(|&w| slot.with_week(w).to_string()).collect();
        prop_assert!(!compress(&input).starts_with('0'));
        prop_assert_eq!(compress(&input).len(), input.len());
    }

    #[test]
    fn prop_all_four_weeks_collapse(slot in entry(), repeats in 1usize..4) {
        let mut input = String::new();
        for _ in 0..repeats {
            for w in Week::SPECIFIC.iter().rev() {
                input.push_str(&slot.with_week(*w).to_string());
            }
        }
        prop_assert_eq!(compress(&input), slot.with_week(Week::Every).to_string());
    }

    #[test]
    fn prop_day_plural_only_every_week(slot in entry()) {
        let text = decode(&slot.to_string());
        let day = slot.day.label();
        if slot.week == Week::Every {
            let plural = format!(" {}s ", day);
            prop_assert!(text.contains(&plural), "{}", text);
        } else {
            let singular = format!(" {} ", day);
            prop_assert!(text.contains(&singular), "{}", text);
        }
    }

    #[test]
    fn prop_hash_matches_canonical_equality(a in entries(), b in entries()) {
        let (ea, eb) = (encode(&a), encode(&b));
        prop_assert_eq!(
            semantic_hash(&ea) == semantic_hash(&eb),
            canonicalize(&ea) == canonicalize(&eb)
        );
    }

    #[test]
    fn prop_diff_empty_iff_same_slots(a in entries()) {
        let encoded = encode(&a);
        prop_assert!(diff(&encoded, &canonicalize(&encoded)).is_empty());
    }
}
