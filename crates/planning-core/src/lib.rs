//! Planning Core - canonical codec for recurring delivery schedules
//!
//! A schedule lists recurring delivery/pickup slots: week of the month,
//! weekday, time of day and product category. It has three spellings:
//!
//! - **Encoded**: concatenated 7-character entries, any order (`2MaMdSe1MaMdFr`)
//! - **Canonical**: compressed, deduplicated and sorted (`1MaMdFr2MaMdSe`)
//! - **French text**: one sentence per slot (`1er mardi 8h30: Frais. 2e mardi 8h30: Sec.`)
//!
//! # Architecture
//!
//! ```text
//! Encoded → Parser → Compressor → Normalizer → Canonical
//!                        ↓                         ↑
//!                     Renderer → French text → Reader
//! ```
//!
//! # Guarantees
//!
//! - **Deterministic**: same input always produces identical output
//! - **Canonical**: one normalized form per set of slots
//! - **Total**: the codec operations never fail; unrecognized codes are
//!   dropped. Use [`validate`] or the `*_strict` variants to surface them.

pub mod codes;
pub mod collation;
pub mod compressor;
pub mod diff;
pub mod encoder;
pub mod error;
pub mod normalizer;
pub mod parser;
pub mod reader;
pub mod renderer;
pub mod verifier;

pub use codes::{CodeKind, Day, Product, TimeSlot, Week};
pub use compressor::compress;
pub use diff::{diff, ScheduleDiff};
pub use encoder::{encode, encode_json, EntryRecord};
pub use error::{Error, Result};
pub use normalizer::{canonicalize, canonicalize_strict, semantic_hash};
pub use parser::{parse_strict, ScheduleEntry};
pub use reader::parse_human_readable;
pub use renderer::decode;
pub use verifier::{validate, ValidationResult};

/// Version of this crate, reported by the CLI and bindings
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
