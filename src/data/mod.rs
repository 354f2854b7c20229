//! Data layer - character records and the entries derived from them
//!
//! This module contains the data model shared by every pass:
//! - Codepoint string decoding
//! - `<character>` records parsed from `unicode.xml`
//! - Symbol entries and the seed table

pub mod codepoints;
pub mod entry;
pub mod records;

// Re-export commonly used items
pub use codepoints::{decode_codepoints, encode_codepoints, is_codepoint_id};
pub use entry::{parse_seed, SeedTable, SeededTable, SymbolEntry, SymbolTable, SymbolValue};
pub use records::{parse_character_database, symbol_key, CharacterRecord, EntityRef, ESCAPE};
