//! Symbol entries as written to the JSON tables

use std::collections::BTreeMap;

use serde::Serialize;
use serde_json::Value;

use super::records::CharacterRecord;
use crate::utils::error::{ExtractError, ExtractResult};

/// What a symbol or command key maps to
///
/// Fields are declared in key order so the serialized objects come out
/// sorted. Absent values serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolEntry {
    /// Decoded character(s)
    #[serde(rename = "char")]
    pub character: String,
    /// Raw codepoint string, e.g. `U1D400-1D401`
    pub codepoint: String,
    pub description: Option<String>,
    /// Entity reference, e.g. `&alpha;`
    pub entity: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl SymbolEntry {
    pub fn from_record(record: &CharacterRecord) -> ExtractResult<Self> {
        Ok(Self {
            character: record.decoded_char()?,
            codepoint: record.codepoint()?.to_string(),
            description: record.description.clone(),
            entity: record.entity_name(),
            kind: record.kind.clone(),
        })
    }
}

/// Symbol key → entry, sorted by key
pub type SymbolTable = BTreeMap<String, SymbolEntry>;

/// A `symbols` value: extracted from the database or taken from the seed
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SymbolValue {
    Extracted(SymbolEntry),
    /// Seed value, written back exactly as it was read
    Seeded(Value),
}

impl SymbolValue {
    pub fn as_entry(&self) -> Option<&SymbolEntry> {
        match self {
            SymbolValue::Extracted(entry) => Some(entry),
            SymbolValue::Seeded(_) => None,
        }
    }

    /// The `char` member, if there is a string one
    pub fn character(&self) -> Option<&str> {
        match self {
            SymbolValue::Extracted(entry) => Some(&entry.character),
            SymbolValue::Seeded(value) => value.get("char").and_then(Value::as_str),
        }
    }
}

impl From<SymbolEntry> for SymbolValue {
    fn from(entry: SymbolEntry) -> Self {
        SymbolValue::Extracted(entry)
    }
}

/// Seed key → raw JSON value
pub type SeedTable = BTreeMap<String, Value>;

/// The `symbols` table: seed values plus extracted entries
pub type SeededTable = BTreeMap<String, SymbolValue>;

/// Parse a seed table (`additional_commands.json`)
///
/// The seed must be a JSON object. Its values are kept untouched and merged
/// into `symbols` as they are.
pub fn parse_seed(text: &str) -> ExtractResult<SeedTable> {
    serde_json::from_str(text).map_err(|e| ExtractError::seed(e.to_string()))
}
