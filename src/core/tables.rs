//! Main pass: `commands`, `symbols`, `counts` and `multi`
//!
//! Every math-mode record with an escaped LaTeX spelling is keyed by its
//! canonical symbol text. Keys containing an argument brace are commands,
//! everything else is a plain symbol. Both tables keep the first entry seen
//! for a key; `multi` keeps every entry and is reduced afterwards to the
//! keys that map to more than one character.

use std::collections::BTreeMap;

use fxhash::FxHashMap;
use indexmap::IndexSet;
use tracing::{debug, trace};

use super::macro_key;
use super::report::{PassOutput, PassStats};
use crate::data::entry::{SeedTable, SeededTable, SymbolEntry, SymbolTable, SymbolValue};
use crate::data::records::CharacterRecord;
use crate::utils::error::ExtractResult;

/// Opens a macro argument
pub const ARG_OPEN: char = '{';

/// Argument count → macro prefixes taking that many arguments, first seen first
pub type ArgCountTable = BTreeMap<usize, IndexSet<String>>;

/// Symbol key → every entry sharing it
pub type MultiTable = BTreeMap<String, Vec<SymbolEntry>>;

/// Output of the main pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SymbolTables {
    pub commands: SymbolTable,
    pub symbols: SeededTable,
    pub counts: ArgCountTable,
    pub multi: MultiTable,
}

impl SymbolTables {
    /// Extracted entry of a plain symbol; `None` when absent or seeded
    pub fn symbol(&self, key: &str) -> Option<&SymbolEntry> {
        self.symbols.get(key).and_then(SymbolValue::as_entry)
    }
}

/// Number of arguments and the macro name in front of them
///
/// `frac{}{}` has two arguments and prefix `frac`.
pub fn command_signature(key: &str) -> (usize, &str) {
    let count = key.matches(ARG_OPEN).count();
    let prefix = key.split(ARG_OPEN).next().unwrap_or_default();
    (count, prefix)
}

/// Run the main pass over `records`
///
/// `seed` is the initial `symbols` table; its values are never replaced.
pub fn extract_tables(
    records: &[CharacterRecord],
    seed: SeedTable,
) -> ExtractResult<PassOutput<SymbolTables>> {
    let mut stats = PassStats::default();
    let mut commands = SymbolTable::new();
    let mut symbols: SeededTable = seed
        .into_iter()
        .map(|(key, value)| (key, SymbolValue::Seeded(value)))
        .collect();
    let mut counts = ArgCountTable::new();
    let mut variants: FxHashMap<String, Vec<SymbolEntry>> = FxHashMap::default();

    for record in records {
        let Some(key) = macro_key(record, record.latex_representation(), &mut stats) else {
            continue;
        };
        let entry = SymbolEntry::from_record(record)?;
        stats.accepted += 1;

        variants
            .entry(key.to_string())
            .or_default()
            .push(entry.clone());

        if key.contains(ARG_OPEN) {
            if commands.contains_key(key) {
                continue;
            }
            commands.insert(key.to_string(), entry);

            let (argcount, prefix) = command_signature(key);
            if prefix.is_empty() {
                trace!(line = record.line, key, "command without a name prefix");
                continue;
            }
            counts
                .entry(argcount)
                .or_default()
                .insert(prefix.to_string());
        } else if !symbols.contains_key(key) {
            symbols.insert(key.to_string(), entry.into());
        }
    }

    let multi: MultiTable = variants
        .into_iter()
        .filter(|(_, entries)| entries.len() > 1)
        .collect();

    debug!(
        commands = commands.len(),
        symbols = symbols.len(),
        arities = counts.len(),
        multi = multi.len(),
        "main pass finished"
    );

    Ok(PassOutput::new(
        SymbolTables {
            commands,
            symbols,
            counts,
            multi,
        },
        stats,
    ))
}
