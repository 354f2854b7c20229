//! Negation pass: `negations`
//!
//! Only the plain `<latex>` spelling is consulted, since that is where the
//! database writes negated relations as `\not\<relation>`.

use std::collections::BTreeMap;

use tracing::debug;

use super::macro_key;
use super::report::{PassOutput, PassStats};
use crate::data::records::{CharacterRecord, ESCAPE};
use crate::utils::error::ExtractResult;

/// Stem of every negation command
pub const NEGATION_STEM: &str = "not";

/// Stem → negated argument → character
pub type NegationTable = BTreeMap<String, BTreeMap<String, String>>;

/// Split `not\in` into (`not`, `in`)
pub fn split_negation(key: &str) -> Option<(&str, &str)> {
    let rest = key.strip_prefix(NEGATION_STEM)?;
    let arg = rest.trim().trim_matches(ESCAPE).trim();
    if arg.is_empty() {
        return None;
    }
    Some((NEGATION_STEM, arg))
}

/// Run the negation pass over `records`
///
/// A later record replaces an earlier one for the same argument.
pub fn extract_negations(records: &[CharacterRecord]) -> ExtractResult<PassOutput<NegationTable>> {
    let mut stats = PassStats::default();
    let mut negations = NegationTable::new();

    for record in records {
        let Some(key) = macro_key(record, record.latex.as_deref(), &mut stats) else {
            continue;
        };
        let Some((stem, arg)) = split_negation(key) else {
            stats.not_applicable += 1;
            continue;
        };

        let character = record.decoded_char()?;
        stats.accepted += 1;
        negations
            .entry(stem.to_string())
            .or_default()
            .insert(arg.to_string(), character);
    }

    debug!(
        negated = negations.values().map(BTreeMap::len).sum::<usize>(),
        "negation pass finished"
    );
    Ok(PassOutput::new(negations, stats))
}
