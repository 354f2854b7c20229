//! Font-modifier pass: `fonts`
//!
//! Collects `\math<variant>{<arg>}` spellings into a table from modifier
//! name to argument to character, e.g. `mathbf` → `A` → `𝐀`.

use std::collections::BTreeMap;

use tracing::{debug, trace};

use super::macro_key;
use super::report::{PassOutput, PassStats};
use super::tables::ARG_OPEN;
use crate::data::records::{CharacterRecord, ESCAPE};
use crate::utils::braces::find_matching_brace;
use crate::utils::error::ExtractResult;

/// Prefix shared by all font-modifier commands
pub const FONT_PREFIX: &str = "math";

/// Modifier → argument → character
pub type FontTable = BTreeMap<String, BTreeMap<String, String>>;

/// Split `mathbf{A}` into (`mathbf`, `A`)
///
/// Returns `None` for keys without the `math` prefix, without an argument,
/// with an unbalanced argument, or with an empty one.
pub fn split_font_command(key: &str) -> Option<(&str, &str)> {
    if !key.starts_with(FONT_PREFIX) {
        return None;
    }
    let open = key.find(ARG_OPEN)?;
    let close = find_matching_brace(key, open, ('{', '}'))?;
    let arg = key[open + 1..close].trim().trim_matches(ESCAPE).trim();
    if arg.is_empty() {
        return None;
    }
    Some((&key[..open], arg))
}

/// Run the font-modifier pass over `records`
///
/// A later record replaces an earlier one for the same modifier and argument.
pub fn extract_fonts(records: &[CharacterRecord]) -> ExtractResult<PassOutput<FontTable>> {
    let mut stats = PassStats::default();
    let mut fonts = FontTable::new();

    for record in records {
        let Some(key) = macro_key(record, record.latex_representation(), &mut stats) else {
            continue;
        };
        let Some((font, arg)) = split_font_command(key) else {
            if key.starts_with(FONT_PREFIX) {
                trace!(line = record.line, key, "no usable font argument");
            }
            stats.not_applicable += 1;
            continue;
        };

        let character = record.decoded_char()?;
        stats.accepted += 1;
        fonts
            .entry(font.to_string())
            .or_default()
            .insert(arg.to_string(), character);
    }

    debug!(modifiers = fonts.len(), "font pass finished");
    Ok(PassOutput::new(fonts, stats))
}
