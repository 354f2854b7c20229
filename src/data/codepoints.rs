//! Codepoint strings of the character database
//!
//! A character `id` names one or more Unicode scalar values: `U03B1` is a
//! single codepoint, `U1D400-1D401` is a sequence. One LaTeX symbol may map
//! to such a sequence, so decoding always yields a `String`.

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::error::{ExtractError, ExtractResult};

lazy_static! {
    /// Shape of a well-formed codepoint string
    static ref CODEPOINT_ID: Regex = Regex::new(r"^U[0-9A-Fa-f]+(?:-[0-9A-Fa-f]+)*$").unwrap();
}

/// Whether `id` has the `U<hex>[-<hex>...]` shape
pub fn is_codepoint_id(id: &str) -> bool {
    CODEPOINT_ID.is_match(id)
}

/// Decode a codepoint string into the characters it names
pub fn decode_codepoints(id: &str) -> ExtractResult<String> {
    if !is_codepoint_id(id) {
        return Err(ExtractError::invalid_codepoint(
            id,
            "expected U<hex> or U<hex>-<hex>-...",
        ));
    }

    let mut out = String::new();
    for segment in id[1..].split('-') {
        let value = u32::from_str_radix(segment, 16).map_err(|_| {
            ExtractError::invalid_codepoint(id, format!("hex segment '{}' is out of range", segment))
        })?;
        let c = char::from_u32(value).ok_or_else(|| {
            ExtractError::invalid_codepoint(id, format!("U+{:X} is not a Unicode scalar value", value))
        })?;
        out.push(c);
    }
    Ok(out)
}

/// Encode characters back into a codepoint string
///
/// Segments are uppercase hex padded to at least four digits, which is the
/// inverse of [`decode_codepoints`] for ids written in that form.
pub fn encode_codepoints(chars: &str) -> String {
    let segments: Vec<String> = chars.chars().map(|c| format!("{:04X}", c as u32)).collect();
    format!("U{}", segments.join("-"))
}
