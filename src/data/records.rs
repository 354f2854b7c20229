//! Character records of the `unicode.xml` database
//!
//! Only the parts of a `<character>` element that feed the symbol tables are
//! kept: the `mode`/`id`/`type` attributes, the description, the three
//! LaTeX spellings and the entity names in document order.

use roxmltree::{Document, Node, ParsingOptions};

use super::codepoints::decode_codepoints;
use crate::utils::error::{ExtractError, ExtractResult};

/// LaTeX escape marker
pub const ESCAPE: char = '\\';

/// Entity set whose names are preferred when shorter
pub const ALIAS_SET: &str = "mmlalias";

/// One `<entity>` child
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntityRef {
    pub id: String,
    pub set: Option<String>,
}

/// One `<character>` element
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterRecord {
    /// 1-based line of the element in the source document
    pub line: u32,
    pub id: Option<String>,
    pub mode: Option<String>,
    pub kind: Option<String>,
    pub description: Option<String>,
    /// `<AMS>` spelling
    pub ams: Option<String>,
    /// `<mathlatex>` spelling
    pub mathlatex: Option<String>,
    /// `<latex>` spelling
    pub latex: Option<String>,
    pub entities: Vec<EntityRef>,
}

impl CharacterRecord {
    /// Text-mode characters never enter the math symbol tables
    pub fn is_text_mode(&self) -> bool {
        self.mode.as_deref() == Some("text")
    }

    /// Preferred LaTeX spelling: AMS, then mathlatex, then latex
    pub fn latex_representation(&self) -> Option<&str> {
        self.ams
            .as_deref()
            .or(self.mathlatex.as_deref())
            .or(self.latex.as_deref())
    }

    /// The raw `id` attribute
    pub fn codepoint(&self) -> ExtractResult<&str> {
        self.id
            .as_deref()
            .ok_or_else(|| ExtractError::missing_attribute("id", self.line))
    }

    /// The characters named by `id`
    pub fn decoded_char(&self) -> ExtractResult<String> {
        decode_codepoints(self.codepoint()?)
    }

    /// Canonical entity name, wrapped as `&name;`
    ///
    /// The first entity seeds the choice. A later entity replaces it when it
    /// is a strictly shorter `mmlalias` name or when it equals the lowercase
    /// form of the current choice.
    pub fn entity_name(&self) -> Option<String> {
        let mut entities = self.entities.iter();
        let mut name = entities.next()?.id.as_str();
        for ent in entities {
            let candidate = ent.id.as_str();
            if ent.set.as_deref() == Some(ALIAS_SET)
                && candidate.chars().count() < name.chars().count()
            {
                name = candidate;
            } else if candidate == name.to_lowercase() {
                name = candidate;
            }
        }
        Some(format!("&{};", name))
    }
}

/// Canonical symbol key of a LaTeX spelling
///
/// Returns `None` unless the trimmed text starts with the escape marker.
/// The key is the text with surrounding whitespace and escape markers
/// removed; an empty key is also `None`.
pub fn symbol_key(latex: &str) -> Option<&str> {
    let trimmed = latex.trim();
    if !trimmed.starts_with(ESCAPE) {
        return None;
    }
    let key = trimmed.trim_matches(ESCAPE).trim();
    if key.is_empty() {
        None
    } else {
        Some(key)
    }
}

/// Parse the database into its `<character>` records, in document order
///
/// Only direct children of the root element are considered.
pub fn parse_character_database(source: &str) -> ExtractResult<Vec<CharacterRecord>> {
    let options = ParsingOptions {
        allow_dtd: true,
        ..ParsingOptions::default()
    };
    let doc = Document::parse_with_options(source, options)?;

    let records = doc
        .root_element()
        .children()
        .filter(|n| n.has_tag_name("character"))
        .map(|n| read_record(&doc, n))
        .collect();
    Ok(records)
}

fn read_record(doc: &Document, node: Node) -> CharacterRecord {
    let mut record = CharacterRecord {
        line: doc.text_pos_at(node.range().start).row,
        id: node.attribute("id").map(str::to_string),
        mode: node.attribute("mode").map(str::to_string),
        kind: node.attribute("type").map(str::to_string),
        ..CharacterRecord::default()
    };

    for child in node.children().filter(Node::is_element) {
        let text = || child.text().unwrap_or_default().to_string();
        match child.tag_name().name() {
            "description" if record.description.is_none() => {
                record.description = child.text().map(str::to_string)
            }
            "AMS" if record.ams.is_none() => record.ams = Some(text()),
            "mathlatex" if record.mathlatex.is_none() => record.mathlatex = Some(text()),
            "latex" if record.latex.is_none() => record.latex = Some(text()),
            "entity" => {
                if let Some(id) = child.attribute("id") {
                    record.entities.push(EntityRef {
                        id: id.to_string(),
                        set: child.attribute("set").map(str::to_string),
                    });
                }
            }
            _ => {}
        }
    }
    record
}
