//! # texsym
//!
//! LaTeX ↔ Unicode symbol table extractor for `unicode.xml` character
//! databases.
//!
//! ## Tables
//!
//! - **commands**: LaTeX macros taking brace arguments (`sqrt{}`)
//! - **symbols**: argument-less LaTeX symbols (`alpha`)
//! - **counts**: argument count → macro names with that many arguments
//! - **multi**: symbols the database maps to more than one character
//! - **fonts**: font modifier → argument → character (`mathbf` → `A` → `𝐀`)
//! - **negations**: `not` → negated relation → character
//!
//! ## Usage Examples
//!
//! ```rust
//! use texsym::extract_symbol_tables;
//!
//! let xml = r#"<charlist>
//!   <character id="U03B1" mode="math" type="alpha"><latex>\alpha</latex></character>
//!   <character id="U221A" mode="math" type="op"><latex>\sqrt{}</latex></character>
//! </charlist>"#;
//!
//! let tables = extract_symbol_tables(xml).unwrap();
//! assert_eq!(tables.symbols["alpha"].character(), Some("α"));
//! assert_eq!(tables.commands["sqrt{}"].character, "√");
//! ```
//!
//! ### Writing the JSON files
//!
//! Tables are written with sorted keys. Non-ASCII characters are written as
//! raw UTF-8 rather than `\uXXXX` escapes, so the files decode to the same
//! data as an ASCII-escaped dump but do not match one byte for byte.
//!
//! ```rust,no_run
//! use texsym::{ExtractOptions, Extractor};
//!
//! let report = Extractor::new(ExtractOptions::pretty()).run().unwrap();
//! println!("wrote {} tables", report.written.len());
//! ```

/// Extraction passes
pub mod core;

/// Data layer - character records and symbol entries
pub mod data;

/// Utility modules
pub mod utils;

// Re-export core pass functions
pub use core::{
    extract_fonts, extract_negations, extract_tables, ArgCountTable, ExtractOptions, Extractor,
    FontTable, MultiTable, NegationTable, OutputTable, Pass, PassOutput, PassStats, RunReport,
    SymbolTables,
};

// Re-export data model
pub use data::{
    decode_codepoints, encode_codepoints, parse_character_database, parse_seed, CharacterRecord,
    SeedTable, SeededTable, SymbolEntry, SymbolTable, SymbolValue,
};

// Re-export utilities
pub use utils::{
    find_matching_brace, DirectorySink, ExtractError, ExtractResult, JsonStyle, MemorySink,
    TableSink,
};

/// Build the main tables from a `unicode.xml` document with an empty seed
pub fn extract_symbol_tables(source: &str) -> ExtractResult<SymbolTables> {
    let records = parse_character_database(source)?;
    Ok(extract_tables(&records, SeedTable::new())?.tables)
}

/// Run every configured pass and write the tables to disk
pub fn run(options: ExtractOptions) -> ExtractResult<RunReport> {
    Extractor::new(options).run()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_symbol_tables() {
        let xml = r#"<charlist>
            <character id="U03B1" mode="math"><latex>\alpha</latex></character>
        </charlist>"#;
        let tables = extract_symbol_tables(xml).unwrap();
        assert_eq!(tables.symbols.len(), 1);
        assert!(tables.commands.is_empty());
    }

    #[test]
    fn test_extract_symbol_tables_malformed() {
        let err = extract_symbol_tables("<charlist>").unwrap_err();
        assert!(matches!(err, ExtractError::Xml(_)));
    }
}
