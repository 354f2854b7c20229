//! Extraction passes and the run that drives them
//!
//! - `tables`: `commands`, `symbols`, `counts`, `multi`
//! - `fonts`: font-modifier table
//! - `negations`: negated relation table
//!
//! The passes share no state; each one walks the parsed records on its own.

pub mod fonts;
pub mod negations;
pub mod options;
pub mod report;
pub mod tables;

use serde::Serialize;
use tracing::{info, trace};

use crate::data::entry::parse_seed;
use crate::data::records::{parse_character_database, symbol_key, CharacterRecord};
use crate::utils::error::ExtractResult;
use crate::utils::files::{read_optional_text, read_text, to_json, DirectorySink, TableSink};

pub use fonts::{extract_fonts, FontTable};
pub use negations::{extract_negations, NegationTable};
pub use options::{ExtractOptions, OutputTable, Pass};
pub use report::{PassOutput, PassStats, RunReport};
pub use tables::{extract_tables, ArgCountTable, MultiTable, SymbolTables};

/// Canonical key of `record` for a pass reading `spelling`
///
/// Counts the record in `stats` and, when it is skipped, the reason why.
pub(crate) fn macro_key<'r>(
    record: &'r CharacterRecord,
    spelling: Option<&'r str>,
    stats: &mut PassStats,
) -> Option<&'r str> {
    stats.records += 1;
    if record.is_text_mode() {
        stats.text_mode += 1;
        return None;
    }
    let Some(latex) = spelling else {
        stats.no_latex += 1;
        trace!(line = record.line, "no LaTeX spelling");
        return None;
    };
    let key = symbol_key(latex);
    if key.is_none() {
        stats.not_macro += 1;
        trace!(line = record.line, latex, "not an escaped macro");
    }
    key
}

/// Runs the configured passes and persists their tables
#[derive(Debug, Clone, Default)]
pub struct Extractor {
    options: ExtractOptions,
}

impl Extractor {
    pub fn new(options: ExtractOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Read the configured files and write every table into the output directory
    pub fn run(&self) -> ExtractResult<RunReport> {
        let source = read_text(&self.options.source)?;
        let seed = if self.options.runs(Pass::Tables) {
            self.load_seed()?
        } else {
            None
        };
        let mut sink = DirectorySink::new(&self.options.output_dir);
        self.run_with(&source, seed.as_deref(), &mut sink)
    }

    fn load_seed(&self) -> ExtractResult<Option<String>> {
        let path = &self.options.seed;
        let seed = if self.options.seed_required {
            Some(read_text(path)?)
        } else {
            read_optional_text(path)?
        };
        match seed {
            Some(_) => info!(path = %path.display(), "loaded seed table"),
            None => info!(path = %path.display(), "no seed table, starting empty"),
        }
        Ok(seed)
    }

    /// Run over an in-memory document, writing into `sink`
    ///
    /// `seed` is the text of the seed table, if any.
    pub fn run_with(
        &self,
        source: &str,
        seed: Option<&str>,
        sink: &mut dyn TableSink,
    ) -> ExtractResult<RunReport> {
        let records = parse_character_database(source)?;
        info!(records = records.len(), "parsed character database");

        let mut report = RunReport::default();
        for &pass in &self.options.passes {
            let stats = match pass {
                Pass::Tables => {
                    let seed = seed.map(parse_seed).transpose()?.unwrap_or_default();
                    let out = extract_tables(&records, seed)?;
                    let tables = &out.tables;
                    self.write(sink, OutputTable::Commands, &tables.commands, &mut report)?;
                    self.write(sink, OutputTable::Symbols, &tables.symbols, &mut report)?;
                    self.write(sink, OutputTable::Counts, &tables.counts, &mut report)?;
                    self.write(sink, OutputTable::Multi, &tables.multi, &mut report)?;
                    out.stats
                }
                Pass::Fonts => {
                    let out = extract_fonts(&records)?;
                    self.write(sink, OutputTable::Fonts, &out.tables, &mut report)?;
                    out.stats
                }
                Pass::Negations => {
                    let out = extract_negations(&records)?;
                    self.write(sink, OutputTable::Negations, &out.tables, &mut report)?;
                    out.stats
                }
            };
            info!(%pass, "{}", stats);
            report.passes.push((pass, stats));
        }
        Ok(report)
    }

    fn write<T: Serialize + ?Sized>(
        &self,
        sink: &mut dyn TableSink,
        table: OutputTable,
        value: &T,
        report: &mut RunReport,
    ) -> ExtractResult<()> {
        let json = to_json(value, self.options.style)?;
        sink.write_table(table.file_name(), &json)?;
        report.written.push(table);
        Ok(())
    }
}
