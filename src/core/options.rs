//! Extraction options

use std::fmt;
use std::path::PathBuf;

use crate::utils::files::JsonStyle;

/// Default character database file name
pub const DEFAULT_SOURCE: &str = "unicode.xml";

/// Default seed table file name
pub const DEFAULT_SEED: &str = "additional_commands.json";

/// One pass over the character records
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Pass {
    /// `commands`, `symbols`, `counts` and `multi`
    Tables,
    /// `fonts`
    Fonts,
    /// `negations`
    Negations,
}

impl Pass {
    pub const ALL: [Pass; 3] = [Pass::Tables, Pass::Fonts, Pass::Negations];

    /// Tables this pass produces, in write order
    pub fn outputs(self) -> &'static [OutputTable] {
        match self {
            Pass::Tables => &[
                OutputTable::Commands,
                OutputTable::Symbols,
                OutputTable::Counts,
                OutputTable::Multi,
            ],
            Pass::Fonts => &[OutputTable::Fonts],
            Pass::Negations => &[OutputTable::Negations],
        }
    }
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Tables => write!(f, "tables"),
            Pass::Fonts => write!(f, "fonts"),
            Pass::Negations => write!(f, "negations"),
        }
    }
}

/// A generated JSON table
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OutputTable {
    Commands,
    Symbols,
    Counts,
    Multi,
    Fonts,
    Negations,
}

impl OutputTable {
    pub fn file_name(self) -> &'static str {
        match self {
            OutputTable::Commands => "commands.json",
            OutputTable::Symbols => "symbols.json",
            OutputTable::Counts => "counts.json",
            OutputTable::Multi => "multi.json",
            OutputTable::Fonts => "fonts.json",
            OutputTable::Negations => "negations.json",
        }
    }
}

/// Options for an extraction run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Character database to read
    /// Default: `unicode.xml`
    pub source: PathBuf,

    /// Seed for the `symbols` table, merged before the pass starts
    /// Default: `additional_commands.json`
    pub seed: PathBuf,

    /// Fail when the seed file does not exist instead of starting empty
    /// Default: false
    pub seed_required: bool,

    /// Directory receiving the JSON tables
    /// Default: the working directory
    pub output_dir: PathBuf,

    /// JSON layout
    /// Default: compact
    pub style: JsonStyle,

    /// Passes to run, in order
    /// Default: all of them
    pub passes: Vec<Pass>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE),
            seed: PathBuf::from(DEFAULT_SEED),
            seed_required: false,
            output_dir: PathBuf::from("."),
            style: JsonStyle::Compact,
            passes: Pass::ALL.to_vec(),
        }
    }
}

impl ExtractOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Indented output, easier to diff by hand
    pub fn pretty() -> Self {
        Self {
            style: JsonStyle::Pretty,
            ..Self::default()
        }
    }

    /// Only the main pass (`commands`, `symbols`, `counts`, `multi`)
    pub fn tables_only() -> Self {
        Self {
            passes: vec![Pass::Tables],
            ..Self::default()
        }
    }

    /// Whether `pass` is enabled
    pub fn runs(&self, pass: Pass) -> bool {
        self.passes.contains(&pass)
    }

    /// Every table these options produce, in write order
    pub fn outputs(&self) -> Vec<OutputTable> {
        self.passes
            .iter()
            .flat_map(|p| p.outputs().iter().copied())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let opts = ExtractOptions::new();
        assert_eq!(opts.source, PathBuf::from("unicode.xml"));
        assert_eq!(opts.seed, PathBuf::from("additional_commands.json"));
        assert!(!opts.seed_required);
        assert_eq!(opts.style, JsonStyle::Compact);
        assert!(Pass::ALL.iter().all(|p| opts.runs(*p)));
    }

    #[test]
    fn test_preset_pretty() {
        let opts = ExtractOptions::pretty();
        assert_eq!(opts.style, JsonStyle::Pretty);
        assert_eq!(opts.passes, Pass::ALL.to_vec());
    }

    #[test]
    fn test_preset_tables_only() {
        let opts = ExtractOptions::tables_only();
        assert!(opts.runs(Pass::Tables));
        assert!(!opts.runs(Pass::Fonts));
        let names: Vec<_> = opts.outputs().iter().map(|t| t.file_name()).collect();
        assert_eq!(
            names,
            vec!["commands.json", "symbols.json", "counts.json", "multi.json"]
        );
    }

    #[test]
    fn test_all_outputs_order() {
        let names: Vec<_> = ExtractOptions::new()
            .outputs()
            .iter()
            .map(|t| t.file_name())
            .collect();
        assert_eq!(names.len(), 6);
        assert_eq!(names[4], "fonts.json");
        assert_eq!(names[5], "negations.json");
    }
}
