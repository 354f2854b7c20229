//! Pass results and run summaries

use std::fmt;

use super::options::{OutputTable, Pass};

/// What a pass did with the records it saw
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    /// Character records visited
    pub records: usize,
    /// Skipped because `mode="text"`
    pub text_mode: usize,
    /// Skipped because no LaTeX spelling was present
    pub no_latex: usize,
    /// Skipped because the spelling is not an escaped macro
    pub not_macro: usize,
    /// Macros the pass has no use for (wrong prefix, unbalanced argument)
    pub not_applicable: usize,
    /// Records that contributed to the tables
    pub accepted: usize,
}

impl fmt::Display for PassStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} records, {} accepted ({} text mode, {} without LaTeX, {} not macros, {} not applicable)",
            self.records,
            self.accepted,
            self.text_mode,
            self.no_latex,
            self.not_macro,
            self.not_applicable
        )
    }
}

/// Tables produced by a pass together with its statistics
#[derive(Debug, Clone)]
pub struct PassOutput<T> {
    pub tables: T,
    pub stats: PassStats,
}

impl<T> PassOutput<T> {
    pub fn new(tables: T, stats: PassStats) -> Self {
        Self { tables, stats }
    }
}

/// Summary of a full run
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    /// Statistics per pass, in run order
    pub passes: Vec<(Pass, PassStats)>,
    /// Tables written, in write order
    pub written: Vec<OutputTable>,
}

impl RunReport {
    pub fn stats_for(&self, pass: Pass) -> Option<&PassStats> {
        self.passes
            .iter()
            .find(|(p, _)| *p == pass)
            .map(|(_, stats)| stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_display() {
        let stats = PassStats {
            records: 10,
            text_mode: 4,
            no_latex: 1,
            not_macro: 2,
            not_applicable: 0,
            accepted: 3,
        };
        let msg = stats.to_string();
        assert!(msg.starts_with("10 records, 3 accepted"));
        assert!(msg.contains("4 text mode"));
    }

    #[test]
    fn test_report_lookup() {
        let report = RunReport {
            passes: vec![(Pass::Fonts, PassStats::default())],
            written: vec![OutputTable::Fonts],
        };
        assert!(report.stats_for(Pass::Fonts).is_some());
        assert!(report.stats_for(Pass::Tables).is_none());
    }
}
