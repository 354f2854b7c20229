//! Utility modules
//!
//! This module contains utilities and helpers:
//! - Error types and result types
//! - Balanced brace matching
//! - Source reading, JSON serialization and table sinks

pub mod braces;
pub mod error;
pub mod files;

// Re-export commonly used items
pub use braces::find_matching_brace;
pub use error::{ExtractError, ExtractResult};
pub use files::{
    read_optional_text, read_text, to_json, DirectorySink, JsonStyle, MemorySink, TableSink,
};
