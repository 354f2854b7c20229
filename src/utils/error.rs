//! Error handling for texsym extraction runs
//!
//! This module provides a unified error type and result type for all
//! extraction operations. Every variant is fatal: the run stops at the first
//! error and whatever tables were already written stay on disk.

use std::path::PathBuf;

/// Extraction error type
#[derive(Debug, thiserror::Error)]
pub enum ExtractError {
    /// Reading the source/seed or writing an output table failed
    #[error("IO error at {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The character database is not well-formed XML
    #[error("XML parse error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// A character element lacks an attribute the tables depend on
    #[error("Character element at line {line} is missing the '{attribute}' attribute")]
    MissingAttribute { attribute: &'static str, line: u32 },

    /// The `id` attribute is not a valid `U<hex>[-<hex>...]` codepoint string
    #[error("Invalid codepoint '{value}': {reason}")]
    InvalidCodepoint { value: String, reason: String },

    /// The seed table could not be interpreted
    #[error("Seed table error: {message}")]
    Seed { message: String },

    /// Serializing a table failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for extraction operations
pub type ExtractResult<T> = Result<T, ExtractError>;

// Convenience constructors for errors
impl ExtractError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ExtractError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn missing_attribute(attribute: &'static str, line: u32) -> Self {
        ExtractError::MissingAttribute { attribute, line }
    }

    pub fn invalid_codepoint(value: impl Into<String>, reason: impl Into<String>) -> Self {
        ExtractError::InvalidCodepoint {
            value: value.into(),
            reason: reason.into(),
        }
    }

    pub fn seed(message: impl Into<String>) -> Self {
        ExtractError::Seed {
            message: message.into(),
        }
    }
}
