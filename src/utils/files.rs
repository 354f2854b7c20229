//! Reading the source documents and persisting the generated tables
//!
//! The key abstraction is the `TableSink` trait which receives each
//! serialized table by file name:
//! - `DirectorySink`: writes `<name>` into a directory on disk (CLI)
//! - `MemorySink`: keeps the serialized tables in memory (library use, tests)

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use tracing::debug;

use super::error::{ExtractError, ExtractResult};

/// JSON layout of the written tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonStyle {
    /// Single line, no extra whitespace
    #[default]
    Compact,
    /// One member per line, indented by four spaces
    Pretty,
}

/// Serialize `value` in the requested style
///
/// Key order comes from the value itself; every table in this crate is built
/// on ordered maps so the output is deterministic. Non-ASCII text is emitted
/// as raw UTF-8, never as `\uXXXX` escapes.
pub fn to_json<T: Serialize + ?Sized>(value: &T, style: JsonStyle) -> ExtractResult<String> {
    match style {
        JsonStyle::Compact => Ok(serde_json::to_string(value)?),
        JsonStyle::Pretty => {
            let mut buf = Vec::new();
            let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
            value.serialize(&mut ser)?;
            let json =
                String::from_utf8(buf).map_err(<serde_json::Error as serde::ser::Error>::custom)?;
            Ok(json)
        }
    }
}

/// Destination for serialized tables
pub trait TableSink {
    /// Store one table under `name` (e.g. `commands.json`)
    fn write_table(&mut self, name: &str, contents: &str) -> ExtractResult<()>;
}

/// Writes each table as a file inside a directory
#[derive(Debug, Clone)]
pub struct DirectorySink {
    dir: PathBuf,
}

impl DirectorySink {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }

    /// Full path a table named `name` is written to
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl TableSink for DirectorySink {
    fn write_table(&mut self, name: &str, contents: &str) -> ExtractResult<()> {
        let path = self.path_for(name);
        fs::write(&path, contents).map_err(|e| ExtractError::io(&path, e))?;
        debug!(path = %path.display(), bytes = contents.len(), "wrote table");
        Ok(())
    }
}

/// In-memory table storage
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    tables: BTreeMap<String, String>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.tables.get(name).map(String::as_str)
    }

    /// Names of the stored tables, sorted
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tables.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl TableSink for MemorySink {
    fn write_table(&mut self, name: &str, contents: &str) -> ExtractResult<()> {
        self.tables.insert(name.to_string(), contents.to_string());
        Ok(())
    }
}

/// Read a whole text file, attaching the path to any IO error
pub fn read_text(path: impl AsRef<Path>) -> ExtractResult<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| ExtractError::io(path, e))
}

/// Read a text file that may legitimately be absent
pub fn read_optional_text(path: impl AsRef<Path>) -> ExtractResult<Option<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(text) => Ok(Some(text)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(ExtractError::io(path, e)),
    }
}
