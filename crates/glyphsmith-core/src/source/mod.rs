//! Firmware source access.
//!
//! All file I/O for the embedded direction lives here: a source file is
//! read once and split into named declaration blocks by prefix/terminator
//! detection, with no semantic awareness of the body lines. Parsing the
//! bytes out of a block is `formats::progmem`'s job.

mod c_array;

pub use c_array::extract_declarations;

use std::fs;
use std::path::Path;

use thiserror::Error;

/// One named array declaration lifted out of a firmware source file.
///
/// `lines` holds the raw body lines between the declaration line and its
/// `};` terminator, exclusive of both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub name: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid identifier '{name}' on line {line}")]
    InvalidIdentifier { name: String, line: usize },
    #[error("declaration '{name}' is missing its closing terminator")]
    Unterminated { name: String },
}

/// Read a firmware source file and extract every named declaration in it.
pub fn read_declarations(path: &Path) -> Result<Vec<Declaration>, SourceError> {
    let text = fs::read_to_string(path)?;
    extract_declarations(&text)
}
