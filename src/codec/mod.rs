//! Delimited-text import and export
//!
//! Wraps the `csv` crate behind the row contract the grid expects:
//! - Import: type check, header-keyed decode, Row shaping
//! - Export: header + records with the row id stripped, date-stamped filename
//!
//! # Architecture
//!
//! ```text
//! ImportRequest ──validate_import──► decode_request ──► Vec<Row>
//!                                         │
//!                                   ImportError (type, empty, parse, I/O)
//!
//! &[&Row] ──encode_rows──► Vec<u8> (CRLF records) + export_filename(date)
//! ```

mod decoder;
mod encoder;
mod validate;

use std::path::PathBuf;

use thiserror::Error;

pub use decoder::{decode_request, decode_rows, decode_str};
pub use encoder::{encode_rows, export_filename, EXPORT_EXTENSION};
pub use validate::{is_csv_type, validate_import, CSV_MIME_TYPE, MAX_IMPORT_SIZE};

/// Errors that can occur while importing a file
///
/// Display strings are user-facing; they end up in notifications.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ImportError {
    /// Declared type and file name both fail the CSV check
    #[error("Please upload a CSV file")]
    UnsupportedType { name: String },

    /// Header only, or no bytes at all
    #[error("CSV file appears to be empty")]
    Empty,

    /// Decoder rejected the content
    #[error("{}", describe_parse(.message, .line))]
    Parse { message: String, line: Option<u64> },

    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Permission denied: {}", .path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Cannot import a directory: {}", .path.display())]
    IsDirectory { path: PathBuf },

    #[error(
        "File is too large ({size_mb:.1} MB, max {} MB)",
        MAX_IMPORT_SIZE / (1024 * 1024)
    )]
    TooLarge { size_mb: f64 },

    #[error("Failed to read file: {0}")]
    Io(String),
}

fn describe_parse(message: &str, line: &Option<u64>) -> String {
    match line {
        Some(line) => format!("CSV parse error at line {}: {}", line, message),
        None => format!("CSV parse error: {}", message),
    }
}

/// Errors that can occur while producing an export
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] ::csv::Error),
}

/// Where the bytes of an import come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    /// A file on disk, read on the import worker
    Path(PathBuf),
    /// Content the host already holds in memory (drag and drop, paste)
    Bytes(Vec<u8>),
}

/// A file the user picked or dropped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRequest {
    /// File name as presented to the user
    pub name: String,
    /// MIME type reported by the host, if any
    pub declared_type: Option<String>,
    pub source: ImportSource,
}

impl ImportRequest {
    /// Request for a file on disk; the name is taken from the path
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            name,
            declared_type: None,
            source: ImportSource::Path(path),
        }
    }

    /// Request for in-memory content
    pub fn from_bytes(
        name: impl Into<String>,
        declared_type: Option<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            name: name.into(),
            declared_type,
            source: ImportSource::Bytes(bytes.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_message_with_line() {
        let err = ImportError::Parse {
            message: "expected 5 fields, found 3".to_string(),
            line: Some(4),
        };
        assert_eq!(
            err.to_string(),
            "CSV parse error at line 4: expected 5 fields, found 3"
        );
    }

    #[test]
    fn test_user_messages() {
        assert_eq!(
            ImportError::Empty.to_string(),
            "CSV file appears to be empty"
        );
        assert_eq!(
            ImportError::UnsupportedType {
                name: "notes.txt".into()
            }
            .to_string(),
            "Please upload a CSV file"
        );
        assert_eq!(
            ImportError::TooLarge { size_mb: 72.34 }.to_string(),
            "File is too large (72.3 MB, max 50 MB)"
        );
    }

    #[test]
    fn test_request_name_from_path() {
        let request = ImportRequest::from_path("/data/books.csv");
        assert_eq!(request.name, "books.csv");
        assert_eq!(request.declared_type, None);
        assert_eq!(
            request.source,
            ImportSource::Path(PathBuf::from("/data/books.csv"))
        );
    }
}
