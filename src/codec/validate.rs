//! Import validation, run before any decode is attempted

use std::fs;
use std::path::Path;

use super::{ImportError, ImportRequest, ImportSource};

/// MIME type hosts report for delimited text
pub const CSV_MIME_TYPE: &str = "text/csv";

/// Maximum import size in bytes (50 MB)
pub const MAX_IMPORT_SIZE: u64 = 50 * 1024 * 1024;

/// Whether a file looks like delimited text by declared type or name
///
/// The suffix check is case-sensitive.
pub fn is_csv_type(name: &str, declared_type: Option<&str>) -> bool {
    declared_type == Some(CSV_MIME_TYPE) || name.ends_with(".csv")
}

/// Validate an import request
///
/// Checks:
/// - Declared type or file name marks it as CSV
/// - Path sources exist, are not directories and fit the size limit
/// - Byte sources fit the size limit
pub fn validate_import(request: &ImportRequest) -> Result<(), ImportError> {
    if !is_csv_type(&request.name, request.declared_type.as_deref()) {
        return Err(ImportError::UnsupportedType {
            name: request.name.clone(),
        });
    }

    match &request.source {
        ImportSource::Path(path) => validate_path(path),
        ImportSource::Bytes(bytes) => check_size(bytes.len() as u64),
    }
}

fn validate_path(path: &Path) -> Result<(), ImportError> {
    let metadata = fs::metadata(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => ImportError::NotFound {
            path: path.to_path_buf(),
        },
        std::io::ErrorKind::PermissionDenied => ImportError::PermissionDenied {
            path: path.to_path_buf(),
        },
        _ => ImportError::Io(e.to_string()),
    })?;

    if metadata.is_dir() {
        return Err(ImportError::IsDirectory {
            path: path.to_path_buf(),
        });
    }

    check_size(metadata.len())
}

fn check_size(len: u64) -> Result<(), ImportError> {
    if len > MAX_IMPORT_SIZE {
        return Err(ImportError::TooLarge {
            size_mb: len as f64 / (1024.0 * 1024.0),
        });
    }
    Ok(())
}
