//! Header-keyed decoding using the csv crate
//!
//! The first record names the columns. Declared columns are copied by header
//! name, unknown ones are ignored and missing ones read as empty strings.

use std::fs::File;
use std::io::{self, BufReader};

use serde::Deserialize;

use super::{ImportError, ImportRequest, ImportSource};
use crate::grid::{shape_rows, Row, RowValues};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawRecord {
    #[serde(rename = "Title")]
    title: String,
    #[serde(rename = "Author")]
    author: String,
    #[serde(rename = "Genre")]
    genre: String,
    #[serde(rename = "PublishedYear")]
    published_year: String,
    #[serde(rename = "ISBN")]
    isbn: String,
}

impl RawRecord {
    fn into_values(self) -> RowValues {
        [
            self.title,
            self.author,
            self.genre,
            self.published_year,
            self.isbn,
        ]
    }
}

/// Decode delimited text into rows with fresh sequential ids
///
/// Empty lines are skipped. Records whose field count differs from the
/// header are rejected, as is content that is not valid UTF-8.
pub fn decode_rows<R: io::Read>(reader: R) -> Result<Vec<Row>, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(false)
        .from_reader(reader);

    let mut records: Vec<RowValues> = Vec::new();
    for result in reader.deserialize::<RawRecord>() {
        let record = result.map_err(import_error)?;
        records.push(record.into_values());
    }

    if records.is_empty() {
        return Err(ImportError::Empty);
    }

    tracing::debug!("Decoded {} records", records.len());
    Ok(shape_rows(records))
}

/// Decode in-memory text
pub fn decode_str(content: &str) -> Result<Vec<Row>, ImportError> {
    decode_rows(content.as_bytes())
}

/// Read and decode the source of an import request
///
/// Blocking; the runtime calls this from a worker thread.
pub fn decode_request(request: &ImportRequest) -> Result<Vec<Row>, ImportError> {
    match &request.source {
        ImportSource::Path(path) => {
            let file = File::open(path).map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ImportError::NotFound { path: path.clone() },
                io::ErrorKind::PermissionDenied => {
                    ImportError::PermissionDenied { path: path.clone() }
                }
                _ => ImportError::Io(e.to_string()),
            })?;
            decode_rows(BufReader::new(file))
        }
        ImportSource::Bytes(bytes) => decode_rows(bytes.as_slice()),
    }
}

fn import_error(err: csv::Error) -> ImportError {
    let line = err.position().map(|pos| pos.line());
    match err.into_kind() {
        csv::ErrorKind::Io(e) => ImportError::Io(e.to_string()),
        csv::ErrorKind::UnequalLengths {
            expected_len, len, ..
        } => ImportError::Parse {
            message: format!("expected {} fields, found {}", expected_len, len),
            line,
        },
        csv::ErrorKind::Utf8 { err, .. } => ImportError::Parse {
            message: format!("invalid UTF-8 in field {}", err.field() + 1),
            line,
        },
        csv::ErrorKind::Deserialize { err, .. } => ImportError::Parse {
            message: err.to_string(),
            line,
        },
        other => ImportError::Parse {
            message: format!("{:?}", other),
            line,
        },
    }
}
