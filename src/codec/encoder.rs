//! Export encoding

use chrono::NaiveDate;

use super::ExportError;
use crate::grid::{Column, Row};

/// File extension of exported files
pub const EXPORT_EXTENSION: &str = "csv";

/// Serialize rows as delimited text
///
/// Writes the header followed by one CRLF-terminated record per row, in the
/// order given. Row ids are not part of the output.
pub fn encode_rows(rows: &[&Row]) -> Result<Vec<u8>, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(Vec::new());

    writer.write_record(Column::ALL.map(Column::name))?;
    for row in rows {
        writer.write_record(row.values())?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Io(e.into_error()))
}

/// `csv-export-YYYY-MM-DD.csv`
pub fn export_filename(date: NaiveDate) -> String {
    format!(
        "csv-export-{}.{}",
        date.format("%Y-%m-%d"),
        EXPORT_EXTENSION
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::shape_rows;

    fn rows() -> Vec<Row> {
        let records = [
            ["Dune", "Frank Herbert", "Fiction", "1965", "9780441013593"],
            ["Hello, World", "A \"Quoted\" Author", "", "", ""],
        ];
        shape_rows(records.map(|r| r.map(String::from)))
    }

    #[test]
    fn test_header_and_records_use_crlf() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().collect();
        let bytes = encode_rows(&refs[..1]).unwrap();

        assert_eq!(
            String::from_utf8(bytes).unwrap(),
            "Title,Author,Genre,PublishedYear,ISBN\r\n\
             Dune,Frank Herbert,Fiction,1965,9780441013593\r\n"
        );
    }

    #[test]
    fn test_fields_are_quoted_only_when_needed() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().skip(1).collect();
        let text = String::from_utf8(encode_rows(&refs).unwrap()).unwrap();

        assert!(text.ends_with("\"Hello, World\",\"A \"\"Quoted\"\" Author\",,,\r\n"));
    }

    #[test]
    fn test_row_order_is_preserved() {
        let rows = rows();
        let refs: Vec<&Row> = rows.iter().rev().collect();
        let text = String::from_utf8(encode_rows(&refs).unwrap()).unwrap();
        let lines: Vec<&str> = text.split("\r\n").collect();

        assert!(lines[1].starts_with("\"Hello, World\""));
        assert!(lines[2].starts_with("Dune"));
    }

    #[test]
    fn test_export_filename() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        assert_eq!(export_filename(date), "csv-export-2024-03-07.csv");
    }
}
