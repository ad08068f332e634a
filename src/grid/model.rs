//! Grid data model types
//!
//! Rows have a fixed shape: one string per [`Column`], addressed by a stable
//! [`RowId`] that is assigned once at load time.

use std::fmt;
use std::str::FromStr;

/// The fixed, compiled-in column set
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Column {
    Title,
    Author,
    Genre,
    PublishedYear,
    Isbn,
}

/// Number of declared columns
pub const COLUMN_COUNT: usize = 5;

impl Column {
    /// All columns in display order
    pub const ALL: [Column; COLUMN_COUNT] = [
        Column::Title,
        Column::Author,
        Column::Genre,
        Column::PublishedYear,
        Column::Isbn,
    ];

    /// Header name as it appears in imported and exported files
    pub fn name(self) -> &'static str {
        match self {
            Column::Title => "Title",
            Column::Author => "Author",
            Column::Genre => "Genre",
            Column::PublishedYear => "PublishedYear",
            Column::Isbn => "ISBN",
        }
    }

    /// Position of this column in a row
    pub fn index(self) -> usize {
        self as usize
    }

    /// Look up a column by its header name (exact match)
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.name() == name)
    }

    /// Whether values in this column are compared as integers when sorting
    pub fn is_numeric(self) -> bool {
        matches!(self, Column::PublishedYear)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Stable row identifier, rendered as `row-<index>`
///
/// The index is the row's 0-based position in the sequence it was loaded
/// from. Ids are never recomputed after load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RowId(pub usize);

impl RowId {
    /// Load-order index this id was assigned from
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row-{}", self.0)
    }
}

/// Error returned when a string is not of the form `row-<index>`
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid row id: {0:?}")]
pub struct InvalidRowId(pub String);

impl FromStr for RowId {
    type Err = InvalidRowId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("row-")
            .and_then(|n| n.parse().ok())
            .map(RowId)
            .ok_or_else(|| InvalidRowId(s.to_string()))
    }
}

/// Column values of a record before it has been assigned an id
pub type RowValues = [String; COLUMN_COUNT];

/// One data record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: RowId,
    values: RowValues,
}

impl Row {
    /// Create a row from an id and its column values
    pub fn new(id: RowId, values: RowValues) -> Self {
        Self { id, values }
    }

    /// Value of a column; never absent
    pub fn get(&self, column: Column) -> &str {
        &self.values[column.index()]
    }

    /// Overwrite a single column value
    pub fn set(&mut self, column: Column, value: impl Into<String>) {
        self.values[column.index()] = value.into();
    }

    /// Values in column order
    pub fn values(&self) -> &RowValues {
        &self.values
    }

    /// Iterate `(column, value)` pairs in column order
    pub fn cells(&self) -> impl Iterator<Item = (Column, &str)> {
        Column::ALL
            .into_iter()
            .zip(self.values.iter().map(String::as_str))
    }
}

/// Assign sequential ids to a batch of freshly decoded or generated values
///
/// This is the single Row-shaping step shared by file import and sample
/// generation.
pub fn shape_rows(records: impl IntoIterator<Item = RowValues>) -> Vec<Row> {
    records
        .into_iter()
        .enumerate()
        .map(|(index, values)| Row::new(RowId(index), values))
        .collect()
}

/// A single cell address, used as the edited-cell set key
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CellKey {
    pub row: RowId,
    pub column: Column,
}

impl CellKey {
    pub fn new(row: RowId, column: Column) -> Self {
        Self { row, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(title: &str) -> RowValues {
        [
            title.to_string(),
            String::new(),
            String::new(),
            String::new(),
            String::new(),
        ]
    }

    #[test]
    fn test_column_names_round_trip() {
        for column in Column::ALL {
            assert_eq!(Column::from_name(column.name()), Some(column));
        }
        assert_eq!(Column::from_name("isbn"), None);
        assert_eq!(Column::Isbn.to_string(), "ISBN");
    }

    #[test]
    fn test_column_index_matches_display_order() {
        for (i, column) in Column::ALL.iter().enumerate() {
            assert_eq!(column.index(), i);
        }
    }

    #[test]
    fn test_row_id_display_and_parse() {
        assert_eq!(RowId(42).to_string(), "row-42");
        assert_eq!("row-7".parse::<RowId>(), Ok(RowId(7)));
        assert!("row-".parse::<RowId>().is_err());
        assert!("7".parse::<RowId>().is_err());
        assert!("row-x".parse::<RowId>().is_err());
    }

    #[test]
    fn test_shape_rows_assigns_sequential_ids() {
        let rows = shape_rows(vec![values("a"), values("b"), values("c")]);

        let ids: Vec<String> = rows.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["row-0", "row-1", "row-2"]);
        assert_eq!(rows[1].get(Column::Title), "b");
    }

    #[test]
    fn test_row_set_touches_one_column() {
        let mut row = Row::new(RowId(0), values("before"));
        row.set(Column::Genre, "Fiction");

        assert_eq!(row.get(Column::Title), "before");
        assert_eq!(row.get(Column::Genre), "Fiction");
        assert_eq!(row.get(Column::Author), "");
    }

    #[test]
    fn test_row_cells_iterator() {
        let row = Row::new(RowId(0), values("t"));
        let cells: Vec<(Column, &str)> = row.cells().collect();

        assert_eq!(cells.len(), COLUMN_COUNT);
        assert_eq!(cells[0], (Column::Title, "t"));
        assert_eq!(cells[4], (Column::Isbn, ""));
    }
}
