//! Row storage: the pristine snapshot plus the editable working set

use super::model::{Column, Row, RowId};

/// Holds the rows as loaded and the working copy that edits apply to
#[derive(Debug, Clone, Default)]
pub struct RowStore {
    /// Rows exactly as loaded, kept for reset
    snapshot: Vec<Row>,
    /// Current, possibly edited rows
    working: Vec<Row>,
}

impl RowStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace both row sets with a freshly loaded batch
    pub fn load(&mut self, rows: Vec<Row>) {
        self.working = rows.clone();
        self.snapshot = rows;
    }

    /// Restore the working set from the snapshot, keeping the snapshot
    pub fn reset(&mut self) {
        self.working = self.snapshot.clone();
    }

    /// Drop all rows
    pub fn delete_all(&mut self) {
        self.snapshot.clear();
        self.working.clear();
    }

    /// Overwrite one cell of a working row
    ///
    /// Returns false (and changes nothing) when no row has this id.
    pub fn edit_cell(&mut self, id: RowId, column: Column, value: impl Into<String>) -> bool {
        match self.position(id) {
            Some(pos) => {
                self.working[pos].set(column, value);
                true
            }
            None => false,
        }
    }

    /// Working row with this id
    pub fn get(&self, id: RowId) -> Option<&Row> {
        self.position(id).map(|pos| &self.working[pos])
    }

    /// Value of a cell as originally loaded
    pub fn original_value(&self, id: RowId, column: Column) -> Option<&str> {
        Self::find(&self.snapshot, id).map(|row| row.get(column))
    }

    /// Working set in load order
    pub fn rows(&self) -> &[Row] {
        &self.working
    }

    /// Snapshot in load order
    pub fn snapshot(&self) -> &[Row] {
        &self.snapshot
    }

    pub fn len(&self) -> usize {
        self.working.len()
    }

    pub fn is_empty(&self) -> bool {
        self.working.is_empty()
    }

    fn position(&self, id: RowId) -> Option<usize> {
        Self::locate(&self.working, id)
    }

    fn find(rows: &[Row], id: RowId) -> Option<&Row> {
        Self::locate(rows, id).map(|pos| &rows[pos])
    }

    // Ids are assigned from load order, so the index is a direct hit unless
    // the batch was shaped elsewhere.
    fn locate(rows: &[Row], id: RowId) -> Option<usize> {
        match rows.get(id.index()) {
            Some(row) if row.id == id => Some(id.index()),
            _ => rows.iter().position(|row| row.id == id),
        }
    }
}
