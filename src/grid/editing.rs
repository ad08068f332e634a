//! In-progress cell edit session

use super::model::{Column, RowId};

/// How a cell enters edit mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditTrigger {
    /// Compact layout: a single tap opens the editor
    Tap,
    /// Table layout: a double click opens the editor
    DoubleClick,
}

/// State for editing a single cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEditState {
    pub row: RowId,
    pub column: Column,
    /// Value the cell held when editing started (for cancel)
    pub original: String,
    buffer: String,
}

/// A finished edit that should be written through to the row store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellEdit {
    pub row: RowId,
    pub column: Column,
    pub value: String,
}

impl CellEditState {
    /// Start editing with the buffer seeded from the current value
    pub fn new(row: RowId, column: Column, value: impl Into<String>) -> Self {
        let original = value.into();
        Self {
            row,
            column,
            buffer: original.clone(),
            original,
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Replace the buffer with the input's current text
    pub fn set_buffer(&mut self, text: impl Into<String>) {
        self.buffer = text.into();
    }

    /// Check if content changed from original
    pub fn is_modified(&self) -> bool {
        self.buffer != self.original
    }

    /// Finish editing, yielding an edit only when the buffer changed
    pub fn commit(self) -> Option<CellEdit> {
        if !self.is_modified() {
            return None;
        }
        Some(CellEdit {
            row: self.row,
            column: self.column,
            value: self.buffer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_unmodified() {
        let edit = CellEditState::new(RowId(1), Column::Title, "hello");

        assert_eq!(edit.buffer(), "hello");
        assert_eq!(edit.original, "hello");
        assert!(!edit.is_modified());
    }

    #[test]
    fn test_commit_unchanged_yields_nothing() {
        let mut edit = CellEditState::new(RowId(0), Column::Genre, "Fiction");
        edit.set_buffer("Fact");
        edit.set_buffer("Fiction");

        assert_eq!(edit.commit(), None);
    }

    #[test]
    fn test_commit_changed_yields_edit() {
        let mut edit = CellEditState::new(RowId(4), Column::Isbn, "");
        edit.set_buffer("9780000000002");

        assert_eq!(
            edit.commit(),
            Some(CellEdit {
                row: RowId(4),
                column: Column::Isbn,
                value: "9780000000002".to_string(),
            })
        );
    }
}
