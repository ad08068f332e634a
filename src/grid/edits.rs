//! Edited-cell tracking

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::model::{CellKey, Column, RowId};

/// When a committed edit counts as an edited cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditPolicy {
    /// Every commit marks the cell, even one that restores the original value
    #[default]
    Touched,
    /// Only cells whose value differs from the snapshot are marked
    DiffersFromOriginal,
}

/// Set of cells touched since the last load, reset or delete
#[derive(Debug, Clone, Default)]
pub struct EditTracker {
    cells: HashSet<CellKey>,
}

impl EditTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an edit, regardless of whether the value actually changed
    pub fn mark_edited(&mut self, row: RowId, column: Column) {
        self.cells.insert(CellKey::new(row, column));
    }

    /// Forget a cell; only used by [`EditPolicy::DiffersFromOriginal`]
    pub fn unmark(&mut self, row: RowId, column: Column) {
        self.cells.remove(&CellKey::new(row, column));
    }

    pub fn is_edited(&self, row: RowId, column: Column) -> bool {
        self.cells.contains(&CellKey::new(row, column))
    }

    pub fn count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mark_is_idempotent_per_cell() {
        let mut tracker = EditTracker::new();
        tracker.mark_edited(RowId(0), Column::Title);
        tracker.mark_edited(RowId(0), Column::Title);
        tracker.mark_edited(RowId(0), Column::Author);

        assert_eq!(tracker.count(), 2);
        assert!(tracker.is_edited(RowId(0), Column::Title));
        assert!(!tracker.is_edited(RowId(1), Column::Title));
    }

    #[test]
    fn test_clear_empties_set() {
        let mut tracker = EditTracker::new();
        tracker.mark_edited(RowId(3), Column::Isbn);
        tracker.clear();

        assert!(tracker.is_empty());
        assert!(!tracker.is_edited(RowId(3), Column::Isbn));
    }

    #[test]
    fn test_unmark_removes_single_cell() {
        let mut tracker = EditTracker::new();
        tracker.mark_edited(RowId(1), Column::Genre);
        tracker.mark_edited(RowId(2), Column::Genre);
        tracker.unmark(RowId(1), Column::Genre);

        assert_eq!(tracker.count(), 1);
        assert!(tracker.is_edited(RowId(2), Column::Genre));
    }

    #[test]
    fn test_policy_parses_from_kebab_case() {
        let policy: EditPolicy = serde_yaml::from_str("differs-from-original").unwrap();
        assert_eq!(policy, EditPolicy::DiffersFromOriginal);
        assert_eq!(EditPolicy::default(), EditPolicy::Touched);
    }
}
