//! Grid state owned by the application model
//!
//! Every transition here is synchronous and total. Derived rows are never
//! stored; [`GridState::view`] recomputes them on demand.

use crate::config::GridConfig;

use super::editing::{CellEditState, EditTrigger};
use super::edits::{EditPolicy, EditTracker};
use super::filter::FilterSet;
use super::model::{Column, Row, RowId};
use super::sort::{SortDirection, SortKey};
use super::store::RowStore;
use super::view::GridView;
use super::viewport::VirtualWindow;

/// Which virtualized layout the host is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresentationMode {
    /// One row per item, sortable column headers
    #[default]
    Table,
    /// One taller card per item, for the compact layout
    Cards,
}

impl PresentationMode {
    /// Map the host's compact-layout flag to a mode
    pub fn from_compact(compact: bool) -> Self {
        if compact {
            PresentationMode::Cards
        } else {
            PresentationMode::Table
        }
    }

    pub fn edit_trigger(self) -> EditTrigger {
        match self {
            PresentationMode::Table => EditTrigger::DoubleClick,
            PresentationMode::Cards => EditTrigger::Tap,
        }
    }
}

/// Complete state of the grid
#[derive(Debug, Clone)]
pub struct GridState {
    store: RowStore,
    edits: EditTracker,
    filters: FilterSet,
    sort: Option<SortKey>,
    table_window: VirtualWindow,
    card_window: VirtualWindow,
    presentation: PresentationMode,
    editing: Option<CellEditState>,
    edit_policy: EditPolicy,
}

impl GridState {
    pub fn new(config: &GridConfig) -> Self {
        Self {
            store: RowStore::new(),
            edits: EditTracker::new(),
            filters: FilterSet::new(),
            sort: None,
            table_window: VirtualWindow::new(
                config.row_height,
                config.viewport_height,
                config.overscan,
            ),
            card_window: VirtualWindow::new(
                config.card_height,
                config.viewport_height,
                config.overscan,
            ),
            presentation: PresentationMode::Table,
            editing: None,
            edit_policy: config.edit_policy,
        }
    }

    // === Transitions ===

    /// Replace all data and clear every piece of derived state
    pub fn load(&mut self, rows: Vec<Row>) {
        self.store.load(rows);
        self.edits.clear();
        self.filters.clear();
        self.sort = None;
        self.editing = None;
        self.table_window.reset_scroll();
        self.card_window.reset_scroll();
    }

    /// Revert the working set to the snapshot; filters and sort stay
    pub fn reset_edits(&mut self) {
        self.store.reset();
        self.edits.clear();
        self.editing = None;
    }

    /// Drop all data, filters and sort
    pub fn delete_all(&mut self) {
        self.store.delete_all();
        self.edits.clear();
        self.filters.clear();
        self.sort = None;
        self.editing = None;
        self.table_window.reset_scroll();
        self.card_window.reset_scroll();
    }

    /// Write a value into the working set and record the edit
    ///
    /// Unknown row ids are ignored and return false.
    pub fn edit_cell(&mut self, row: RowId, column: Column, value: impl Into<String>) -> bool {
        let value = value.into();
        let policy_says_edited = match self.edit_policy {
            EditPolicy::Touched => true,
            EditPolicy::DiffersFromOriginal => {
                self.store.original_value(row, column) != Some(value.as_str())
            }
        };

        if !self.store.edit_cell(row, column, value) {
            tracing::debug!(%row, %column, "edit target not found, ignoring");
            return false;
        }

        if policy_says_edited {
            self.edits.mark_edited(row, column);
        } else {
            self.edits.unmark(row, column);
        }
        true
    }

    pub fn set_filter(&mut self, column: Column, term: impl Into<String>) {
        self.filters.set(column, term);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Header-click sort: toggles direction on the active column
    pub fn sort_by(&mut self, column: Column) {
        self.sort = Some(SortKey::toggle(self.sort, column));
    }

    pub fn set_sort(&mut self, key: Option<SortKey>) {
        self.sort = key;
    }

    /// Direction button of the compact sort controls
    ///
    /// Acts like re-selecting the active column, or the first column when
    /// nothing is sorted yet.
    pub fn toggle_sort_direction(&mut self) {
        let column = self.sort.map(|k| k.column).unwrap_or(Column::ALL[0]);
        self.sort_by(column);
    }

    /// Apply the host's compact-layout flag; returns true if the mode changed
    pub fn set_compact(&mut self, compact: bool) -> bool {
        let mode = PresentationMode::from_compact(compact);
        if mode == self.presentation {
            return false;
        }
        self.presentation = mode;
        self.active_window_mut().reset_scroll();
        true
    }

    pub fn scroll_to(&mut self, offset: f64) {
        self.active_window_mut().set_scroll_offset(offset);
    }

    pub fn scroll_by(&mut self, delta: f64) {
        let count = self.view_len();
        self.active_window_mut().scroll_by(delta, count);
    }

    pub fn set_viewport_height(&mut self, height: f64) {
        self.table_window.set_viewport_height(height);
        self.card_window.set_viewport_height(height);
    }

    // === Cell editing session ===

    /// Open an editor on a cell; returns false if the row does not exist
    pub fn start_editing(&mut self, row: RowId, column: Column) -> bool {
        match self.store.get(row) {
            Some(r) => {
                self.editing = Some(CellEditState::new(row, column, r.get(column)));
                true
            }
            None => false,
        }
    }

    pub fn set_edit_buffer(&mut self, text: impl Into<String>) {
        if let Some(edit) = &mut self.editing {
            edit.set_buffer(text);
        }
    }

    /// Close the editor, writing the value through if it changed
    ///
    /// Returns true when an edit was applied.
    pub fn commit_edit(&mut self) -> bool {
        match self.editing.take().and_then(CellEditState::commit) {
            Some(edit) => self.edit_cell(edit.row, edit.column, edit.value),
            None => false,
        }
    }

    pub fn cancel_edit(&mut self) {
        self.editing = None;
    }

    // === Queries ===

    /// Recompute the filtered, sorted and windowed view
    pub fn view(&self) -> GridView<'_> {
        GridView::compute(
            self.store.rows(),
            &self.filters,
            self.sort,
            self.active_window(),
        )
    }

    /// Rows in the current filtered order; used for export
    pub fn view_rows(&self) -> Vec<&Row> {
        self.view().rows
    }

    pub fn rows(&self) -> &[Row] {
        self.store.rows()
    }

    pub fn snapshot(&self) -> &[Row] {
        self.store.snapshot()
    }

    pub fn row(&self, id: RowId) -> Option<&Row> {
        self.store.get(id)
    }

    pub fn has_data(&self) -> bool {
        !self.store.is_empty()
    }

    pub fn has_edits(&self) -> bool {
        !self.edits.is_empty()
    }

    pub fn edited_cell_count(&self) -> usize {
        self.edits.count()
    }

    pub fn is_edited(&self, row: RowId, column: Column) -> bool {
        self.edits.is_edited(row, column)
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn sort(&self) -> Option<SortKey> {
        self.sort
    }

    /// Direction shown by the compact sort controls
    pub fn sort_direction(&self) -> SortDirection {
        self.sort.map(|k| k.direction).unwrap_or_default()
    }

    pub fn presentation(&self) -> PresentationMode {
        self.presentation
    }

    pub fn editing(&self) -> Option<&CellEditState> {
        self.editing.as_ref()
    }

    pub fn edit_policy(&self) -> EditPolicy {
        self.edit_policy
    }

    /// Window for the current presentation mode
    pub fn active_window(&self) -> &VirtualWindow {
        match self.presentation {
            PresentationMode::Table => &self.table_window,
            PresentationMode::Cards => &self.card_window,
        }
    }

    fn active_window_mut(&mut self) -> &mut VirtualWindow {
        match self.presentation {
            PresentationMode::Table => &mut self.table_window,
            PresentationMode::Cards => &mut self.card_window,
        }
    }

    fn view_len(&self) -> usize {
        self.filters.apply(self.store.rows()).len()
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::new(&GridConfig::default())
    }
}
