//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

use crate::codec::{ImportError, ImportRequest};
use crate::grid::{Column, Row, RowId, SortKey};

/// Grid messages (editing, filtering, sorting, scrolling)
#[derive(Debug, Clone)]
pub enum GridMsg {
    // === Data ===
    /// Write a value into a cell of the working set
    EditCell {
        row: RowId,
        column: Column,
        value: String,
    },
    /// Revert all edits to the loaded data
    ResetEdits,
    /// Remove all data, filters and sort
    DeleteAll,

    // === Cell Editor ===
    /// Open the inline editor on a cell
    StartEditing { row: RowId, column: Column },
    /// Replace the editor buffer
    EditInput(String),
    /// Close the editor, applying the buffer if it changed
    CommitEdit,
    /// Close the editor without applying
    CancelEdit,

    // === Filter / Sort ===
    /// Set a column's filter term (empty removes it)
    SetFilter { column: Column, term: String },
    /// Remove every filter term
    ClearFilters,
    /// Header click: sort by column, toggling direction if already active
    SortBy(Column),
    /// Replace the sort key outright (compact sort controls)
    SetSort(Option<SortKey>),
    /// Flip the direction of the active sort
    ToggleSortDirection,

    // === Viewport ===
    /// Scroll the active window to an absolute offset (pixels)
    ScrollTo(f64),
    /// Scroll the active window by a delta (pixels)
    ScrollBy(f64),
    /// Container height changed (pixels)
    ResizeViewport(f64),
    /// Host's compact-layout breakpoint signal
    SetCompact(bool),
}

/// Application-level messages (import, export, sample data)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// User picked or dropped a file
    Import(ImportRequest),
    /// Import finished on the worker (async result)
    ImportCompleted(Result<Vec<Row>, ImportError>),
    /// Load synthetic rows instead of a file
    GenerateSample,
    /// Export the current view
    Export,
    /// Export file write finished (async result)
    ExportCompleted {
        filename: String,
        rows: usize,
        result: Result<PathBuf, String>,
    },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Grid messages (editing, filter, sort, viewport)
    Grid(GridMsg),
    /// App messages (file I/O)
    App(AppMsg),
}

impl From<GridMsg> for Msg {
    fn from(msg: GridMsg) -> Self {
        Msg::Grid(msg)
    }
}

impl From<AppMsg> for Msg {
    fn from(msg: AppMsg) -> Self {
        Msg::App(msg)
    }
}
