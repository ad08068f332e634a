//! Tabular data engine
//!
//! Holds the loaded rows and everything derived from them:
//! - Row store with the pristine snapshot used for reset
//! - Edited-cell tracking
//! - Per-column filtering and single-column sorting
//! - Viewport windowing for table rows and compact cards
//!
//! # Architecture
//!
//! ```text
//! GridState
//! ├── RowStore (snapshot + working set)
//! ├── EditTracker (touched cells)
//! ├── FilterSet + Option<SortKey>
//! ├── VirtualWindow × 2 (table, cards)
//! └── CellEditState (when editing)
//!
//! view() = working set → FilterSet::apply → sort_rows → VirtualWindow::window
//! ```

mod editing;
mod edits;
mod filter;
mod model;
mod sort;
mod state;
pub mod status;
mod store;
mod view;
mod viewport;

pub use editing::{CellEdit, CellEditState, EditTrigger};
pub use edits::{EditPolicy, EditTracker};
pub use filter::FilterSet;
pub use model::{shape_rows, CellKey, Column, InvalidRowId, Row, RowId, RowValues, COLUMN_COUNT};
pub use sort::{compare_values, parse_leading_int, sort_rows, SortDirection, SortKey};
pub use state::{GridState, PresentationMode};
pub use store::RowStore;
pub use view::GridView;
pub use viewport::{
    VirtualItem, VirtualWindow, Window, WindowRange, CARD_HEIGHT, DEFAULT_OVERSCAN, ROW_HEIGHT,
    VIEWPORT_HEIGHT,
};
