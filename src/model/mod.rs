//! Application model
//!
//! `AppModel` exclusively owns every piece of state; the update functions are
//! the only writers.

pub mod ui;

pub use ui::UiState;

use crate::config::GridConfig;
use crate::grid::{status, GridState, GridView};

/// The complete application state
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Rows, edits, filters, sort and viewport windows
    pub grid: GridState,
    /// Busy flags and import error
    pub ui: UiState,
    /// Persisted configuration
    pub config: GridConfig,
}

impl AppModel {
    /// Create an empty model from a configuration
    pub fn new(config: GridConfig) -> Self {
        Self {
            grid: GridState::new(&config),
            ui: UiState::new(),
            config,
        }
    }

    /// Create a model from the configuration on disk
    pub fn load() -> Self {
        Self::new(GridConfig::load())
    }

    /// Filtered, sorted and windowed view of the working set
    pub fn view(&self) -> GridView<'_> {
        self.grid.view()
    }

    /// `"{rows} rows • {n} edited cells"` header line
    pub fn summary_line(&self) -> String {
        status::summary_line(self.grid.rows().len(), self.grid.edited_cell_count())
    }

    /// `"Showing {filtered} of {total} rows"` filter bar line
    pub fn showing_line(&self) -> String {
        status::showing_line(self.grid.view().filtered_rows(), self.grid.rows().len())
    }
}

impl Default for AppModel {
    fn default() -> Self {
        Self::new(GridConfig::default())
    }
}
