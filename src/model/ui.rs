//! UI state - busy flags and the last import error

/// UI state tracked alongside the grid
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Whether an import is in flight (single-flight guard)
    pub is_importing: bool,
    /// Whether an export file is being written
    pub is_exporting: bool,
    /// Message of the most recent failed import, shown under the upload zone
    pub import_error: Option<String>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the UI is busy (importing or exporting)
    pub fn is_busy(&self) -> bool {
        self.is_importing || self.is_exporting
    }
}
