//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=tabula::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/tabula/logs/tabula.log` with daily rotation.
//! File logging uses debug level by default for more verbose troubleshooting.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::AppModel;

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`). Safe to call more than
/// once; later calls leave the first subscriber in place.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    // Console layer - respects RUST_LOG
    let console_layer = fmt::layer()
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    // File layer - always debug level for troubleshooting
    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(logs_dir, "tabula.log");
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    let _ = tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init();
}

/// Lightweight snapshot of grid state for diffing across an update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridSnapshot {
    pub rows: usize,
    pub visible_rows: usize,
    pub edited_cells: usize,
    pub active_filters: usize,
    pub sort: Option<String>,
}

impl GridSnapshot {
    pub fn from_model(model: &AppModel) -> Self {
        let grid = &model.grid;
        Self {
            rows: grid.rows().len(),
            visible_rows: grid.view().filtered_rows(),
            edited_cells: grid.edited_cell_count(),
            active_filters: grid.filters().active_count(),
            sort: grid
                .sort()
                .map(|key| format!("{} {:?}", key.column, key.direction)),
        }
    }

    /// Generate a diff description between two snapshots
    pub fn diff(&self, other: &GridSnapshot) -> Option<String> {
        let mut changes = Vec::new();
        if self.rows != other.rows {
            changes.push(format!("rows: {} → {}", self.rows, other.rows));
        }
        if self.visible_rows != other.visible_rows {
            changes.push(format!(
                "visible: {} → {}",
                self.visible_rows, other.visible_rows
            ));
        }
        if self.edited_cells != other.edited_cells {
            changes.push(format!(
                "edited: {} → {}",
                self.edited_cells, other.edited_cells
            ));
        }
        if self.active_filters != other.active_filters {
            changes.push(format!(
                "filters: {} → {}",
                self.active_filters, other.active_filters
            ));
        }
        if self.sort != other.sort {
            changes.push(format!("sort: {:?} → {:?}", self.sort, other.sort));
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
