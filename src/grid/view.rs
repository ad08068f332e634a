//! Derived grid view: filter, then sort, then window
//!
//! A view is recomputed from scratch every time it is requested. It borrows
//! rows from the working set and never mutates them.

use super::filter::FilterSet;
use super::model::Row;
use super::sort::{sort_rows, SortKey};
use super::viewport::{VirtualItem, VirtualWindow, Window};

/// The rows the host should display, plus the slice to materialize
#[derive(Debug, Clone)]
pub struct GridView<'a> {
    /// Filtered and sorted rows
    pub rows: Vec<&'a Row>,
    /// Size of the working set before filtering
    pub total_rows: usize,
    /// Materialization range over `rows`
    pub window: Window,
}

impl<'a> GridView<'a> {
    /// Run the full Filter → Sort → Window pipeline
    pub fn compute(
        working: &'a [Row],
        filters: &FilterSet,
        sort: Option<SortKey>,
        viewport: &VirtualWindow,
    ) -> Self {
        let filtered = filters.apply(working);
        let rows = sort_rows(&filtered, sort);
        let window = viewport.window(rows.len());
        Self {
            rows,
            total_rows: working.len(),
            window,
        }
    }

    /// Number of rows surviving the filters
    pub fn filtered_rows(&self) -> usize {
        self.rows.len()
    }

    /// Materialized rows with their placement
    pub fn visible(&self) -> impl Iterator<Item = (VirtualItem, &'a Row)> + '_ {
        self.window
            .as_items()
            .into_iter()
            .flat_map(|range| range.items())
            .map(move |item| (item, self.rows[item.index]))
    }

    pub fn has_data(&self) -> bool {
        self.window.has_data()
    }
}
