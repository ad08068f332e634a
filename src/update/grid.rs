//! Grid message handlers (editing, filter, sort, viewport)

use crate::commands::Cmd;
use crate::messages::GridMsg;
use crate::model::AppModel;
use crate::notifications::Notification;

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    let grid = &mut model.grid;

    match msg {
        GridMsg::EditCell { row, column, value } => {
            grid.edit_cell(row, column, value).then_some(Cmd::Redraw)
        }

        GridMsg::ResetEdits => {
            if !grid.has_data() {
                return None;
            }
            let reverted = grid.edited_cell_count();
            grid.reset_edits();
            tracing::info!("Reset {} edited cells", reverted);
            Some(Cmd::redraw_with(Notification::EditsReset))
        }

        GridMsg::DeleteAll => {
            if !grid.has_data() {
                return None;
            }
            let rows = grid.rows().len();
            grid.delete_all();
            model.ui.import_error = None;
            tracing::info!("Deleted {} rows", rows);
            Some(Cmd::redraw_with(Notification::DataDeleted))
        }

        // === Cell Editor ===
        GridMsg::StartEditing { row, column } => {
            grid.start_editing(row, column).then_some(Cmd::Redraw)
        }

        GridMsg::EditInput(text) => {
            if grid.editing().is_none() {
                return None;
            }
            grid.set_edit_buffer(text);
            Some(Cmd::Redraw)
        }

        GridMsg::CommitEdit => {
            if grid.editing().is_none() {
                return None;
            }
            grid.commit_edit();
            Some(Cmd::Redraw)
        }

        GridMsg::CancelEdit => {
            if grid.editing().is_none() {
                return None;
            }
            grid.cancel_edit();
            Some(Cmd::Redraw)
        }

        // === Filter / Sort ===
        GridMsg::SetFilter { column, term } => {
            grid.set_filter(column, term);
            Some(Cmd::Redraw)
        }

        GridMsg::ClearFilters => {
            grid.clear_filters();
            Some(Cmd::Redraw)
        }

        GridMsg::SortBy(column) => {
            grid.sort_by(column);
            Some(Cmd::Redraw)
        }

        GridMsg::SetSort(key) => {
            grid.set_sort(key);
            Some(Cmd::Redraw)
        }

        GridMsg::ToggleSortDirection => {
            grid.toggle_sort_direction();
            Some(Cmd::Redraw)
        }

        // === Viewport ===
        GridMsg::ScrollTo(offset) => {
            grid.scroll_to(offset);
            Some(Cmd::Redraw)
        }

        GridMsg::ScrollBy(delta) => {
            grid.scroll_by(delta);
            Some(Cmd::Redraw)
        }

        GridMsg::ResizeViewport(height) => {
            grid.set_viewport_height(height);
            Some(Cmd::Redraw)
        }

        GridMsg::SetCompact(compact) => grid.set_compact(compact).then_some(Cmd::Redraw),
    }
}
