//! App message handlers (import, export, sample data)

use crate::codec::{self, ImportError};
use crate::commands::Cmd;
use crate::grid::Row;
use crate::messages::AppMsg;
use crate::model::AppModel;
use crate::notifications::Notification;
use crate::sample;

/// Handle app messages (import, export, sample data)
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Import(request) => {
            if model.ui.is_importing {
                tracing::debug!("Import already in flight, ignoring {}", request.name);
                return None;
            }

            if let Err(e) = codec::validate_import(&request) {
                return Some(import_failed(model, e));
            }

            model.ui.is_importing = true;
            model.ui.import_error = None;
            tracing::debug!("Importing {}", request.name);
            Some(Cmd::Import { request })
        }

        AppMsg::ImportCompleted(result) => {
            model.ui.is_importing = false;
            match result {
                Ok(rows) if rows.is_empty() => Some(import_failed(model, ImportError::Empty)),
                Ok(rows) => Some(load_rows(model, rows)),
                Err(e) => Some(import_failed(model, e)),
            }
        }

        AppMsg::GenerateSample => {
            if model.ui.is_importing {
                tracing::debug!("Import in flight, ignoring sample generation");
                return None;
            }
            let rows = sample::generate(model.config.sample_rows, &mut rand::thread_rng());
            if rows.is_empty() {
                return Some(import_failed(model, ImportError::Empty));
            }
            Some(load_rows(model, rows))
        }

        AppMsg::Export => {
            if model.ui.is_exporting {
                tracing::debug!("Export already in flight, ignoring");
                return None;
            }

            let rows = model.grid.view_rows();
            if rows.is_empty() {
                tracing::debug!("Nothing to export");
                return None;
            }

            let count = rows.len();
            match codec::encode_rows(&rows) {
                Ok(content) => {
                    let filename = codec::export_filename(chrono::Local::now().date_naive());
                    let path = model.config.resolved_export_dir().join(&filename);
                    model.ui.is_exporting = true;
                    Some(Cmd::WriteExport {
                        path,
                        content,
                        rows: count,
                        filename,
                    })
                }
                Err(e) => {
                    tracing::warn!("Failed to encode export: {}", e);
                    Some(Cmd::Notify(Notification::ExportFailed))
                }
            }
        }

        AppMsg::ExportCompleted {
            filename,
            rows,
            result,
        } => {
            model.ui.is_exporting = false;
            match result {
                Ok(path) => {
                    tracing::info!("Exported {} rows to {}", rows, path.display());
                    Some(Cmd::redraw_with(Notification::Exported { rows, filename }))
                }
                Err(e) => {
                    tracing::warn!("Failed to write {}: {}", filename, e);
                    Some(Cmd::redraw_with(Notification::ExportFailed))
                }
            }
        }
    }
}

/// Replace all data; shared by import and sample generation
fn load_rows(model: &mut AppModel, rows: Vec<Row>) -> Cmd {
    let count = rows.len();
    model.grid.load(rows);
    model.ui.import_error = None;
    tracing::info!("Loaded {} rows", count);
    Cmd::redraw_with(Notification::Loaded { rows: count })
}

/// Record a rejected import; grid state is left untouched
fn import_failed(model: &mut AppModel, error: ImportError) -> Cmd {
    let message = error.to_string();
    tracing::warn!("Import failed: {}", message);
    model.ui.import_error = Some(message.clone());
    Cmd::redraw_with(Notification::ImportFailed { message })
}
