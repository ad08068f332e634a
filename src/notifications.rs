//! User-facing notification events
//!
//! The engine raises these through `Cmd::Notify`; delivery is up to the host.

use std::fmt;

use crate::grid::status::format_count;

/// Visual weight of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Warning,
    Destructive,
}

/// A named notification event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    /// Data replaced by an import or generated sample
    Loaded { rows: usize },
    /// Working set reverted to the snapshot
    EditsReset,
    /// All data removed
    DataDeleted,
    /// Export file written
    Exported { rows: usize, filename: String },
    /// Export could not be produced or written
    ExportFailed,
    /// Import rejected; the message is already user-facing
    ImportFailed { message: String },
}

impl Notification {
    pub fn severity(&self) -> Severity {
        match self {
            Notification::Loaded { .. } | Notification::Exported { .. } => Severity::Success,
            Notification::EditsReset => Severity::Warning,
            Notification::DataDeleted
            | Notification::ExportFailed
            | Notification::ImportFailed { .. } => Severity::Destructive,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Notification::Loaded { .. } => "CSV Loaded Successfully",
            Notification::EditsReset => "Changes Reset",
            Notification::DataDeleted => "File Deleted",
            Notification::Exported { .. } => "Export Successful",
            Notification::ExportFailed => "Export Failed",
            Notification::ImportFailed { .. } => "Import Failed",
        }
    }

    pub fn description(&self) -> String {
        match self {
            Notification::Loaded { rows } => format!("Loaded {} rows", format_count(*rows)),
            Notification::EditsReset => "All edits have been reverted to original data".into(),
            Notification::DataDeleted => {
                "CSV file has been removed. You can upload a new file.".into()
            }
            Notification::Exported { rows, filename } => {
                format!("Downloaded {} rows as {}", format_count(*rows), filename)
            }
            Notification::ExportFailed => {
                "There was an error exporting your CSV file. Please try again.".into()
            }
            Notification::ImportFailed { message } => message.clone(),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.description())
    }
}

/// Receives notifications; fire-and-forget
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

impl<F> NotificationSink for F
where
    F: FnMut(Notification),
{
    fn notify(&mut self, notification: Notification) {
        self(notification)
    }
}

/// Sink that writes notifications to the log
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NotificationSink for TracingSink {
    fn notify(&mut self, notification: Notification) {
        match notification.severity() {
            Severity::Success => tracing::info!("{}", notification),
            Severity::Warning | Severity::Destructive => tracing::warn!("{}", notification),
        }
    }
}
