//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use std::path::PathBuf;

use crate::codec::ImportRequest;
use crate::notifications::Notification;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the grid
    Redraw,
    /// Decode an import on a worker thread
    /// Sends Msg::App(ImportCompleted) when done
    Import { request: ImportRequest },
    /// Write encoded export bytes to disk on a worker thread
    /// Sends Msg::App(ExportCompleted) when done
    WriteExport {
        path: PathBuf,
        content: Vec<u8>,
        rows: usize,
        filename: String,
    },
    /// Hand a notification to the host's sink
    Notify(Notification),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw and notify in one command
    pub fn redraw_with(notification: Notification) -> Self {
        Cmd::Batch(vec![Cmd::Redraw, Cmd::Notify(notification)])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Busy indicator appears while the worker runs
            Cmd::Import { .. } => true,
            Cmd::WriteExport { .. } => true,
            // Notifications are delivered outside the grid
            Cmd::Notify(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Notifications carried by this command, in order
    pub fn notifications(&self) -> Vec<&Notification> {
        match self {
            Cmd::Notify(n) => vec![n],
            Cmd::Batch(cmds) => cmds.iter().flat_map(|c| c.notifications()).collect(),
            _ => Vec::new(),
        }
    }
}
