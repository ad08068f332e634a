//! tabula - Elm-style spreadsheet editing engine
//!
//! This crate provides the core types and logic for editing a delimited book
//! catalog: a row store with a reset snapshot, edit tracking, filtering,
//! sorting and viewport windowing for tens of thousands of rows.
//!
//! Hosts render [`AppModel::view`] and feed user events through
//! [`Runtime::dispatch`].

pub mod codec;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod grid;
pub mod messages;
pub mod model;
pub mod notifications;
pub mod runtime;
pub mod sample;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::GridConfig;
pub use messages::{AppMsg, GridMsg, Msg};
pub use model::AppModel;
pub use notifications::{Notification, NotificationSink};
pub use runtime::Runtime;
pub use update::update;
