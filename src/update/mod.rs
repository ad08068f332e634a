//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod grid;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::GridSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use grid::update_grid;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Grid(m) => grid::update_grid(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Captures before/after grid counters and logs diffs for debugging.
/// Filters out noisy messages like scrolling and keystrokes from logging.
#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::GridMsg;

    let is_noisy = matches!(
        &msg,
        Msg::Grid(GridMsg::ScrollTo(_) | GridMsg::ScrollBy(_) | GridMsg::EditInput(_))
    );

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let before = GridSnapshot::from_model(model);
    let result = update_inner(model, msg);

    if !is_noisy {
        if let Some(diff) = before.diff(&GridSnapshot::from_model(model)) {
            debug!(target: "grid", %diff, "state changed");
        }
    }

    result
}

/// Get a display name for a message type
///
/// Uses Debug formatting except for messages that carry whole data sets,
/// which are summarized by size.
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::codec::ImportSource;
    use crate::messages::AppMsg;

    match msg {
        Msg::Grid(m) => format!("Grid::{:?}", m),
        Msg::App(AppMsg::Import(request)) => match &request.source {
            ImportSource::Path(path) => format!("App::Import({})", path.display()),
            ImportSource::Bytes(bytes) => {
                format!("App::Import({}, {} bytes)", request.name, bytes.len())
            }
        },
        Msg::App(AppMsg::ImportCompleted(Ok(rows))) => {
            format!("App::ImportCompleted(Ok({} rows))", rows.len())
        }
        Msg::App(m) => format!("App::{:?}", m),
    }
}
